use crate::segment::Segment;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Ring radii are whole multiples of `diameter / DIAMETER_DIVISIONS`.
pub const DIAMETER_DIVISIONS: f64 = 6.0;

/// Declaration order is hit-test priority: outer first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum RingKind {
    #[strum(to_string = "outer", serialize = "0")]
    Outer,
    #[strum(to_string = "middle", serialize = "1")]
    Middle,
    #[strum(to_string = "center", serialize = "centre", serialize = "2")]
    Center,
}

impl RingKind {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    /// `(inner, outer)` in units of `diameter / 6`.
    pub fn radius_units(&self) -> (f64, f64) {
        match self {
            Self::Outer => (2.0, 3.0),
            Self::Middle => (1.0, 2.0),
            Self::Center => (0.0, 1.0),
        }
    }

    /// `(inner, outer)` radii for a container of the given diameter.
    pub fn radii(&self, diameter: f64) -> (f64, f64) {
        let (inner, outer) = self.radius_units();
        (
            diameter / DIAMETER_DIVISIONS * inner,
            diameter / DIAMETER_DIVISIONS * outer,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub kind: RingKind,
    pub segments: Vec<Segment>,
}

impl Ring {
    pub fn new(kind: RingKind, segments: Vec<Segment>) -> Self {
        Self { kind, segments }
    }

    pub fn total_value(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    pub fn clear_layout(&mut self) {
        self.segments.iter_mut().for_each(|s| s.wedge = None);
    }

    pub fn is_laid_out(&self) -> bool {
        self.segments.iter().all(Segment::is_laid_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_kind_deserialization() {
        let cases = vec![
            ("\"outer\"", RingKind::Outer),
            ("\"Outer\"", RingKind::Outer),
            ("\"MIDDLE\"", RingKind::Middle),
            ("\"1\"", RingKind::Middle),
            ("\"centre\"", RingKind::Center),
            ("\"2\"", RingKind::Center),
        ];

        for (json, expected) in cases {
            let deserialized: RingKind = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_radii_split_diameter_in_sixths() {
        assert_eq!(RingKind::Outer.radii(300.0), (100.0, 150.0));
        assert_eq!(RingKind::Middle.radii(300.0), (50.0, 100.0));
        assert_eq!(RingKind::Center.radii(300.0), (0.0, 50.0));
    }

    #[test]
    fn test_index_order_is_priority_order() {
        let order: Vec<_> = RingKind::iter().collect();
        assert_eq!(order, [RingKind::Outer, RingKind::Middle, RingKind::Center]);
        assert_eq!(RingKind::from_index(2), Some(RingKind::Center));
        assert_eq!(RingKind::from_index(3), None);
        assert_eq!(RingKind::Middle.as_index(), 1);
    }
}
