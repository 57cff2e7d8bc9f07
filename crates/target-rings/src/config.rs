use crate::ring::RingKind;
use crate::segment::{Color, ReferenceId, Segment};
use crate::store::{RingDefaults, SegmentConfigError, SegmentStore, equal_segments};
use crate::style::{LabelStyle, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn default_value() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SegmentConfig {
    pub id: ReferenceId,
    #[serde(default = "default_value")]
    pub value: f64,
    pub color: Option<Color>,
}

/// Either an explicit `segments` list or the `count`/`value`/`color`/`first_id` shorthand for
/// equal segments. Unset fields fall back to the ring's defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RingConfig {
    pub ring: RingKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentConfig>,
    pub count: Option<usize>,
    pub value: Option<f64>,
    pub color: Option<Color>,
    pub first_id: Option<i64>,
}

impl RingConfig {
    pub fn to_segments(&self) -> Vec<Segment> {
        let defaults = RingDefaults::for_ring(self.ring);
        let color = self.color.unwrap_or(defaults.color);

        if self.segments.is_empty() {
            return equal_segments(
                self.count.unwrap_or(defaults.count),
                self.value.unwrap_or(1.0),
                color,
                self.first_id.unwrap_or(defaults.first_id),
            );
        }

        self.segments
            .iter()
            .map(|s| Segment::new(s.value, s.color.unwrap_or(color), s.id))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct TargetConfig {
    #[serde(default)]
    pub rings: Vec<RingConfig>,
    #[serde(default)]
    pub stroke: StrokeStyle,
    #[serde(default)]
    pub label: LabelStyle,
}

impl TargetConfig {
    pub fn ring(&self, kind: RingKind) -> Option<&RingConfig> {
        self.rings.iter().find(|r| r.ring == kind)
    }

    /// Builds the store, validating every ring together so ids may move between rings.
    pub fn build_store(&self) -> Result<SegmentStore, SegmentConfigError> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.rings.iter().find(|r| !seen.insert(r.ring)) {
            return Err(SegmentConfigError::DuplicateRing(dup.ring));
        }

        let mut store = SegmentStore::empty();
        for kind in RingKind::iter() {
            let segments = match self.ring(kind) {
                Some(ring) => ring.to_segments(),
                None => RingDefaults::for_ring(kind).segments(),
            };
            store.configure(kind, segments)?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_builds_default_store() {
        let config: TargetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.build_store().unwrap(), SegmentStore::new());
        assert_eq!(config.stroke, StrokeStyle::default());
        assert_eq!(config.label, LabelStyle::default());
    }

    #[test]
    fn test_shorthand_and_explicit_rings() {
        let json = r##"{
            "rings": [
                { "ring": "outer", "count": 8, "color": "orange", "first_id": 10 },
                { "ring": "Center", "segments": [
                    { "id": 1001, "value": 3.0 },
                    { "id": 1002, "color": "#102030" }
                ] }
            ],
            "stroke": { "width": 2.0 }
        }"##;
        let config: TargetConfig = serde_json::from_str(json).unwrap();
        let store = config.build_store().unwrap();

        let outer = &store.ring(RingKind::Outer).segments;
        assert_eq!(outer.len(), 8);
        assert_eq!(*outer[0].reference_id, 10);
        assert_eq!(*outer[7].reference_id, 17);
        assert_eq!(outer[3].color, "orange".parse::<Color>().unwrap());

        let middle = &store.ring(RingKind::Middle).segments;
        assert_eq!(middle.len(), 12);

        let center = &store.ring(RingKind::Center).segments;
        assert_eq!(center[0].value, 3.0);
        assert_eq!(center[0].color, Color::cyan());
        assert_eq!(center[1].value, 1.0);
        assert_eq!(center[1].color, Color::from_rgb8(0x10, 0x20, 0x30));

        assert_eq!(config.stroke.width, 2.0);
        assert_eq!(config.stroke.color, Color::black());
    }

    #[test]
    fn test_ids_may_swap_between_rings() {
        let json = r#"{ "rings": [
            { "ring": "outer", "first_id": 101 },
            { "ring": "middle", "first_id": 1 }
        ] }"#;
        let config: TargetConfig = serde_json::from_str(json).unwrap();
        let store = config.build_store().unwrap();
        assert_eq!(*store.ring(RingKind::Outer).segments[0].reference_id, 101);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let dup_ring: TargetConfig = serde_json::from_str(
            r#"{ "rings": [ { "ring": "outer" }, { "ring": "0" } ] }"#,
        )
        .unwrap();
        assert_eq!(
            dup_ring.build_store(),
            Err(SegmentConfigError::DuplicateRing(RingKind::Outer))
        );

        let clash: TargetConfig =
            serde_json::from_str(r#"{ "rings": [ { "ring": "center", "first_id": 5 } ] }"#)
                .unwrap();
        assert!(matches!(
            clash.build_store(),
            Err(SegmentConfigError::DuplicateReferenceId { id, .. }) if *id == 5
        ));

        let empty: TargetConfig =
            serde_json::from_str(r#"{ "rings": [ { "ring": "middle", "count": 0 } ] }"#).unwrap();
        assert_eq!(
            empty.build_store(),
            Err(SegmentConfigError::EmptyRing(RingKind::Middle))
        );
    }
}
