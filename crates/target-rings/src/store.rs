use crate::layout::LayoutResult;
use crate::ring::{Ring, RingKind};
use crate::segment::{Color, ReferenceId, Segment};
use std::collections::HashSet;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

pub const OUTER_SEGMENT_COUNT: usize = 12;
pub const MIDDLE_SEGMENT_COUNT: usize = 12;
pub const CENTER_SEGMENT_COUNT: usize = 2;

pub const OUTER_FIRST_ID: i64 = 1;
pub const MIDDLE_FIRST_ID: i64 = 101;
pub const CENTER_FIRST_ID: i64 = 1001;

#[derive(Debug, Error, PartialEq)]
pub enum SegmentConfigError {
    #[error("{0} ring has no segments")]
    EmptyRing(RingKind),
    #[error("Segment {id} in the {ring} ring has negative value {value}")]
    NegativeValue {
        ring: RingKind,
        id: ReferenceId,
        value: f64,
    },
    #[error("Segment {id} in the {ring} ring has non-finite value {value}")]
    NonFiniteValue {
        ring: RingKind,
        id: ReferenceId,
        value: f64,
    },
    #[error("Reference id {id} in the {ring} ring is already used by the {existing} ring")]
    DuplicateReferenceId {
        ring: RingKind,
        existing: RingKind,
        id: ReferenceId,
    },
    #[error("{0} ring is configured more than once")]
    DuplicateRing(RingKind),
}

/// Segment count, fill and first reference id a ring gets when nothing else is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDefaults {
    pub count: usize,
    pub color: Color,
    pub first_id: i64,
}

impl RingDefaults {
    pub fn for_ring(kind: RingKind) -> Self {
        match kind {
            RingKind::Outer => Self {
                count: OUTER_SEGMENT_COUNT,
                color: Color::yellow(),
                first_id: OUTER_FIRST_ID,
            },
            RingKind::Middle => Self {
                count: MIDDLE_SEGMENT_COUNT,
                color: Color::green(),
                first_id: MIDDLE_FIRST_ID,
            },
            RingKind::Center => Self {
                count: CENTER_SEGMENT_COUNT,
                color: Color::cyan(),
                first_id: CENTER_FIRST_ID,
            },
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        equal_segments(self.count, 1.0, self.color, self.first_id)
    }
}

/// Owns the outer, middle and center segment lists, always in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStore {
    rings: [Ring; RingKind::COUNT],
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentStore {
    /// 12 outer, 12 middle and 2 center segments of equal weight with sequential ids.
    pub fn new() -> Self {
        Self {
            rings: [RingKind::Outer, RingKind::Middle, RingKind::Center]
                .map(|kind| Ring::new(kind, RingDefaults::for_ring(kind).segments())),
        }
    }

    /// A store with no segments at all; every ring must be configured before layout.
    pub(crate) fn empty() -> Self {
        Self {
            rings: [RingKind::Outer, RingKind::Middle, RingKind::Center]
                .map(|kind| Ring::new(kind, Vec::new())),
        }
    }

    /// Replaces a ring's segments wholesale. The ring has no wedges until the next layout pass.
    pub fn configure(
        &mut self,
        kind: RingKind,
        segments: Vec<Segment>,
    ) -> Result<(), SegmentConfigError> {
        self.validate(kind, &segments)?;

        let ring = &mut self.rings[kind.as_index()];
        ring.segments = segments;
        ring.clear_layout();
        log::debug!(
            "Configured {} ring with {} segments",
            kind,
            ring.segments.len()
        );
        Ok(())
    }

    fn validate(&self, kind: RingKind, segments: &[Segment]) -> Result<(), SegmentConfigError> {
        if segments.is_empty() {
            return Err(SegmentConfigError::EmptyRing(kind));
        }

        let mut seen = HashSet::new();
        for segment in segments {
            let (id, value) = (segment.reference_id, segment.value);
            if !value.is_finite() {
                return Err(SegmentConfigError::NonFiniteValue {
                    ring: kind,
                    id,
                    value,
                });
            }
            if value < 0.0 {
                return Err(SegmentConfigError::NegativeValue {
                    ring: kind,
                    id,
                    value,
                });
            }
            if !seen.insert(id) {
                return Err(SegmentConfigError::DuplicateReferenceId {
                    ring: kind,
                    existing: kind,
                    id,
                });
            }
            if let Some(existing) = self
                .rings
                .iter()
                .filter(|r| r.kind != kind)
                .find(|r| r.segments.iter().any(|s| s.reference_id == id))
            {
                return Err(SegmentConfigError::DuplicateReferenceId {
                    ring: kind,
                    existing: existing.kind,
                    id,
                });
            }
        }
        Ok(())
    }

    /// Copies freshly computed wedges into the segments. Rings or segments the result does not
    /// cover are left without a layout.
    pub fn apply_layout(&mut self, result: &LayoutResult) {
        for ring in self.rings.iter_mut() {
            ring.clear_layout();
            let Some(ring_layout) = result.ring(ring.kind) else {
                continue;
            };
            for (segment, seg_layout) in ring.segments.iter_mut().zip(&ring_layout.segments) {
                if segment.reference_id == seg_layout.reference_id {
                    segment.wedge = Some(seg_layout.wedge);
                }
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.rings.iter_mut().for_each(Ring::clear_layout);
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ring(&self, kind: RingKind) -> &Ring {
        &self.rings[kind.as_index()]
    }

    pub fn segments(&self) -> impl Iterator<Item = (RingKind, &Segment)> {
        self.rings
            .iter()
            .flat_map(|ring| ring.segments.iter().map(move |s| (ring.kind, s)))
    }

    pub fn segment(&self, id: ReferenceId) -> Option<&Segment> {
        self.segments().map(|(_, s)| s).find(|s| s.reference_id == id)
    }

    pub fn is_laid_out(&self) -> bool {
        RingKind::iter().all(|kind| self.ring(kind).is_laid_out())
    }
}

/// `count` segments of the same value and color with ids `first_id..first_id + count`.
pub fn equal_segments(count: usize, value: f64, color: Color, first_id: i64) -> Vec<Segment> {
    (first_id..)
        .take(count)
        .map(|id| Segment::new(value, color, ReferenceId::new(id)))
        .collect()
}
