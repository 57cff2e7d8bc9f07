use crate::geometry::{Point, Rect, Wedge};
use crate::ring::{Ring, RingKind};
use crate::segment::ReferenceId;
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{ring} ring segment values sum to {total}, expected a positive total")]
    DegenerateRing { ring: RingKind, total: f64 },
    #[error("Container bounds {width}x{height} cannot be laid out")]
    InvalidBounds { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    pub reference_id: ReferenceId,
    pub wedge: Wedge,
    pub anchor: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    pub kind: RingKind,
    pub segments: Vec<SegmentLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub bounds: Rect,
    pub rings: Vec<RingLayout>,
}

impl LayoutResult {
    /// `(reference id, label anchor)` for every segment, outer ring first.
    pub fn anchors(&self) -> Vec<(ReferenceId, Point)> {
        self.rings
            .iter()
            .flat_map(|ring| ring.segments.iter().map(|s| (s.reference_id, s.anchor)))
            .collect()
    }

    pub fn ring(&self, kind: RingKind) -> Option<&RingLayout> {
        self.rings.iter().find(|r| r.kind == kind)
    }
}

/// Lays out every ring for the given container. The first degenerate ring aborts the whole pass.
pub fn layout(bounds: Rect, rings: &[Ring]) -> Result<LayoutResult, LayoutError> {
    if !bounds.width.is_finite() || !bounds.height.is_finite() || bounds.width <= 0.0 {
        return Err(LayoutError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }
    if !bounds.is_square() {
        log::warn!(
            "Target container is {}x{}, laying out with diameter {}",
            bounds.width,
            bounds.height,
            bounds.width
        );
    }

    let center = bounds.center();
    let diameter = bounds.width;

    let rings = rings
        .iter()
        .map(|ring| {
            let (inner, outer) = ring.kind.radii(diameter);
            layout_ring(ring, center, inner, outer)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LayoutResult { bounds, rings })
}

/// Lays out one ring's segments between `inner_radius` and `outer_radius`.
pub fn layout_ring(
    ring: &Ring,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
) -> Result<RingLayout, LayoutError> {
    let kind = ring.kind;
    let total = ring.total_value();
    if !total.is_finite() || total <= 0.0 {
        return Err(LayoutError::DegenerateRing { ring: kind, total });
    }

    let mut start_angle = 0.0;
    let segments = ring
        .segments
        .iter()
        .map(|segment| {
            let end_angle = start_angle + TAU * (segment.value / total);
            let wedge = Wedge {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            };
            start_angle = end_angle;
            SegmentLayout {
                reference_id: segment.reference_id,
                wedge,
                anchor: wedge.anchor(),
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "Laid out {} ring: {} segments, radii {:.1}..{:.1}, closing angle {:.12}",
        kind,
        segments.len(),
        inner_radius,
        outer_radius,
        start_angle
    );

    Ok(RingLayout { kind, segments })
}
