use crate::geometry::Point;
use crate::ring::{Ring, RingKind};
use crate::segment::ReferenceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHit {
    pub ring: RingKind,
    pub index: usize,
    pub reference_id: ReferenceId,
}

/// First segment containing `point`, testing rings in the order given and segments in list
/// order. Rings are expected outer to center.
pub fn locate(point: Point, rings: &[Ring]) -> Option<SegmentHit> {
    rings.iter().find_map(|ring| {
        ring.segments
            .iter()
            .position(|s| s.contains(point))
            .map(|index| SegmentHit {
                ring: ring.kind,
                index,
                reference_id: ring.segments[index].reference_id,
            })
    })
}

/// Reference id of the segment under `point`, or `None` when nothing is hit.
pub fn hit_test(point: Point, rings: &[Ring]) -> Option<ReferenceId> {
    locate(point, rings).map(|hit| hit.reference_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Wedge};
    use crate::layout::layout;
    use crate::segment::{Color, Segment};
    use std::f64::consts::TAU;

    fn laid_out_rings(size: f64) -> Vec<Ring> {
        let mut rings = vec![
            equal_ring(RingKind::Outer, 12, 1),
            equal_ring(RingKind::Middle, 12, 101),
            equal_ring(RingKind::Center, 2, 1001),
        ];
        let result = layout(Rect::from_size(size, size), &rings).unwrap();
        for (ring, ring_layout) in rings.iter_mut().zip(result.rings) {
            for (segment, seg_layout) in ring.segments.iter_mut().zip(ring_layout.segments) {
                segment.wedge = Some(seg_layout.wedge);
            }
        }
        rings
    }

    fn equal_ring(kind: RingKind, count: i64, first_id: i64) -> Ring {
        Ring::new(
            kind,
            (0..count)
                .map(|i| Segment::new(1.0, Color::cyan(), ReferenceId::new(first_id + i)))
                .collect(),
        )
    }

    fn polar(center: Point, radius: f64, degrees: f64) -> Point {
        Point::on_circle(center, radius, degrees.to_radians())
    }

    #[test]
    fn test_outer_ring_examples() {
        let rings = laid_out_rings(300.0);
        let center = Point::new(150.0, 150.0);

        assert_eq!(
            hit_test(Point::new(150.0 + 125.0, 150.0), &rings),
            Some(ReferenceId::new(1))
        );
        assert_eq!(
            hit_test(polar(center, 125.0, 195.0), &rings),
            Some(ReferenceId::new(7))
        );
    }

    #[test]
    fn test_each_ring_reports_its_own_ids() {
        let rings = laid_out_rings(300.0);
        let center = Point::new(150.0, 150.0);

        assert_eq!(
            locate(polar(center, 75.0, 45.0), &rings),
            Some(SegmentHit {
                ring: RingKind::Middle,
                index: 1,
                reference_id: ReferenceId::new(102),
            })
        );
        assert_eq!(
            hit_test(polar(center, 20.0, 270.0), &rings),
            Some(ReferenceId::new(1002))
        );
        assert_eq!(hit_test(center, &rings), Some(ReferenceId::new(1001)));
    }

    #[test]
    fn test_anchor_is_inside_its_segment() {
        let rings = laid_out_rings(300.0);
        for ring in &rings {
            for segment in &ring.segments {
                let anchor = segment.anchor().unwrap();
                assert!(segment.contains(anchor));
                assert_eq!(hit_test(anchor, &rings), Some(segment.reference_id));
            }
        }
    }

    #[test]
    fn test_outside_outer_radius_misses() {
        let rings = laid_out_rings(300.0);
        let center = Point::new(150.0, 150.0);
        for deg in (0..360).step_by(7) {
            assert_eq!(hit_test(polar(center, 150.5, deg as f64), &rings), None);
        }
        assert_eq!(hit_test(Point::new(0.0, 0.0), &rings), None);
    }

    #[test]
    fn test_hit_test_is_idempotent() {
        let rings = laid_out_rings(120.0);
        let points = [
            Point::new(60.0, 60.0),
            Point::new(5.0, 60.0),
            Point::new(100.0, 100.0),
            Point::new(119.0, 1.0),
        ];
        for p in points {
            let first = hit_test(p, &rings);
            for _ in 0..3 {
                assert_eq!(hit_test(p, &rings), first);
            }
        }
    }

    #[test]
    fn test_outer_ring_wins_on_overlap() {
        let center = Point::new(0.0, 0.0);
        let wide = |inner, outer| Wedge {
            center,
            inner_radius: inner,
            outer_radius: outer,
            start_angle: 0.0,
            end_angle: TAU,
        };
        let mut outer = Segment::new(1.0, Color::yellow(), ReferenceId::new(1));
        outer.wedge = Some(wide(10.0, 30.0));
        let mut middle = Segment::new(1.0, Color::green(), ReferenceId::new(101));
        middle.wedge = Some(wide(0.0, 20.0));
        let rings = vec![
            Ring::new(RingKind::Outer, vec![outer]),
            Ring::new(RingKind::Middle, vec![middle]),
        ];

        assert_eq!(hit_test(Point::new(15.0, 0.0), &rings), Some(ReferenceId::new(1)));
        assert_eq!(hit_test(Point::new(5.0, 0.0), &rings), Some(ReferenceId::new(101)));
    }

    #[test]
    fn test_unlaid_rings_never_hit() {
        let rings = vec![equal_ring(RingKind::Outer, 12, 1)];
        assert_eq!(hit_test(Point::new(0.0, 0.0), &rings), None);
    }
}
