use std::f64::consts::TAU;

/// Angles below this are treated as zero when comparing sweeps against a full turn.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Relative tolerance for comparing lengths such as container sides.
pub const LENGTH_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clockwise angle from 3 o'clock in screen coordinates (Y grows downward), in `[0, 2π)`.
    pub fn angle_from(&self, center: Point) -> f64 {
        let (dx, dy) = (self.x - center.x, self.y - center.y);
        normalize_angle(dy.atan2(dx))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Largest square of `factor * min(width, height)` centered in this rect.
    pub fn centered_square(&self, factor: f64) -> Self {
        let side = self.width.min(self.height) * factor;
        Self::new(
            self.x + (self.width - side) / 2.0,
            self.y + (self.height - side) / 2.0,
            side,
            side,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_square(&self) -> bool {
        (self.width - self.height).abs() <= LENGTH_EPSILON * self.width.abs().max(1.0)
    }
}

/// Wraps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    },
    Close,
}

/// A closed outline made of arcs; consecutive arcs are joined by straight edges, and `Close`
/// joins the last point back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedPath {
    elements: Vec<PathElement>,
}

impl ClosedPath {
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) -> Self {
        self.elements.push(PathElement::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.elements.push(PathElement::Close);
        self
    }
}

/// An annular sector: the region between two concentric circles bounded by two angles.
/// An inner radius of zero makes it a pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn bisector(&self) -> f64 {
        self.start_angle + self.sweep() * 0.5
    }

    pub fn mid_radius(&self) -> f64 {
        self.inner_radius + (self.outer_radius - self.inner_radius) * 0.5
    }

    /// Label anchor: the bisector at mid-radius.
    pub fn anchor(&self) -> Point {
        Point::on_circle(self.center, self.mid_radius(), self.bisector())
    }

    /// Outer arc clockwise from start to end, inner arc back counter-clockwise, then close.
    pub fn path(&self) -> ClosedPath {
        ClosedPath::default()
            .arc(
                self.center,
                self.outer_radius,
                self.start_angle,
                self.end_angle,
                ArcDirection::Clockwise,
            )
            .arc(
                self.center,
                self.inner_radius,
                self.end_angle,
                self.start_angle,
                ArcDirection::CounterClockwise,
            )
            .close()
    }

    /// Radii are inclusive, the angular range is half-open `[start, end)`. A wedge with no area
    /// contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        if self.outer_radius <= self.inner_radius {
            return false;
        }
        let dist = point.distance_to(self.center);
        if dist < self.inner_radius || dist > self.outer_radius {
            return false;
        }

        let sweep = self.sweep();
        if sweep >= TAU - ANGLE_EPSILON {
            return true;
        }
        if sweep <= 0.0 {
            return false;
        }

        let offset = normalize_angle(point.angle_from(self.center) - self.start_angle);
        offset < sweep
    }
}
