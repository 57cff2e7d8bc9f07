pub mod config;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod ring;
pub mod segment;
pub mod store;
pub mod style;
pub mod target;

pub use geometry::{ClosedPath, PathElement, Point, Rect, Wedge};
pub use ring::{Ring, RingKind};
pub use segment::{Color, ReferenceId, Segment};
pub use store::SegmentStore;
pub use target::{SegmentVisual, TargetView};
