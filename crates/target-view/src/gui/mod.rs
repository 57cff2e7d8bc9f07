pub mod app;
pub mod view;

pub use view::draw;

/// Share of the drawing area's shorter side the target occupies.
pub const CONTAINER_FILL: f64 = 0.9;
pub const WINDOW_SIZE: i32 = 480;
