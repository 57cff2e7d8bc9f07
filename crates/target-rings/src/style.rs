use crate::geometry::Rect;
use crate::segment::Color;
use serde::{Deserialize, Serialize};

pub const STROKE_WIDTH: f64 = 1.0;
pub const LABEL_BASE_SIZE: f64 = 14.0;
/// Container height at which labels are drawn at `LABEL_BASE_SIZE`.
pub const LABEL_REFERENCE_EXTENT: f64 = 300.0;
pub const LABEL_FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::black(),
            width: STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub color: Color,
    pub font_family: String,
    pub base_size: f64,
    pub reference_extent: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::red(),
            font_family: LABEL_FONT_FAMILY.to_string(),
            base_size: LABEL_BASE_SIZE,
            reference_extent: LABEL_REFERENCE_EXTENT,
        }
    }
}

impl LabelStyle {
    /// Labels scale with the container height.
    pub fn font_size(&self, bounds: &Rect) -> f64 {
        self.base_size * (bounds.height / self.reference_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_scales_with_height() {
        let style = LabelStyle::default();
        assert_eq!(style.font_size(&Rect::from_size(300.0, 300.0)), 14.0);
        assert_eq!(style.font_size(&Rect::from_size(600.0, 600.0)), 28.0);
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let stroke: StrokeStyle = serde_json::from_str(r#"{ "width": 2.5 }"#).unwrap();
        assert_eq!(stroke.color, Color::black());
        assert_eq!(stroke.width, 2.5);
    }
}
