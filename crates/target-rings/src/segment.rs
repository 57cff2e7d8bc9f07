use crate::geometry::{ClosedPath, Point, Wedge};
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct ReferenceId(i64);

impl ReferenceId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Decimal text drawn on the segment.
    pub fn label(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("Unknown color '{0}', expected a CSS color name or #rrggbb")]
    Unknown(String),
}

/// Fill or stroke color. Parses CSS color names and `#rgb` / `#rrggbb` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from(Srgb::new(r, g, b))
    }

    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0)
    }

    pub fn red() -> Self {
        Self::from_rgb8(255, 0, 0)
    }

    pub fn yellow() -> Self {
        Self::from_rgb8(255, 255, 0)
    }

    pub fn green() -> Self {
        Self::from_rgb8(0, 255, 0)
    }

    pub fn cyan() -> Self {
        Self::from_rgb8(0, 255, 255)
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        let (r, g, b) = rgb.into_format::<f64>().into_components();
        Self(Srgba::new(r, g, b, 1.0))
    }
}

impl From<Srgba<f64>> for Color {
    fn from(rgba: Srgba<f64>) -> Self {
        Self(rgba)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            return Ok(Self::from(named));
        }
        let hex = if s.starts_with('#') {
            s.to_string()
        } else {
            format!("#{s}")
        };
        Srgb::<u8>::from_str(&hex)
            .map(Self::from)
            .map_err(|_| ColorParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub value: f64,
    pub color: Color,
    pub reference_id: ReferenceId,
    /// Boundary computed by the last layout pass, `None` until the ring has been laid out.
    pub wedge: Option<Wedge>,
}

impl Segment {
    pub fn new(value: f64, color: Color, reference_id: ReferenceId) -> Self {
        Self {
            value,
            color,
            reference_id,
            wedge: None,
        }
    }

    pub fn boundary_path(&self) -> Option<ClosedPath> {
        self.wedge.as_ref().map(Wedge::path)
    }

    pub fn anchor(&self) -> Option<Point> {
        self.wedge.as_ref().map(Wedge::anchor)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.wedge.is_some_and(|w| w.contains(point))
    }

    pub fn is_laid_out(&self) -> bool {
        self.wedge.is_some()
    }
}
