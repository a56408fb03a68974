//! Tile colors for each view mode.

use std::fmt;

use landgrid_registry::ZoningCategory;
use serde::{Serialize, Serializer};

/// An opaque 8-bit RGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Terrain color used by the base view and by tiles outside any parcel.
pub const BASE_COLOR: Rgb = Rgb::new(0x4A, 0xDE, 0x80);
pub const UNZONED_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);
pub const SELECTED_COLOR: Rgb = Rgb::new(0x02, 0x82, 0x02);
pub const HOVERED_COLOR: Rgb = Rgb::new(0x62, 0x82, 0x62);

pub fn zoning_color(zoning: Option<ZoningCategory>) -> Rgb {
    match zoning {
        Some(ZoningCategory::Commercial) => Rgb::new(0x00, 0x74, 0xD9),
        Some(ZoningCategory::Agricultural) => Rgb::new(0xFF, 0x85, 0x1B),
        Some(ZoningCategory::Residential) => Rgb::new(0x2E, 0xCC, 0x40),
        None => UNZONED_COLOR,
    }
}

/// Light green at 0 to dark green at 1; `normalized` is clamped first.
pub fn tax_gradient(normalized: f64) -> Rgb {
    let n = if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    };
    let channel = |from: f64, drop: f64| (from - drop * n).round() as u8;
    Rgb::new(channel(144.0, 144.0), channel(238.0, 138.0), channel(144.0, 144.0))
}
