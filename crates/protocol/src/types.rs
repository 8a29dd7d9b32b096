use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// An RGBA color with 8-bit channels.
///
/// Commands carry concrete colors rather than theme tokens: band fills come
/// from user-configurable category scales, so the palette is open-ended and
/// resolved before emission, not by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rgb` or `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        match hex.len() {
            3 => {
                let value = u16::from_str_radix(hex, 16).ok()?;
                let r = ((value >> 8) & 0xf) as u8;
                let g = ((value >> 4) & 0xf) as u8;
                let b = (value & 0xf) as u8;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::rgb(
                    ((value >> 16) & 0xff) as u8,
                    ((value >> 8) & 0xff) as u8,
                    (value & 0xff) as u8,
                ))
            }
            _ => None,
        }
    }

    /// CSS hex representation, e.g. `#cccccc`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The visible drawing region, in logical pixels.
///
/// `y` is the vertical scroll offset into the stacked lanes; the time axis
/// (horizontal) is navigated through the projection, never through the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}
