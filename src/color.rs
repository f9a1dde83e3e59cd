//! Color primitives
//!
//! RGB triples with every channel held in [0, 255]. Channel arithmetic
//! saturates at the bounds and never wraps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayerPaintError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Largest value a channel can hold
pub const CHANNEL_MAX: u8 = 255;

// ============================================================================
// Color
// ============================================================================

/// An RGB color
///
/// Serialized as a hex string (`"#rrggbb"`) so paint scripts stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// White (#ffffff)
    pub const WHITE: Self = Self {
        r: CHANNEL_MAX,
        g: CHANNEL_MAX,
        b: CHANNEL_MAX,
    };

    /// Create a color from in-range channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from arbitrary integers, clamping each channel
    /// independently to [0, 255]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Channel-wise `255 - c`
    pub fn inverted(self) -> Self {
        Self {
            r: CHANNEL_MAX - self.r,
            g: CHANNEL_MAX - self.g,
            b: CHANNEL_MAX - self.b,
        }
    }

    /// Add `delta` to every channel, saturating at 0 and 255
    pub fn offset(self, delta: i32) -> Self {
        Self::from_clamped(
            i32::from(self.r) + delta,
            i32::from(self.g) + delta,
            i32::from(self.b) + delta,
        )
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    ///
    /// Three-digit notation replicates each digit, so `#f80` is `#ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || LayerPaintError::InvalidColor {
            value: hex.to_string(),
        };
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => Ok(Self {
                r: channel(&digits[0..1].repeat(2))?,
                g: channel(&digits[1..2].repeat(2))?,
                b: channel(&digits[2..3].repeat(2))?,
            }),
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }

    /// Lower-case `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert from HSV
    ///
    /// # Arguments
    /// * `hue` - Degrees; any value, wrapped into [0, 360)
    /// * `saturation` - 0.0 to 1.0, clamped
    /// * `value` - 0.0 to 1.0, clamped
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let chroma = v * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
        let (r1, g1, b1) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = v - chroma;

        let to_channel = |c: f32| ((c + m) * f32::from(CHANNEL_MAX)).round() as i32;
        Self::from_clamped(to_channel(r1), to_channel(g1), to_channel(b1))
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, i32::from(CHANNEL_MAX)) as u8
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = LayerPaintError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl FromStr for Color {
    type Err = LayerPaintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// Tests
// ============================================================================
