//! Built-in layers
//!
//! Registered by [`LayerRegistry::with_builtins`](super::LayerRegistry::with_builtins)
//! in the order they appear in [`BUILTIN_LAYERS`].

use super::layer::Timestamp;
use crate::color::Color;

/// Channel shift used by `lighten` and `darken`
pub const BRIGHTNESS_STEP: i32 = 40;

/// Hue degrees advanced per cell of Manhattan distance from the origin
const RAINBOW_HUE_PER_CELL: u64 = 12;

/// Hue degrees advanced per timestamp tick
const RAINBOW_HUE_PER_TICK: u64 = 6;

/// One cell in `SPARKLE_PERIOD` lights up at any given tick
const SPARKLE_PERIOD: u64 = 11;

type BuiltinTransform = fn(Color, Timestamp, usize, usize) -> Color;

/// `(name, swatch, transform)` for each built-in layer, in index order
pub(crate) const BUILTIN_LAYERS: &[(&str, Option<Color>, BuiltinTransform)] = &[
    ("rainbow", None, rainbow),
    ("black", Some(Color::BLACK), black),
    ("lighten", None, lighten),
    ("invert", None, invert),
    ("red", Some(Color::new(255, 0, 0)), red),
    ("green", Some(Color::new(0, 255, 0)), green),
    ("blue", Some(Color::new(0, 0, 255)), blue),
    ("sparkle", Some(Color::WHITE), sparkle),
    ("darken", None, darken),
];

/// Full-saturation hue that drifts with position and time
pub fn rainbow(_color: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
    let distance = (x as u64).wrapping_add(y as u64);
    let hue = distance
        .wrapping_mul(RAINBOW_HUE_PER_CELL)
        .wrapping_add(timestamp.wrapping_mul(RAINBOW_HUE_PER_TICK))
        % 360;
    Color::from_hsv(hue as f32, 1.0, 1.0)
}

pub fn black(_color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    Color::BLACK
}

pub fn lighten(color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    color.offset(BRIGHTNESS_STEP)
}

pub fn invert(color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    color.inverted()
}

pub fn red(_color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    Color::new(255, 0, 0)
}

pub fn green(_color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    Color::new(0, 255, 0)
}

pub fn blue(_color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    Color::new(0, 0, 255)
}

/// White flecks on a fixed pseudo-random pattern; other cells pass through
pub fn sparkle(color: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
    let seed = (x as u64)
        .wrapping_mul(31)
        .wrapping_add((y as u64).wrapping_mul(17))
        .wrapping_add(timestamp.wrapping_mul(7));
    if seed % SPARKLE_PERIOD == 0 {
        Color::WHITE
    } else {
        color
    }
}

pub fn darken(color: Color, _timestamp: Timestamp, _x: usize, _y: usize) -> Color {
    color.offset(-BRIGHTNESS_STEP)
}
