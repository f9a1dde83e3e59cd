//! Image export
//!
//! Renders a grid to an RGB image, one pixel per cell. The file format
//! follows the output path's extension (`.png`, `.ppm`, ...).

use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use super::Grid;
use crate::color::Color;
use crate::error::{LayerPaintError, Result};
use crate::layers::Timestamp;

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

/// Render `grid` into an image buffer
///
/// # Errors
/// Returns `InvalidDimensions` if the grid is wider or taller than an
/// image can be.
pub fn render_image(grid: &Grid, start: Color, timestamp: Timestamp) -> Result<RgbImage> {
    let (width, height) = match (u32::try_from(grid.width()), u32::try_from(grid.height())) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(LayerPaintError::InvalidDimensions {
                width: grid.width(),
                height: grid.height(),
            })
        }
    };

    let mut image = RgbImage::from_pixel(width, height, start.into());
    for (y, row) in (0..height).zip(grid.render(start, timestamp)) {
        for (x, color) in (0..width).zip(row) {
            image.put_pixel(x, y, color.into());
        }
    }
    Ok(image)
}

/// Render `grid` and save it to `path`
pub fn write_image(path: &Path, grid: &Grid, start: Color, timestamp: Timestamp) -> Result<()> {
    render_image(grid, start, timestamp)?.save(path)?;
    info!(
        "Wrote {}x{} image to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
