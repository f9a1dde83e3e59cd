//! Grid Module
//!
//! A `width x height` matrix of layer stores, all of one draw style
//! fixed at construction. Painting and erasing hit every cell within
//! the brush's Manhattan radius of the target cell.

mod io;

use std::sync::Arc;

use log::{debug, info};

pub use io::{render_image, write_image};

use crate::color::Color;
use crate::error::{LayerPaintError, Result};
use crate::layers::{Layer, LayerRef, LayerRegistry, Timestamp};
use crate::store::{DrawStyle, LayerStore, StoreConfig};

// ============================================================================
// Brush Constants
// ============================================================================

/// Brush size of a freshly created grid
pub const DEFAULT_BRUSH_SIZE: usize = 2;

/// Largest allowed brush size
pub const MAX_BRUSH: usize = 5;

/// Smallest allowed brush size (a single cell)
pub const MIN_BRUSH: usize = 0;

// ============================================================================
// Grid
// ============================================================================

#[derive(Debug, Clone)]
pub struct Grid {
    style: DrawStyle,
    width: usize,
    height: usize,
    brush_size: usize,
    registry: Arc<LayerRegistry>,
    /// Row-major: cell `(x, y)` lives at `y * width + x`
    cells: Vec<LayerStore>,
}

impl Grid {
    /// Create a grid of empty stores
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either dimension is zero or the
    /// cell count overflows `usize`.
    pub fn new(
        style: DrawStyle,
        width: usize,
        height: usize,
        registry: Arc<LayerRegistry>,
        config: StoreConfig,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayerPaintError::InvalidDimensions { width, height });
        }

        let count = width
            .checked_mul(height)
            .ok_or(LayerPaintError::InvalidDimensions { width, height })?;
        let cells = (0..count)
            .map(|_| LayerStore::new(style, &registry, &config))
            .collect();
        info!(
            "Created {}x{} grid with {} stores (capacity {})",
            width, height, style, config.capacity
        );

        Ok(Self {
            style,
            width,
            height,
            brush_size: DEFAULT_BRUSH_SIZE,
            registry,
            cells,
        })
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn registry(&self) -> &Arc<LayerRegistry> {
        &self.registry
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, stopping at `MAX_BRUSH`
    ///
    /// # Returns
    /// `true` if the size changed
    pub fn increase_brush_size(&mut self) -> bool {
        if self.brush_size >= MAX_BRUSH {
            return false;
        }
        self.brush_size += 1;
        true
    }

    /// Shrink the brush by one, stopping at `MIN_BRUSH`
    ///
    /// # Returns
    /// `true` if the size changed
    pub fn decrease_brush_size(&mut self) -> bool {
        if self.brush_size <= MIN_BRUSH {
            return false;
        }
        self.brush_size -= 1;
        true
    }

    /// Store at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Result<&LayerStore> {
        let offset = self.offset(x, y)?;
        Ok(&self.cells[offset])
    }

    /// Add `layer` to every cell under the brush centred on `(x, y)`
    ///
    /// # Returns
    /// Number of cells whose store changed
    pub fn paint(&mut self, layer: &LayerRef, x: usize, y: usize) -> Result<usize> {
        let footprint = self.footprint(x, y)?;
        let changed = footprint
            .into_iter()
            .filter(|&offset| self.cells[offset].add(layer))
            .count();
        debug!(
            "Painted '{}' at ({}, {}) brush {}: {} cells changed",
            layer.name(),
            x,
            y,
            self.brush_size,
            changed
        );
        Ok(changed)
    }

    /// Erase with `layer` on every cell under the brush centred on `(x, y)`
    ///
    /// # Returns
    /// Number of cells whose store changed
    pub fn erase(&mut self, layer: &Layer, x: usize, y: usize) -> Result<usize> {
        let footprint = self.footprint(x, y)?;
        let changed = footprint
            .into_iter()
            .filter(|&offset| self.cells[offset].erase(layer))
            .count();
        debug!(
            "Erased '{}' at ({}, {}) brush {}: {} cells changed",
            layer.name(),
            x,
            y,
            self.brush_size,
            changed
        );
        Ok(changed)
    }

    /// Run the special action on every cell
    ///
    /// # Returns
    /// Number of cells whose store changed
    pub fn special(&mut self) -> usize {
        let changed = self
            .cells
            .iter_mut()
            .map(|cell| cell.special())
            .filter(|&changed| changed)
            .count();
        debug!("Special ({}) changed {} cells", self.style, changed);
        changed
    }

    /// Displayed color of one cell
    pub fn get_color(&self, x: usize, y: usize, start: Color, timestamp: Timestamp) -> Result<Color> {
        Ok(self.cell(x, y)?.get_color(start, timestamp, x, y))
    }

    /// Displayed color of every cell, indexed `[y][x]`
    pub fn render(&self, start: Color, timestamp: Timestamp) -> Vec<Vec<Color>> {
        self.cells
            .chunks(self.width)
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| cell.get_color(start, timestamp, x, y))
                    .collect()
            })
            .collect()
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(LayerPaintError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Offsets of cells within Manhattan distance `brush_size` of
    /// `(x, y)`, clipped to the grid
    fn footprint(&self, x: usize, y: usize) -> Result<Vec<usize>> {
        self.offset(x, y)?;

        let radius = self.brush_size;
        let mut offsets = Vec::new();
        for cy in y.saturating_sub(radius)..=(y + radius).min(self.height - 1) {
            let remaining = radius - cy.abs_diff(y);
            for cx in x.saturating_sub(remaining)..=(x + remaining).min(self.width - 1) {
                offsets.push(cy * self.width + cx);
            }
        }
        Ok(offsets)
    }
}
