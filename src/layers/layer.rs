//! Layer definition
//!
//! A layer is an immutable, named color transform with a stable index.
//! Layers are created by a [`LayerRegistry`](super::LayerRegistry) and
//! shared by reference; stores never own or mutate them.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;

/// Opaque animation clock passed through to transforms
pub type Timestamp = u64;

/// Shared handle to a registered layer
pub type LayerRef = Arc<Layer>;

/// A pure color transform
///
/// Implementations must not keep mutable state: the same inputs always
/// produce the same color.
pub trait ColorTransform: Send + Sync {
    /// Transform `color` for the cell at `(x, y)` at time `timestamp`
    fn apply(&self, color: Color, timestamp: Timestamp, x: usize, y: usize) -> Color;
}

impl<F> ColorTransform for F
where
    F: Fn(Color, Timestamp, usize, usize) -> Color + Send + Sync,
{
    fn apply(&self, color: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        self(color, timestamp, x, y)
    }
}

/// An immutable, named color transform
pub struct Layer {
    index: usize,
    name: String,
    swatch: Option<Color>,
    transform: Box<dyn ColorTransform>,
}

impl Layer {
    pub(crate) fn new(
        index: usize,
        name: String,
        swatch: Option<Color>,
        transform: Box<dyn ColorTransform>,
    ) -> Self {
        Self {
            index,
            name,
            swatch,
            transform,
        }
    }

    /// Stable index of this layer within its registry
    pub fn index(&self) -> usize {
        self.index
    }

    /// Unique name of this layer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Representative color for palettes, if the layer has one
    pub fn swatch(&self) -> Option<Color> {
        self.swatch
    }

    /// Apply this layer's transform
    #[inline]
    pub fn apply(&self, color: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        self.transform.apply(color, timestamp, x, y)
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("swatch", &self.swatch)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}
