//! Layerpaint - Per-Cell Color Layer Compositing
//!
//! Every cell of a grid owns a layer store. Painting adds immutable
//! color-transform layers to stores; rendering folds each store's
//! active layers over a start color to get the displayed color.
//!
//! # Architecture
//!
//! - `layers`: immutable layers and the registry that owns them
//! - `store`: the three per-cell policies (set, additive, sequence)
//! - `grid`: a matrix of stores of one style, brush painting, export
//! - `script`: JSON paint scripts replayed onto a grid

pub mod cli;
pub mod color;
pub mod error;
pub mod grid;
pub mod layers;
pub mod script;
pub mod store;

pub use color::Color;
pub use error::{LayerPaintError, Result};
pub use grid::Grid;
pub use layers::{Layer, LayerRef, LayerRegistry, Timestamp};
pub use store::{DrawStyle, LayerStore, StoreConfig};
