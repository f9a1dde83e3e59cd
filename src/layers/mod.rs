//! Layer Module
//!
//! Layers are immutable color transforms identified by a stable index
//! and a unique name. They live in a [`LayerRegistry`] that outlives
//! every grid and store referencing them.

pub mod builtin;
mod layer;
mod registry;

pub use layer::{ColorTransform, Layer, LayerRef, Timestamp};
pub use registry::{LayerRegistry, LayerRegistryBuilder};
