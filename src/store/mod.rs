//! Layer Store Module
//!
//! Each grid cell owns one store. The store decides which layers are
//! active and folds them into a single color. Three policies exist:
//! - Set: a single slot, special inverts the output
//! - Additive: an insertion-ordered stack, special reverses it
//! - Sequence: per-type toggles, special evicts the median name
//!
//! All mutations report whether observable state changed. Rejected
//! adds (full store, foreign layer) and erasing something absent are
//! ordinary `false` outcomes, not errors. `get_color` takes `&self` and
//! never alters composition state.

mod additive;
mod config;
mod sequence;
mod single_slot;

use std::sync::Arc;

pub use additive::OrderedAdditiveStore;
pub use config::{DrawStyle, StoreConfig, DEFAULT_CAPACITY};
pub use sequence::ToggleSequenceStore;
pub use single_slot::SingleSlotStore;

use crate::color::Color;
use crate::layers::{Layer, LayerRef, LayerRegistry, Timestamp};

/// A per-cell layer store of one of the three draw styles
#[derive(Debug, Clone)]
pub enum LayerStore {
    Set(SingleSlotStore),
    Additive(OrderedAdditiveStore),
    Sequence(ToggleSequenceStore),
}

impl LayerStore {
    /// Create an empty store of the given style
    pub fn new(style: DrawStyle, registry: &Arc<LayerRegistry>, config: &StoreConfig) -> Self {
        match style {
            DrawStyle::Set => LayerStore::Set(SingleSlotStore::new(config)),
            DrawStyle::Additive => LayerStore::Additive(OrderedAdditiveStore::new(config)),
            DrawStyle::Sequence => {
                LayerStore::Sequence(ToggleSequenceStore::new(Arc::clone(registry), config))
            }
        }
    }

    pub fn style(&self) -> DrawStyle {
        match self {
            LayerStore::Set(_) => DrawStyle::Set,
            LayerStore::Additive(_) => DrawStyle::Additive,
            LayerStore::Sequence(_) => DrawStyle::Sequence,
        }
    }

    /// Add a layer; returns true if the store changed
    pub fn add(&mut self, layer: &LayerRef) -> bool {
        match self {
            LayerStore::Set(store) => store.add(layer),
            LayerStore::Additive(store) => store.add(layer),
            LayerStore::Sequence(store) => store.add(layer),
        }
    }

    /// Erase with this layer; returns true if the store changed
    pub fn erase(&mut self, layer: &Layer) -> bool {
        match self {
            LayerStore::Set(store) => store.erase(layer),
            LayerStore::Additive(store) => store.erase(layer),
            LayerStore::Sequence(store) => store.erase(layer),
        }
    }

    /// Run the style-specific special action; returns true if the store changed
    pub fn special(&mut self) -> bool {
        match self {
            LayerStore::Set(store) => store.special(),
            LayerStore::Additive(store) => store.special(),
            LayerStore::Sequence(store) => store.special(),
        }
    }

    /// Compose the active layers over `start`
    pub fn get_color(&self, start: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        match self {
            LayerStore::Set(store) => store.get_color(start, timestamp, x, y),
            LayerStore::Additive(store) => store.get_color(start, timestamp, x, y),
            LayerStore::Sequence(store) => store.get_color(start, timestamp, x, y),
        }
    }

    /// Indices of the active layers in application order
    pub fn layer_indices(&self) -> Vec<usize> {
        match self {
            LayerStore::Set(store) => store.current().map(|l| l.index()).into_iter().collect(),
            LayerStore::Additive(store) => store.iter().map(|l| l.index()).collect(),
            LayerStore::Sequence(store) => store.applied_layers().map(|l| l.index()).collect(),
        }
    }

    /// Number of active layers
    pub fn len(&self) -> usize {
        match self {
            LayerStore::Set(store) => store.len(),
            LayerStore::Additive(store) => store.len(),
            LayerStore::Sequence(store) => store.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
