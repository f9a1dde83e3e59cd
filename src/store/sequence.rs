//! Toggle sequence store
//!
//! Every layer type in the registry is either applied or not. Applied
//! types compose in ascending index order. Special evicts the applied
//! type whose name is the lexicographic median, taking the smaller of
//! the two middle names when the count is even.
//!
//! The median is found by sorting the applied names on each call, so
//! special costs O(n log n) in the number of applied types.

use std::sync::Arc;

use log::{debug, warn};

use super::config::StoreConfig;
use crate::color::Color;
use crate::layers::{Layer, LayerRef, LayerRegistry, Timestamp};

#[derive(Debug, Clone)]
pub struct ToggleSequenceStore {
    registry: Arc<LayerRegistry>,
    /// Indexed by layer index
    applied: Vec<bool>,
    applied_count: usize,
    capacity: usize,
}

impl ToggleSequenceStore {
    pub fn new(registry: Arc<LayerRegistry>, config: &StoreConfig) -> Self {
        let applied = vec![false; registry.len()];
        Self {
            registry,
            applied,
            applied_count: 0,
            capacity: config.capacity,
        }
    }

    /// Mark this layer's type as applied
    ///
    /// # Returns
    /// `true` if the type was not applied before. `false` if it already
    /// was, if the store is full, or if the layer is not in the registry.
    pub fn add(&mut self, layer: &LayerRef) -> bool {
        if !self.is_known(layer) || self.applied[layer.index()] {
            return false;
        }
        if self.applied_count >= self.capacity {
            debug!(
                "Sequence store full ({} types), rejecting '{}'",
                self.capacity,
                layer.name()
            );
            return false;
        }

        self.applied[layer.index()] = true;
        self.applied_count += 1;
        true
    }

    /// Mark this layer's type as not applied
    pub fn erase(&mut self, layer: &Layer) -> bool {
        if !self.is_known(layer) || !self.applied[layer.index()] {
            return false;
        }

        self.applied[layer.index()] = false;
        self.applied_count -= 1;
        true
    }

    /// Evict the applied type with the median name
    pub fn special(&mut self) -> bool {
        let mut names: Vec<(&str, usize)> = self
            .applied_layers()
            .map(|layer| (layer.name(), layer.index()))
            .collect();
        if names.is_empty() {
            return false;
        }

        names.sort_unstable();
        let n = names.len();
        let median = if n % 2 == 1 { n / 2 } else { n / 2 - 1 };
        let (name, index) = names[median];
        debug!("Sequence special evicting median layer '{}' of {}", name, n);

        self.applied[index] = false;
        self.applied_count -= 1;
        true
    }

    pub fn get_color(&self, start: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        self.applied_layers()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    /// Applied layers in ascending index order
    pub fn applied_layers(&self) -> impl Iterator<Item = &LayerRef> {
        self.applied
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .filter_map(|(index, _)| self.registry.get(index))
    }

    pub fn is_applied(&self, index: usize) -> bool {
        self.applied.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.applied_count
    }

    pub fn is_empty(&self) -> bool {
        self.applied_count == 0
    }

    /// Whether `layer` belongs to this store's registry
    fn is_known(&self, layer: &Layer) -> bool {
        let known = self
            .registry
            .get(layer.index())
            .is_some_and(|l| l.name() == layer.name());
        if !known {
            warn!(
                "Layer '{}' (index {}) is not in this store's registry",
                layer.name(),
                layer.index()
            );
        }
        known
    }
}
