//! Ordered additive store
//!
//! Layers are applied in insertion order, oldest first. Erasing removes
//! the oldest layer regardless of which layer is named, and special
//! reverses the application order in place.

use std::collections::VecDeque;

use log::debug;

use super::config::StoreConfig;
use crate::color::Color;
use crate::layers::{Layer, LayerRef, Timestamp};

#[derive(Debug, Clone)]
pub struct OrderedAdditiveStore {
    /// Front is applied first
    layers: VecDeque<LayerRef>,
    capacity: usize,
}

impl OrderedAdditiveStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            layers: VecDeque::new(),
            capacity: config.capacity,
        }
    }

    /// Append a layer to the end of the application order
    ///
    /// # Returns
    /// `false` if the store is full; the layer is not added.
    pub fn add(&mut self, layer: &LayerRef) -> bool {
        if self.layers.len() >= self.capacity {
            debug!(
                "Additive store full ({} layers), rejecting '{}'",
                self.capacity,
                layer.name()
            );
            return false;
        }
        self.layers.push_back(LayerRef::clone(layer));
        true
    }

    /// Remove the oldest layer; the argument is ignored
    pub fn erase(&mut self, _layer: &Layer) -> bool {
        self.layers.pop_front().is_some()
    }

    /// Reverse the application order
    ///
    /// Reports a change only when there are at least two layers, since
    /// reversing fewer leaves the order untouched.
    pub fn special(&mut self) -> bool {
        if self.layers.len() < 2 {
            return false;
        }
        self.layers.make_contiguous().reverse();
        true
    }

    pub fn get_color(&self, start: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        self.layers
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    /// Iterate over layers in application order
    pub fn iter(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
