//! Single-slot ("set") store
//!
//! Holds at most one layer. Adding replaces it, erasing clears it no
//! matter which layer is named, and special flips an inversion flag
//! applied to the layer's output.

use log::debug;

use super::config::StoreConfig;
use crate::color::Color;
use crate::layers::{Layer, LayerRef, Timestamp};

#[derive(Debug, Clone)]
pub struct SingleSlotStore {
    current: Option<LayerRef>,
    inverted: bool,
    capacity: usize,
}

impl SingleSlotStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            current: None,
            inverted: false,
            capacity: config.capacity,
        }
    }

    /// Replace the current layer
    ///
    /// Always counts as a change, even when the same layer is set again.
    /// Only a zero-capacity store rejects the layer.
    pub fn add(&mut self, layer: &LayerRef) -> bool {
        if self.capacity == 0 {
            debug!("Set store has no capacity, rejecting '{}'", layer.name());
            return false;
        }
        self.current = Some(LayerRef::clone(layer));
        true
    }

    /// Clear the current layer; the argument is ignored
    pub fn erase(&mut self, _layer: &Layer) -> bool {
        self.current.take().is_some()
    }

    /// Toggle output inversion
    ///
    /// The flag always flips, so this always reports a change.
    pub fn special(&mut self) -> bool {
        self.inverted = !self.inverted;
        true
    }

    pub fn get_color(&self, start: Color, timestamp: Timestamp, x: usize, y: usize) -> Color {
        match &self.current {
            None => start,
            Some(layer) => {
                let color = layer.apply(start, timestamp, x, y);
                if self.inverted {
                    color.inverted()
                } else {
                    color
                }
            }
        }
    }

    pub fn current(&self) -> Option<&LayerRef> {
        self.current.as_ref()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
