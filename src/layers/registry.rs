//! Layer registry
//!
//! The registry is built once, then frozen. It is shared through an
//! `Arc` and handed explicitly to every grid and store that needs to
//! resolve layer indices.

use std::collections::HashMap;

use log::warn;

use super::builtin;
use super::layer::{ColorTransform, Layer, LayerRef};
use crate::color::Color;
use crate::error::{LayerPaintError, Result};

/// Immutable table of layers, indexed by registration order
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<LayerRef>,
    by_name: HashMap<String, usize>,
}

impl LayerRegistry {
    /// Start building a registry
    pub fn builder() -> LayerRegistryBuilder {
        LayerRegistryBuilder::default()
    }

    /// Create a registry holding the built-in layers
    pub fn with_builtins() -> Self {
        let mut builder = Self::builder();
        for (name, swatch, transform) in builtin::BUILTIN_LAYERS {
            // Built-in names are distinct, registration cannot fail
            if let Err(err) = builder.register_with_swatch(*name, *swatch, *transform) {
                warn!("Skipping built-in layer {}: {}", name, err);
            }
        }
        builder.build()
    }

    /// Get a layer by index
    pub fn get(&self, index: usize) -> Option<&LayerRef> {
        self.layers.get(index)
    }

    /// Get a layer by name
    pub fn by_name(&self, name: &str) -> Option<&LayerRef> {
        self.by_name.get(name).and_then(|&index| self.layers.get(index))
    }

    /// Resolve a layer name, failing for names that were never registered
    pub fn lookup(&self, name: &str) -> Result<LayerRef> {
        self.by_name(name)
            .cloned()
            .ok_or_else(|| LayerPaintError::UnknownLayer {
                name: name.to_string(),
            })
    }

    /// Resolve a layer index, failing for indices outside the registry
    pub fn lookup_index(&self, index: usize) -> Result<LayerRef> {
        self.get(index)
            .cloned()
            .ok_or(LayerPaintError::UnknownLayerIndex { index })
    }

    /// Check if a layer name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over layers in index order
    pub fn iter(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    /// Layer names in index order
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }
}

/// Builder for [`LayerRegistry`]
///
/// Indices are assigned in registration order starting at 0.
#[derive(Default)]
pub struct LayerRegistryBuilder {
    layers: Vec<LayerRef>,
    by_name: HashMap<String, usize>,
}

impl LayerRegistryBuilder {
    /// Register a layer and return its index
    pub fn register<T>(&mut self, name: impl Into<String>, transform: T) -> Result<usize>
    where
        T: ColorTransform + 'static,
    {
        self.register_with_swatch(name, None, transform)
    }

    /// Register a layer with a palette swatch and return its index
    pub fn register_with_swatch<T>(
        &mut self,
        name: impl Into<String>,
        swatch: Option<Color>,
        transform: T,
    ) -> Result<usize>
    where
        T: ColorTransform + 'static,
    {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(LayerPaintError::DuplicateLayer { name });
        }

        let index = self.layers.len();
        self.by_name.insert(name.clone(), index);
        self.layers.push(LayerRef::new(Layer::new(
            index,
            name,
            swatch,
            Box::new(transform),
        )));
        Ok(index)
    }

    /// Freeze the registry
    pub fn build(self) -> LayerRegistry {
        LayerRegistry {
            layers: self.layers,
            by_name: self.by_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::Timestamp;

    fn identity(c: Color, _t: Timestamp, _x: usize, _y: usize) -> Color {
        c
    }

    #[test]
    fn test_registry_builtins() {
        let registry = LayerRegistry::with_builtins();

        assert_eq!(
            registry.names(),
            vec![
                "rainbow", "black", "lighten", "invert", "red", "green", "blue", "sparkle",
                "darken"
            ]
        );
        assert_eq!(registry.len(), builtin::BUILTIN_LAYERS.len());
        for (i, layer) in registry.iter().enumerate() {
            assert_eq!(layer.index(), i);
        }
    }

    #[test]
    fn test_lookup() {
        let registry = LayerRegistry::with_builtins();

        let invert = registry.lookup("invert").unwrap();
        assert_eq!(invert.index(), 3);
        assert!(registry.lookup("Invert").is_err());
        assert!(registry.lookup_index(3).is_ok());
        assert!(registry.lookup_index(99).is_err());
    }

    #[test]
    fn test_register_assigns_indices() {
        let mut builder = LayerRegistry::builder();
        assert_eq!(builder.register("a", identity).unwrap(), 0);
        assert_eq!(builder.register("b", identity).unwrap(), 1);
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.by_name("b").unwrap().index(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut builder = LayerRegistry::builder();
        builder.register("a", identity).unwrap();

        let err = builder.register("a", identity).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_LAYER");
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = LayerRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.get(0).is_none());
    }
}
