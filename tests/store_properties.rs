//! Store Property Tests
//!
//! Behavioural properties shared by, or specific to, each store style,
//! exercised through the public `LayerStore` API.

use std::sync::Arc;

use layerpaint::layers::Timestamp;
use layerpaint::{Color, DrawStyle, LayerRef, LayerRegistry, LayerStore, StoreConfig};

const START: Color = Color::new(90, 120, 30);

/// Transforms that depend on input, time and position so that
/// composition order is visible in the output
fn test_registry() -> Arc<LayerRegistry> {
    let mut builder = LayerRegistry::builder();
    builder
        .register("red", |c: Color, t: Timestamp, x: usize, _y: usize| {
            Color::from_clamped(i32::from(c.r) + 50 + t as i32, i32::from(c.g), x as i32)
        })
        .unwrap();
    builder
        .register("green", |c: Color, _t: Timestamp, _x: usize, y: usize| {
            Color::from_clamped(i32::from(c.g), i32::from(c.r) * 2, i32::from(c.b) + y as i32)
        })
        .unwrap();
    builder
        .register("blue", |c: Color, _t: Timestamp, _x: usize, _y: usize| c.inverted().offset(-7))
        .unwrap();
    builder
        .register("yellow", |c: Color, _t: Timestamp, _x: usize, _y: usize| {
            Color::new(c.b, c.r, c.g)
        })
        .unwrap();
    Arc::new(builder.build())
}

fn layer(registry: &LayerRegistry, name: &str) -> LayerRef {
    registry.lookup(name).unwrap()
}

fn store(style: DrawStyle, registry: &Arc<LayerRegistry>) -> LayerStore {
    LayerStore::new(style, registry, &StoreConfig::default())
}

// === Set Store ===

#[test]
fn test_set_add_then_replace() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Set, &registry);
    let l1 = layer(&registry, "red");
    let l2 = layer(&registry, "green");

    s.add(&l1);
    assert_eq!(s.get_color(START, 4, 1, 2), l1.apply(START, 4, 1, 2));

    s.add(&l2);
    assert_eq!(s.get_color(START, 4, 1, 2), l2.apply(START, 4, 1, 2));

    s.erase(&l1);
    assert_eq!(s.get_color(START, 4, 1, 2), START);
}

#[test]
fn test_set_special_parity() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Set, &registry);
    let l1 = layer(&registry, "green");
    s.add(&l1);

    let plain = s.get_color(START, 0, 3, 3);
    s.special();
    assert_eq!(s.get_color(START, 0, 3, 3), plain.inverted());
    s.special();
    assert_eq!(s.get_color(START, 0, 3, 3), plain);
}

// === Additive Store ===

#[test]
fn test_additive_order_erase_and_reverse() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Additive, &registry);
    let l1 = layer(&registry, "red");
    let l2 = layer(&registry, "green");
    let l3 = layer(&registry, "yellow");
    let (t, x, y) = (2, 5, 1);

    s.add(&l1);
    s.add(&l2);
    assert_eq!(
        s.get_color(START, t, x, y),
        l2.apply(l1.apply(START, t, x, y), t, x, y)
    );

    s.add(&l3);
    assert!(s.erase(&l3));
    assert_eq!(
        s.get_color(START, t, x, y),
        l3.apply(l2.apply(START, t, x, y), t, x, y)
    );

    assert!(s.special());
    assert_eq!(
        s.get_color(START, t, x, y),
        l2.apply(l3.apply(START, t, x, y), t, x, y)
    );
}

#[test]
fn test_additive_reverse_two() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Additive, &registry);
    let l1 = layer(&registry, "red");
    let l2 = layer(&registry, "blue");

    s.add(&l1);
    s.add(&l2);
    s.special();
    assert_eq!(
        s.get_color(START, 0, 0, 0),
        l1.apply(l2.apply(START, 0, 0, 0), 0, 0, 0)
    );
}

// === Sequence Store ===

#[test]
fn test_sequence_median_odd() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Sequence, &registry);
    for name in ["red", "green", "blue"] {
        s.add(&layer(&registry, name));
    }

    assert!(s.special());
    let red = layer(&registry, "red");
    let blue = layer(&registry, "blue");
    assert_eq!(s.layer_indices(), vec![red.index(), blue.index()]);
    assert_eq!(
        s.get_color(START, 1, 1, 1),
        blue.apply(red.apply(START, 1, 1, 1), 1, 1, 1)
    );
}

#[test]
fn test_sequence_median_even() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Sequence, &registry);
    for name in ["yellow", "blue", "red", "green"] {
        s.add(&layer(&registry, name));
    }

    assert!(s.special());
    let green = layer(&registry, "green");
    assert!(!s.layer_indices().contains(&green.index()));
    assert_eq!(s.len(), 3);
}

#[test]
fn test_sequence_composes_by_index_not_insertion() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Sequence, &registry);
    let yellow = layer(&registry, "yellow");
    let red = layer(&registry, "red");

    s.add(&yellow);
    s.add(&red);
    assert_eq!(
        s.get_color(START, 0, 0, 0),
        yellow.apply(red.apply(START, 0, 0, 0), 0, 0, 0)
    );
}

#[test]
fn test_sequence_special_drains_to_start() {
    let registry = test_registry();
    let mut s = store(DrawStyle::Sequence, &registry);
    s.add(&layer(&registry, "green"));
    s.add(&layer(&registry, "blue"));

    assert!(s.special());
    assert!(s.special());
    assert!(!s.special());
    assert_eq!(s.get_color(START, 0, 0, 0), START);
}

// === Capacity ===

#[test]
fn test_capacity_rejects_without_effect() {
    let registry = test_registry();
    let config = StoreConfig::with_capacity(2);

    for style in [DrawStyle::Additive, DrawStyle::Sequence] {
        let mut s = LayerStore::new(style, &registry, &config);
        s.add(&layer(&registry, "red"));
        s.add(&layer(&registry, "green"));
        let before = s.get_color(START, 0, 0, 0);

        assert!(!s.add(&layer(&registry, "blue")), "{} accepted past capacity", style);
        assert_eq!(s.get_color(START, 0, 0, 0), before);
        assert_eq!(s.len(), 2);
    }
}

// === Purity ===

#[test]
fn test_get_color_is_pure_for_every_style() {
    let registry = test_registry();

    for style in DrawStyle::ALL {
        let mut s = store(style, &registry);
        for name in ["yellow", "red", "green"] {
            s.add(&layer(&registry, name));
        }
        s.special();

        let indices = s.layer_indices();
        let first = s.get_color(START, 7, 2, 9);
        for _ in 0..10 {
            assert_eq!(s.get_color(START, 7, 2, 9), first, "{} changed output", style);
        }
        assert_eq!(s.layer_indices(), indices, "{} changed state", style);
    }
}
