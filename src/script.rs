//! Paint scripts
//!
//! A paint script is a JSON document describing a grid and the actions
//! to replay on it:
//!
//! ```json
//! {
//!   "style": "additive",
//!   "width": 16,
//!   "height": 16,
//!   "capacity": 1000,
//!   "background": "#202020",
//!   "timestamp": 0,
//!   "actions": [
//!     { "op": "paint", "layer": "red", "x": 3, "y": 4 },
//!     { "op": "brush_up" },
//!     { "op": "erase", "layer": "red", "x": 3, "y": 4 },
//!     { "op": "special" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::grid::Grid;
use crate::layers::{LayerRegistry, Timestamp};
use crate::store::{DrawStyle, StoreConfig};

/// One replayable grid action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Paint { layer: String, x: usize, y: usize },
    Erase { layer: String, x: usize, y: usize },
    Special,
    BrushUp,
    BrushDown,
}

/// Grid description plus the actions to replay on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintScript {
    pub style: DrawStyle,
    pub width: usize,
    pub height: usize,
    #[serde(flatten)]
    pub store: StoreConfig,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub timestamp: Timestamp,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Outcome of replaying a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Number of actions replayed
    pub actions: usize,
    /// Total store changes across all actions
    pub cells_changed: usize,
}

impl PaintScript {
    /// Parse a script from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading paint script: {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the grid and replay every action on it
    ///
    /// # Errors
    /// Fails on the first action naming an unknown layer or a cell
    /// outside the grid.
    pub fn replay(&self, registry: Arc<LayerRegistry>) -> Result<(Grid, ReplaySummary)> {
        let mut grid = Grid::new(self.style, self.width, self.height, registry, self.store)?;
        let mut summary = ReplaySummary::default();

        for action in &self.actions {
            let changed = apply_action(&mut grid, action)?;
            debug!("{:?} -> {} changes", action, changed);
            summary.actions += 1;
            summary.cells_changed += changed;
        }
        Ok((grid, summary))
    }
}

/// Apply one action to `grid`, returning how many stores changed
pub fn apply_action(grid: &mut Grid, action: &Action) -> Result<usize> {
    match action {
        Action::Paint { layer, x, y } => {
            let layer = grid.registry().lookup(layer)?;
            grid.paint(&layer, *x, *y)
        }
        Action::Erase { layer, x, y } => {
            let layer = grid.registry().lookup(layer)?;
            grid.erase(&layer, *x, *y)
        }
        Action::Special => Ok(grid.special()),
        Action::BrushUp => Ok(usize::from(grid.increase_brush_size())),
        Action::BrushDown => Ok(usize::from(grid.decrease_brush_size())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_CAPACITY;

    #[test]
    fn test_parse_minimal() {
        let script =
            PaintScript::from_json(r#"{ "style": "set", "width": 2, "height": 3 }"#).unwrap();
        assert_eq!(script.style, DrawStyle::Set);
        assert_eq!(script.store.capacity, DEFAULT_CAPACITY);
        assert_eq!(script.background, Color::BLACK);
        assert!(script.actions.is_empty());
    }

    #[test]
    fn test_parse_actions() {
        let script = PaintScript::from_json(
            r##"{
                "style": "add", "width": 4, "height": 4, "capacity": 3,
                "background": "#102030",
                "actions": [
                    { "op": "paint", "layer": "red", "x": 1, "y": 2 },
                    { "op": "brush_down" },
                    { "op": "special" }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(script.store.capacity, 3);
        assert_eq!(script.background, Color::new(0x10, 0x20, 0x30));
        assert_eq!(
            script.actions,
            vec![
                Action::Paint {
                    layer: "red".to_string(),
                    x: 1,
                    y: 2
                },
                Action::BrushDown,
                Action::Special,
            ]
        );
    }

    #[test]
    fn test_replay_counts_changes() {
        let script = PaintScript::from_json(
            r#"{
                "style": "sequence", "width": 3, "height": 3,
                "actions": [
                    { "op": "brush_down" },
                    { "op": "brush_down" },
                    { "op": "paint", "layer": "red", "x": 0, "y": 0 },
                    { "op": "paint", "layer": "red", "x": 0, "y": 0 },
                    { "op": "special" }
                ]
            }"#,
        )
        .unwrap();

        let (grid, summary) = script.replay(Arc::new(LayerRegistry::with_builtins())).unwrap();
        assert_eq!(summary.actions, 5);
        // two brush changes, one paint, one eviction
        assert_eq!(summary.cells_changed, 4);
        assert!(grid.cell(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_replay_unknown_layer() {
        let script = PaintScript::from_json(
            r#"{ "style": "set", "width": 1, "height": 1,
                 "actions": [ { "op": "paint", "layer": "teal", "x": 0, "y": 0 } ] }"#,
        )
        .unwrap();

        let err = script
            .replay(Arc::new(LayerRegistry::with_builtins()))
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LAYER");
    }

    #[test]
    fn test_replay_invalid_dimensions() {
        let script = PaintScript::from_json(r#"{ "style": "set", "width": 0, "height": 1 }"#)
            .unwrap();
        assert!(script.replay(Arc::new(LayerRegistry::with_builtins())).is_err());
    }
}
