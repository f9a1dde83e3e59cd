//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. Each command
//! returns the text it would print so it can be tested directly.

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::error::Result;
use crate::grid::write_image;
use crate::layers::{LayerRegistry, Timestamp};
use crate::script::PaintScript;

/// List every built-in layer with its index and swatch.
pub fn list_layers() -> String {
    let registry = LayerRegistry::with_builtins();
    registry
        .iter()
        .map(|layer| match layer.swatch() {
            Some(swatch) => format!("{:>2}  {:<10} {}", layer.index(), layer.name(), swatch),
            None => format!("{:>2}  {}", layer.index(), layer.name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replay a script, then write an image or summarise the result.
pub fn render(script_path: &Path, output: Option<&Path>, timestamp: Option<Timestamp>) -> Result<String> {
    info!("Rendering script: {}", script_path.display());

    let script = PaintScript::load(script_path)?;
    let (grid, summary) = script.replay(Arc::new(LayerRegistry::with_builtins()))?;
    let timestamp = timestamp.unwrap_or(script.timestamp);

    let mut report = format!(
        "Replayed {} actions on a {}x{} {} grid ({} store changes)",
        summary.actions,
        grid.width(),
        grid.height(),
        grid.style(),
        summary.cells_changed
    );

    match output {
        Some(path) => {
            write_image(path, &grid, script.background, timestamp)?;
            report.push_str(&format!("\nImage written: {}", path.display()));
        }
        None => {
            let layered = (0..grid.height())
                .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| grid.cell(x, y).map_or(false, |cell| !cell.is_empty()))
                .count();
            report.push_str(&format!("\nCells with layers: {}", layered));
        }
    }

    Ok(report)
}

/// Replay a script and report one cell's layers and color.
pub fn inspect(script_path: &Path, x: usize, y: usize, timestamp: Option<Timestamp>) -> Result<String> {
    info!("Inspecting ({}, {}) in: {}", x, y, script_path.display());

    let script = PaintScript::load(script_path)?;
    let (grid, _) = script.replay(Arc::new(LayerRegistry::with_builtins()))?;
    let timestamp = timestamp.unwrap_or(script.timestamp);

    let cell = grid.cell(x, y)?;
    let names: Vec<&str> = cell
        .layer_indices()
        .into_iter()
        .filter_map(|index| grid.registry().get(index))
        .map(|layer| layer.name())
        .collect();
    let color = grid.get_color(x, y, script.background, timestamp)?;

    Ok(format!(
        "Cell ({}, {}) [{}]: {}\nLayers: {}",
        x,
        y,
        cell.style(),
        color,
        if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        }
    ))
}
