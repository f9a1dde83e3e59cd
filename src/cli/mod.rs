//! CLI Module
//!
//! Command-line interface for replaying paint scripts.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerpaint - per-cell color layer compositor
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in layers
    #[command(name = "layers")]
    Layers,

    /// Replay a paint script and render the grid
    #[command(name = "render")]
    Render {
        /// Path to the JSON paint script
        script: PathBuf,

        /// Write an image here (format from the extension) instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Timestamp to render at (overrides the script)
        #[arg(short, long)]
        timestamp: Option<u64>,
    },

    /// Replay a paint script and print one cell's color
    #[command(name = "inspect")]
    Inspect {
        /// Path to the JSON paint script
        script: PathBuf,

        /// Cell column
        x: usize,

        /// Cell row
        y: usize,

        /// Timestamp to render at (overrides the script)
        #[arg(short, long)]
        timestamp: Option<u64>,
    },
}
