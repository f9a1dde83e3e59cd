//! Layerpaint CLI
//!
//! Command-line interface for the Layerpaint compositing engine.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::commands;
use layerpaint::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    let output = match cmd {
        Commands::Layers => commands::list_layers(),
        Commands::Render {
            script,
            output,
            timestamp,
        } => commands::render(&script, output.as_deref(), timestamp)
            .with_context(|| format!("failed to render {}", script.display()))?,
        Commands::Inspect {
            script,
            x,
            y,
            timestamp,
        } => commands::inspect(&script, x, y, timestamp)
            .with_context(|| format!("failed to inspect {}", script.display()))?,
    };
    println!("{}", output);
    Ok(())
}
