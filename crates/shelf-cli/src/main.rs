//! Shelf CLI Application
//!
//! Command-line interface and interactive menu for the Shelf book inventory
//! manager.

mod args;
mod cli;
mod renderer;
mod shell;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelf_core::CatalogBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        no_seed,
        json,
        command,
    } = Args::parse();

    let catalog = CatalogBuilder::new()
        .with_database_path(database_file)
        .with_seed(!no_seed)
        .build()
        .context("Failed to open the book inventory")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shelf started");

    let mut cli = Cli::new(catalog, renderer, json);
    match command {
        Some(Commands::Shell) | None => cli.run_shell()?,
        Some(command) => cli.handle_command(command)?,
    }

    cli.into_catalog()
        .close()
        .context("Failed to close the book inventory")
}
