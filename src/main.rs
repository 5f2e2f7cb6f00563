//! Headwave CLI - Refraction Travel-Time Forward Modeling
//!
//! Command-line interface for the Headwave forward-modeling tool.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use headwave::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Headwave v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        // Bare invocation runs the reference survey end to end
        None => commands::run(None, None).context("forward modeling failed"),
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Run { config, output } => {
            commands::run(config.as_deref(), output.as_deref()).context("forward modeling failed")
        }
        Commands::PrintTimes { config } => {
            commands::print_times(config.as_deref()).context("travel-time dump failed")
        }
        Commands::InitConfig { path } => commands::init_config(&path)
            .with_context(|| format!("could not write {}", path.display())),
    }
}
