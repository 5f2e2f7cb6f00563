//! CLI Module
//!
//! Command-line interface for the Headwave forward-modeling tool.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Headwave - refraction travel-time forward modeling
#[derive(Parser, Debug)]
#[command(name = "headwave")]
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
    /// Compute travel times, report critical distances, render the figure
    #[command(name = "run")]
    Run {
        /// Survey configuration file (JSON); defaults to the reference survey
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Figure output path (overrides the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute travel times and dump the table as JSON
    #[command(name = "print-times")]
    PrintTimes {
        /// Survey configuration file (JSON); defaults to the reference survey
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default survey configuration to a file
    #[command(name = "init-config")]
    InitConfig {
        /// Path for the new configuration file
        path: PathBuf,
    },
}
