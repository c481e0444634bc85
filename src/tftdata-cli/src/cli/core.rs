//! Top-level CLI definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::DataCommand;

#[derive(Parser)]
#[command(name = "tftdata")]
#[command(about = "Sync and inspect TFT champion, item, and trait data", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the upstream feeds and rebuild the data documents
    Sync {
        /// TFT set number to sync (defaults to the configured set)
        #[arg(long)]
        set: Option<u32>,

        /// Data directory to write into (defaults to the configured one)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Rule-table JSON file overriding the built-in tables
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Inspect the generated documents
    Data {
        /// Data directory to read from (defaults to the configured one)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: DataCommand,
    },

    /// Persist default set number and data directory
    Configure {
        /// Default TFT set number
        #[arg(long)]
        set: Option<u32>,

        /// Default data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
