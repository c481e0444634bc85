mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tftdata=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { set, output, rules } => {
            commands::sync::handle(set, output.as_deref(), rules.as_deref())?;
        }

        Commands::Data { data_dir, command } => {
            commands::data::handle(command, data_dir.as_deref())?;
        }

        Commands::Configure {
            set,
            data_dir,
            show,
        } => {
            commands::configure::handle(set, data_dir, show)?;
        }
    }

    Ok(())
}
