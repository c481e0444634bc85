//! Data inspection command handlers
//!
//! Read-only views over the generated documents, served through the
//! library's cached [`DataStore`].

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tftdata::{Category, DataStore};

use crate::cli::DataCommand;
use crate::config::Config;

/// Handle the data command
pub fn handle(command: DataCommand, data_dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let store = DataStore::new(config.effective_data_dir(data_dir));

    match command {
        DataCommand::Champions => print_json(&store.champions()?)?,
        DataCommand::Items => print_json(&store.items()?)?,
        DataCommand::Traits => print_json(&store.traits()?)?,
        DataCommand::All => print_json(&store.all()?)?,
        DataCommand::Stats => print_stats(&store)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Per-category item counts, in output order.
fn print_stats(store: &DataStore) -> Result<()> {
    let items = store.items()?;

    for category in Category::ALL {
        let count = items.iter().filter(|i| i.category == *category).count();
        println!("{:<12} {}", category.to_string(), count);
    }
    println!("{:<12} {}", "total", items.len());

    Ok(())
}
