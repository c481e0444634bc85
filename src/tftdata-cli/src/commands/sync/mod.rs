//! Sync command: fetch the upstream feeds and rebuild the documents
//!
//! The comprehensive feed is mandatory: without it neither champions nor
//! items nor traits can be derived, so a failed fetch fails the run. The
//! three stages after it are independent. Each catches its own
//! fetch/parse failure, reports it, and leaves the prior document
//! untouched while the remaining stages proceed.

mod champions;
mod fetch;
mod items;
mod traits;

use anyhow::{Context, Result};
use std::path::Path;
use tftdata::SetRules;

use crate::config::Config;

/// Handle the sync command
pub fn handle(set: Option<u32>, output: Option<&Path>, rules_path: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let set = config.effective_set(set);
    let data_dir = config.effective_data_dir(output);

    let rules = resolve_rules(set, rules_path)?;
    let set = rules.set;

    println!("Syncing set {} into {}", set, data_dir.display());

    let comp = fetch::comprehensive().context("failed to fetch comprehensive data")?;

    if let Err(err) = champions::sync(&comp, set, &data_dir) {
        eprintln!("champion sync failed: {err:#}");
    }

    if let Err(err) = items::sync(&comp, &rules, &data_dir) {
        eprintln!("item sync failed: {err:#}");
    }

    if let Err(err) = traits::sync(set, &data_dir) {
        eprintln!("trait sync failed: {err:#}");
    }

    Ok(())
}

/// Built-in table for the set, or a table loaded from `--rules`.
fn resolve_rules(set: u32, rules_path: Option<&Path>) -> Result<SetRules> {
    match rules_path {
        Some(path) => {
            let rules = SetRules::load(path)
                .with_context(|| format!("failed to load rule table {}", path.display()))?;
            if rules.set != set {
                tracing::warn!(
                    requested = set,
                    loaded = rules.set,
                    "rule table targets a different set; using the table's set"
                );
            }
            Ok(rules)
        }
        None => SetRules::builtin(set)
            .map(Clone::clone)
            .with_context(|| format!("no built-in rule table for set {set}; pass --rules")),
    }
}
