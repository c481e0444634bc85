//! Item sync stage

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;
use tftdata::{build_items, store, write_document, SetRules};

use super::fetch;

/// Fetch the primary item feed, classify it against the comprehensive
/// metadata, and persist the items document.
pub fn sync(comp: &Value, rules: &SetRules, data_dir: &Path) -> Result<()> {
    let feed = fetch::items().context("failed to fetch item feed")?;

    let Some(items) = build_items(comp, &feed, rules) else {
        bail!("item feed is not an array");
    };

    write_document(data_dir, store::ITEMS_FILE, &items)?;
    println!("Wrote {} items", items.len());

    Ok(())
}
