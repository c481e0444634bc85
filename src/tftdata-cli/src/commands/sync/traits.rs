//! Trait sync stage

use anyhow::{bail, Context, Result};
use std::path::Path;
use tftdata::{extract_traits, store, write_document};

use super::fetch;

/// Fetch the trait feed, keep the configured set's traits, persist them.
pub fn sync(set: u32, data_dir: &Path) -> Result<()> {
    let feed = fetch::traits().context("failed to fetch trait feed")?;

    let Some(traits) = extract_traits(&feed, set) else {
        bail!("trait feed is not an array");
    };

    write_document(data_dir, store::TRAITS_FILE, &traits)?;
    println!("Wrote {} traits", traits.len());

    Ok(())
}
