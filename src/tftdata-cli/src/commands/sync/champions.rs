//! Champion sync stage

use anyhow::{bail, Result};
use serde_json::Value;
use std::path::Path;
use tftdata::{extract_champions, store, write_document};

/// Reshape the set's roster out of the comprehensive feed and persist it.
pub fn sync(comp: &Value, set: u32, data_dir: &Path) -> Result<()> {
    let Some(champions) = extract_champions(comp, set) else {
        bail!("no champion data found for set {set}");
    };

    write_document(data_dir, store::CHAMPIONS_FILE, &champions)?;
    println!("Wrote {} champions", champions.len());

    Ok(())
}
