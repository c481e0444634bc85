//! Read-only access to the published documents
//!
//! The documents are immutable between syncs, so a store caches each one
//! after the first read. Invalidation point: construct a fresh store
//! after a successful sync (there is no in-place reload by design).

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{OutputChampion, OutputItem, OutputTrait};

/// Subdirectory of the data dir holding the three documents.
pub const DOCUMENT_DIR: &str = "tft";

pub const CHAMPIONS_FILE: &str = "champions.json";
pub const ITEMS_FILE: &str = "items.json";
pub const TRAITS_FILE: &str = "traits.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Aggregate snapshot of the three documents.
#[derive(Debug, Clone, Serialize)]
pub struct TftData {
    pub champions: Vec<OutputChampion>,
    pub items: Vec<OutputItem>,
    pub traits: Vec<OutputTrait>,
}

/// Cached reader over the generated documents.
///
/// A missing document reads as an empty collection; consumers must keep
/// working before the first sync has ever run. A corrupt document is an
/// error, not an empty result.
#[derive(Debug)]
pub struct DataStore {
    dir: PathBuf,
    champions: OnceCell<Vec<OutputChampion>>,
    items: OnceCell<Vec<OutputItem>>,
    traits: OnceCell<Vec<OutputTrait>>,
}

impl DataStore {
    /// Create a store over a data directory (the parent of `tft/`).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: data_dir.into(),
            champions: OnceCell::new(),
            items: OnceCell::new(),
            traits: OnceCell::new(),
        }
    }

    pub fn champions(&self) -> Result<&[OutputChampion], StoreError> {
        self.champions
            .get_or_try_init(|| self.load(CHAMPIONS_FILE))
            .map(Vec::as_slice)
    }

    pub fn items(&self) -> Result<&[OutputItem], StoreError> {
        self.items
            .get_or_try_init(|| self.load(ITEMS_FILE))
            .map(Vec::as_slice)
    }

    pub fn traits(&self) -> Result<&[OutputTrait], StoreError> {
        self.traits
            .get_or_try_init(|| self.load(TRAITS_FILE))
            .map(Vec::as_slice)
    }

    /// All three documents as one snapshot.
    pub fn all(&self) -> Result<TftData, StoreError> {
        Ok(TftData {
            champions: self.champions()?.to_vec(),
            items: self.items()?.to_vec(),
            traits: self.traits()?.to_vec(),
        })
    }

    fn document_path(&self, file: &str) -> PathBuf {
        self.dir.join(DOCUMENT_DIR).join(file)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.document_path(file);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse { path, source })
    }
}

/// Write one document, creating the document directory as needed.
///
/// Pretty-printed UTF-8; the whole file is replaced on every call.
pub fn write_document<T: Serialize>(
    data_dir: &Path,
    file: &str,
    value: &T,
) -> Result<(), StoreError> {
    let out_dir = data_dir.join(DOCUMENT_DIR);
    std::fs::create_dir_all(&out_dir).map_err(|source| StoreError::Io {
        path: out_dir.clone(),
        source,
    })?;

    let path = out_dir.join(file);
    let body = serde_json::to_string_pretty(value).map_err(|source| StoreError::Parse {
        path: path.clone(),
        source,
    })?;

    std::fs::write(&path, body).map_err(|source| StoreError::Io { path, source })
}
