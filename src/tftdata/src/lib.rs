//! # tftdata
//!
//! TFT data pipeline: ingests the Community Dragon feeds and normalizes
//! champions, items, and traits into three stable JSON documents.
//!
//! The hard part is item classification: two loosely-structured upstream
//! feeds reconciled into exactly one category per item through an ordered
//! rule cascade, per-set allow/deny tables, and artifact deduplication.
//! Everything in this crate is a pure transform over decoded feeds; the
//! CLI owns fetching and persistence.
//!
//! ## Example
//!
//! ```
//! use tftdata::{ItemClassifier, SetRules};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = SetRules::builtin(16)?;
//! let classifier = ItemClassifier::new(rules);
//!
//! let category = classifier.classify("TFT_Item_BFSword", "B.F. Sword", None);
//! assert_eq!(category.map(|c| c.to_string()), Some("component".into()));
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod dedupe;
pub mod extract;
pub mod icon;
pub mod index;
pub mod items;
pub mod meta;
pub mod model;
pub mod normalize;
pub mod rules;
pub mod store;

// Re-export commonly used items
#[doc(inline)]
pub use classify::{is_likely_artifact_id, ItemClassifier};
#[doc(inline)]
pub use dedupe::{artifact_priority_score, ItemCollector};
#[doc(inline)]
pub use extract::{extract_champions, extract_traits};
#[doc(inline)]
pub use icon::{convert_icon_path, CDRAGON_BASE};
#[doc(inline)]
pub use index::MetaIndex;
#[doc(inline)]
pub use items::build_items;
#[doc(inline)]
pub use model::{Category, OutputChampion, OutputItem, OutputTrait};
#[doc(inline)]
pub use normalize::normalize_key;
#[doc(inline)]
pub use rules::{RulesError, SetRules, SPATULA_ID};
#[doc(inline)]
pub use store::{write_document, DataStore, StoreError, TftData};
