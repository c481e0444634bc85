//! Artifact duplicate resolution
//!
//! The primary feed regularly carries the same artifact under two ids (a
//! legacy id plus a current `Ornn_`-prefixed one). Within the artifact
//! category only, records sharing a normalized display name collapse onto
//! the id with the strongest artifact evidence.

use serde_json::Value;
use std::collections::HashMap;

use crate::meta;
use crate::model::{Category, OutputItem};
use crate::normalize::normalize_key;

/// Evidence score used to pick the best record among duplicates.
///
/// Higher wins; ties keep the first-seen record.
pub fn artifact_priority_score(name_id: &str, meta_value: Option<&Value>) -> i32 {
    let mut score = 0;

    if name_id.contains("Ornn") {
        score += 3;
    }
    if name_id.contains("Artifact") {
        score += 2;
    }
    if meta::is_artifact_flag(meta_value) {
        score += 2;
    }
    if meta::has_tag(meta_value, &["artifact", "ornn"]) {
        score += 1;
    }

    score
}

/// Accumulates classified items, deduplicating artifacts by name.
///
/// Non-artifact items append in arrival order; artifact items claim a slot
/// keyed by normalized name, and a later duplicate replaces the kept
/// record only when its score is strictly greater.
#[derive(Debug, Default)]
pub struct ItemCollector {
    items: Vec<OutputItem>,
    artifact_slots: HashMap<String, (usize, i32)>,
}

impl ItemCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: OutputItem, meta_value: Option<&Value>) {
        if item.category != Category::Artifact {
            self.items.push(item);
            return;
        }

        let key = normalize_key(&item.name);
        let score = artifact_priority_score(&item.id, meta_value);

        if let Some(&(index, kept_score)) = self.artifact_slots.get(&key) {
            if score > kept_score {
                tracing::debug!(
                    name = %key,
                    replaced = %self.items[index].id,
                    kept = %item.id,
                    "artifact duplicate resolved"
                );
                self.items[index] = item;
                self.artifact_slots.insert(key, (index, score));
            }
        } else {
            self.artifact_slots.insert(key, (self.items.len(), score));
            self.items.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Final output ordering: category rank, then name.
    pub fn into_sorted(mut self) -> Vec<OutputItem> {
        self.items.sort_by(|a, b| {
            a.category
                .rank()
                .cmp(&b.category.rank())
                .then_with(|| a.name.cmp(&b.name))
        });
        self.items
    }
}
