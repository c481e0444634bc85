//! Comprehensive-feed item index
//!
//! The comprehensive feed exposes item metadata in up to two collections
//! (a global `items` list and a set-scoped `sets.<N>.items` list), each of
//! which may be shaped as a JSON array or as a keyed map depending on the
//! release. The index flattens both into one alias-keyed lookup so the
//! classifier can fetch metadata for a primary-feed id in O(1).

use serde_json::Value;
use std::collections::HashMap;

/// Alias-keyed metadata lookup over the comprehensive feed.
///
/// Every record is indexed under its `apiName` (falling back to `nameId`,
/// then to the map key for keyed collections) and, separately, under its
/// own `nameId` when present. Upstream is inconsistent about which key is
/// populated, so the redundancy is deliberate. Last write for an alias
/// wins: the set-scoped collection is processed after the global one and
/// silently overrides it on collision.
#[derive(Debug, Default)]
pub struct MetaIndex {
    entries: HashMap<String, Value>,
}

impl MetaIndex {
    /// Build the index for one set from the decoded comprehensive feed.
    pub fn build(comp: &Value, set: u32) -> Self {
        let mut index = MetaIndex::default();

        let set_key = set.to_string();
        let candidates = [
            comp.get("items"),
            comp.get("sets")
                .and_then(|sets| sets.get(&set_key))
                .and_then(|set_data| set_data.get("items")),
        ];

        for candidate in candidates.into_iter().flatten() {
            match candidate {
                Value::Array(records) => {
                    for record in records {
                        index.insert_aliases(record, "");
                    }
                }
                Value::Object(records) => {
                    for (key, record) in records {
                        index.insert_aliases(record, key);
                    }
                }
                _ => {}
            }
        }

        index
    }

    fn insert_aliases(&mut self, record: &Value, fallback_key: &str) {
        if !record.is_object() {
            tracing::debug!("skipping non-object comprehensive entry");
            return;
        }

        let api_name = record
            .get("apiName")
            .and_then(Value::as_str)
            .or_else(|| record.get("nameId").and_then(Value::as_str))
            .unwrap_or(fallback_key);

        if !api_name.is_empty() {
            self.entries.insert(api_name.to_string(), record.clone());
        }

        if let Some(name_id) = record.get("nameId").and_then(Value::as_str) {
            if !name_id.is_empty() {
                self.entries.insert(name_id.to_string(), record.clone());
            }
        }
    }

    /// Metadata for an item id, if any collection knew about it.
    pub fn get(&self, name_id: &str) -> Option<&Value> {
        self.entries.get(name_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
