//! Per-set classification rule tables
//!
//! The allow/deny lists that steer item classification are versioned
//! configuration, not logic: each set release moves items in and out of
//! the pools without changing the cascade itself. Tables ship as JSON
//! under `share/rules/`, embedded at compile time; a table for a newer
//! set can be loaded from disk without rebuilding.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::normalize::normalize_key;

/// The spatula never changes id across sets; emblems are crafted from it.
pub const SPATULA_ID: &str = "TFT_Item_Spatula";

// Embedded rule tables, one file per supported set
const SET16_RULES: &str = include_str!("../../../share/rules/set16.json");

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("no built-in rule table for set {0}")]
    UnknownSet(u32),

    #[error("failed to read rule table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rule table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rule tables for one set release.
///
/// Name lists are stored pre-normalized (see [`normalize_key`]); id lists
/// are exact upstream ids or raw id fragments.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRules {
    /// Set number the table applies to.
    pub set: u32,
    /// The tier-1 crafting materials.
    pub base_components: Vec<String>,
    /// Tactician-only items, excluded from output.
    pub tactician_items: Vec<String>,
    /// Support items, excluded from output.
    pub support_items: Vec<String>,
    /// Non-equipable bilgewater placeholders, by normalized name.
    pub bilgewater_blocklist_names: Vec<String>,
    /// Non-equipable bilgewater placeholders, by normalized id fragment.
    pub bilgewater_blocklist_id_fragments: Vec<String>,
    /// Artifacts forced into the pool even when metadata fails to match.
    pub artifact_force_include_names: Vec<String>,
    /// Force-include fragments for ids whose display name is unreliable.
    pub artifact_force_include_id_fragments: Vec<String>,
    /// Artifact names known to be erroneous leaks in this set's export.
    pub artifact_force_exclude_names: Vec<String>,
    /// Set-scoped perk-family ids that are not player-equipable.
    pub non_equipable_id_fragments: Vec<String>,
}

static BUILTIN_RULES: Lazy<HashMap<u32, SetRules>> = Lazy::new(|| {
    [SET16_RULES]
        .iter()
        .filter_map(|raw| serde_json::from_str::<SetRules>(raw).ok())
        .map(|rules| (rules.set, rules))
        .collect()
});

impl SetRules {
    /// Look up the embedded rule table for a set.
    pub fn builtin(set: u32) -> Result<&'static SetRules, RulesError> {
        BUILTIN_RULES.get(&set).ok_or(RulesError::UnknownSet(set))
    }

    /// Load a rule table from a JSON file (newer sets, local overrides).
    pub fn load(path: &Path) -> Result<SetRules, RulesError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Item-id namespace for this set, e.g. `TFT16_Item_`.
    pub fn item_namespace(&self) -> String {
        format!("TFT{}_Item_", self.set)
    }

    /// Trait-set token for this set, e.g. `TFTSet16`.
    pub fn trait_set_token(&self) -> String {
        format!("TFTSet{}", self.set)
    }

    pub fn is_base_component(&self, name_id: &str) -> bool {
        self.base_components.iter().any(|id| id == name_id)
    }

    pub fn is_tactician_item(&self, name_id: &str) -> bool {
        self.tactician_items.iter().any(|id| id == name_id)
    }

    pub fn is_support_item(&self, name_id: &str) -> bool {
        self.support_items.iter().any(|id| id == name_id)
    }

    /// Whether a (normalized) name or id matches the artifact force-include
    /// lists.
    pub fn is_artifact_force_included(&self, name_key: &str, name_id: &str) -> bool {
        if self
            .artifact_force_include_names
            .iter()
            .any(|name| name == name_key)
        {
            return true;
        }

        let id_key = normalize_key(name_id);
        self.artifact_force_include_id_fragments
            .iter()
            .any(|fragment| !fragment.is_empty() && id_key.contains(fragment.as_str()))
    }

    /// Whether a (normalized) name is on the artifact force-exclude list.
    pub fn is_artifact_force_excluded(&self, name_key: &str) -> bool {
        self.artifact_force_exclude_names
            .iter()
            .any(|name| name == name_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set16_parses() {
        let rules = SetRules::builtin(16).unwrap();
        assert_eq!(rules.set, 16);
        assert_eq!(rules.base_components.len(), 9);
        assert_eq!(rules.tactician_items.len(), 3);
        assert_eq!(rules.support_items.len(), 14);
        assert!(rules.base_components.contains(&SPATULA_ID.to_string()));
    }

    #[test]
    fn test_unknown_set_errors() {
        assert!(matches!(SetRules::builtin(3), Err(RulesError::UnknownSet(3))));
    }

    #[test]
    fn test_derived_tokens() {
        let rules = SetRules::builtin(16).unwrap();
        assert_eq!(rules.item_namespace(), "TFT16_Item_");
        assert_eq!(rules.trait_set_token(), "TFTSet16");
    }

    #[test]
    fn test_force_include_by_name_and_fragment() {
        let rules = SetRules::builtin(16).unwrap();
        assert!(rules.is_artifact_force_included("gambler's blade", "TFT_Item_Whatever"));
        assert!(rules.is_artifact_force_included("the collector", "TFT4_Item_OrnnTheCollector"));
        assert!(!rules.is_artifact_force_included("thornmail", "TFT_Item_Thornmail"));
    }

    #[test]
    fn test_force_exclude_by_name() {
        let rules = SetRules::builtin(16).unwrap();
        assert!(rules.is_artifact_force_excluded("spectral cutlass"));
        assert!(rules.is_artifact_force_excluded("unending despair"));
        assert!(!rules.is_artifact_force_excluded("hullcrusher"));
    }
}
