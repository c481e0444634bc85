//! Item classification cascade
//!
//! One primary-feed record plus optional comprehensive metadata goes in;
//! a category (or an exclusion) comes out. The cascade is a strictly
//! ordered list of rules with early return. Rule order is load-bearing,
//! so each rule lives in its own function and the sequence reads top to
//! bottom in [`ItemClassifier::determine_category`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::meta;
use crate::model::Category;
use crate::normalize::normalize_key;
use crate::rules::{SetRules, SPATULA_ID};

/// Stat-tier placeholder ids, e.g. `TFT16_Item_ADTier3`.
static STAT_TIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(AD|AP|AS|ADAP|Health|ArmorMR)Tier\d+$").expect("valid pattern"));

/// Tags marking an item as trait-linked or black-market stock.
const TRAIT_TAGS: &[&str] = &["trait", "traititem", "blackmarket", "black_market"];

/// Tags marking an item as an artifact.
const ARTIFACT_TAGS: &[&str] = &["artifact", "ornn"];

/// Ids that read as artifacts even without metadata: Ornn items and the
/// canonical artifact namespace.
pub fn is_likely_artifact_id(name_id: &str) -> bool {
    name_id.contains("Ornn") || name_id.starts_with("TFT_Item_Artifact_")
}

/// Classifier for one sync run: the set's rule tables plus derived tokens.
pub struct ItemClassifier<'r> {
    rules: &'r SetRules,
    item_namespace: String,
}

impl<'r> ItemClassifier<'r> {
    pub fn new(rules: &'r SetRules) -> Self {
        let item_namespace = rules.item_namespace();
        Self {
            rules,
            item_namespace,
        }
    }

    /// Pre-filter: upstream noise that never reaches classification.
    ///
    /// Augments, champion-bound items, stat-tier placeholders, and the
    /// tactician/support pools are rejected on id alone.
    pub fn should_skip_upstream(&self, name_id: &str) -> bool {
        name_id.contains("Augment")
            || name_id.contains("ChampionItem")
            || STAT_TIER_PATTERN.is_match(name_id)
            || self.rules.is_tactician_item(name_id)
            || self.rules.is_support_item(name_id)
    }

    /// Full decision for one primary-feed record.
    ///
    /// Returns the category, or `None` when the item is excluded from the
    /// output entirely.
    pub fn classify(&self, name_id: &str, name: &str, meta: Option<&Value>) -> Option<Category> {
        let name_key = normalize_key(name);

        // Blocked names are cut before anything else can resurrect them.
        if self.rules.is_artifact_force_excluded(&name_key) {
            return None;
        }

        // Without metadata there is no reliable signal for most
        // categories; only artifact-looking ids and the fixed component
        // pool get through.
        if meta.is_none() {
            let admissible = is_likely_artifact_id(name_id)
                || self.rules.is_artifact_force_included(&name_key, name_id)
                || self.rules.is_base_component(name_id);
            if !admissible {
                return None;
            }
        }

        let mut category = self.determine_category(name_id, meta);

        // Force-include overrides whatever the cascade decided.
        if self.rules.is_artifact_force_included(&name_key, name_id) {
            category = Some(Category::Artifact);
        }

        let category = category?;

        // Safety nets on the two categories fed by fuzzy evidence.
        if category == Category::Bilgewater && self.should_skip_equipable(name_id, name, meta) {
            tracing::debug!(id = name_id, "bilgewater item dropped as not equipable");
            return None;
        }

        if category == Category::Artifact && self.rules.is_artifact_force_excluded(&name_key) {
            return None;
        }

        Some(category)
    }

    /// The ordered rule cascade. Earlier rules win.
    fn determine_category(&self, name_id: &str, meta: Option<&Value>) -> Option<Category> {
        if self.artifact_rule(name_id, meta) {
            return Some(Category::Artifact);
        }

        if self.rules.is_base_component(name_id) {
            return Some(Category::Component);
        }

        let recipe = meta::classification_recipe(meta);
        let has_spatula =
            recipe.iter().any(|id| id == SPATULA_ID) || name_id.contains("Spatula");

        if self.emblem_rule(name_id, meta, has_spatula) {
            // Emblem-looking items that don't follow this set's naming
            // convention are excluded rather than mis-tagged.
            let follows_convention = name_id.starts_with(&self.item_namespace)
                && name_id.contains("EmblemItem");
            return follows_convention.then_some(Category::Emblem);
        }

        if self.combined_rule(&recipe, has_spatula) {
            return Some(Category::Combined);
        }

        self.bilgewater_rule(name_id, meta)
    }

    fn artifact_rule(&self, name_id: &str, meta: Option<&Value>) -> bool {
        name_id.contains("Artifact")
            || meta::is_artifact_flag(meta)
            || meta::has_tag(meta, ARTIFACT_TAGS)
    }

    fn emblem_rule(&self, name_id: &str, meta: Option<&Value>, has_spatula: bool) -> bool {
        has_spatula || name_id.contains("Emblem") || meta::has_tag(meta, &["emblem"])
    }

    fn combined_rule(&self, recipe: &[String], has_spatula: bool) -> bool {
        recipe.len() == 2
            && !has_spatula
            && self.rules.is_base_component(&recipe[0])
            && self.rules.is_base_component(&recipe[1])
    }

    fn bilgewater_rule(&self, name_id: &str, meta: Option<&Value>) -> Option<Category> {
        let set_scoped = name_id.starts_with(&self.item_namespace);

        let trait_linked = set_scoped
            || meta::has_associated_traits(meta)
            || meta::grants_trait(meta)
            || meta::has_tag(meta, TRAIT_TAGS);

        // Set-scoped perk-family items (shop rerolls, upgrades, ...) are
        // not player-equipable no matter what the metadata says.
        if set_scoped
            && self
                .rules
                .non_equipable_id_fragments
                .iter()
                .any(|fragment| name_id.contains(fragment.as_str()))
        {
            return None;
        }

        if trait_linked {
            if set_scoped {
                return Some(Category::Bilgewater);
            }

            // Without the id-prefix evidence, only explicit metadata
            // signals are strong enough.
            if meta::has_associated_traits(meta) || meta::has_tag(meta, TRAIT_TAGS) {
                return Some(Category::Bilgewater);
            }
        }

        None
    }

    /// Post-classification check for items that passed as equipable but
    /// are known placeholders or carry a not-equipable flag.
    fn should_skip_equipable(&self, name_id: &str, name: &str, meta: Option<&Value>) -> bool {
        if meta::says_not_equipable(meta) {
            return true;
        }

        let name_key = normalize_key(name);
        if self
            .rules
            .bilgewater_blocklist_names
            .iter()
            .any(|blocked| blocked == &name_key)
        {
            return true;
        }

        let id_key = normalize_key(name_id);
        self.rules
            .bilgewater_blocklist_id_fragments
            .iter()
            .any(|fragment| id_key.contains(fragment.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classifier() -> ItemClassifier<'static> {
        ItemClassifier::new(SetRules::builtin(16).unwrap())
    }

    #[test]
    fn test_prefilter_rejects_upstream_noise() {
        let c = classifier();
        assert!(c.should_skip_upstream("TFT16_Augment_BigGrabBag"));
        assert!(c.should_skip_upstream("TFT16_ChampionItem_GangplankBarrel"));
        assert!(c.should_skip_upstream("TFT16_Item_ADTier3"));
        assert!(c.should_skip_upstream("TFT16_Item_ArmorMRTier12"));
        assert!(c.should_skip_upstream("TFT_Item_TacticiansRing"));
        assert!(c.should_skip_upstream("TFT_Item_ZekesHerald"));
        assert!(!c.should_skip_upstream("TFT_Item_BFSword"));
        // Tier marker only counts at the end of the id
        assert!(!c.should_skip_upstream("TFT16_Item_ADTier3Extra"));
    }

    #[test]
    fn test_base_component_without_metadata() {
        let c = classifier();
        assert_eq!(
            c.classify("TFT_Item_BFSword", "B.F. Sword", None),
            Some(Category::Component)
        );
    }

    #[test]
    fn test_unknown_id_without_metadata_is_rejected() {
        let c = classifier();
        assert_eq!(c.classify("TFT_Item_Thornmail", "Thornmail", None), None);
    }

    #[test]
    fn test_artifact_id_without_metadata_is_admitted() {
        let c = classifier();
        assert_eq!(
            c.classify("Ornn_Item_DeathsDefiance", "Death's Defiance", None),
            Some(Category::Artifact)
        );
        assert_eq!(
            c.classify("TFT_Item_Artifact_Hullcrusher", "Hullcrusher", None),
            Some(Category::Artifact)
        );
    }

    #[test]
    fn test_artifact_by_flag_and_tag() {
        let c = classifier();
        let meta = json!({ "isArtifact": true });
        assert_eq!(
            c.classify("TFT_Item_Something", "Something", Some(&meta)),
            Some(Category::Artifact)
        );

        let meta = json!({ "tags": ["Ornn"] });
        assert_eq!(
            c.classify("TFT_Item_Other", "Other", Some(&meta)),
            Some(Category::Artifact)
        );
    }

    #[test]
    fn test_artifact_rule_outranks_component_list() {
        // Artifact evidence is checked before the component fixed list.
        let c = classifier();
        let meta = json!({ "isArtifact": true });
        assert_eq!(
            c.classify("TFT_Item_BFSword", "B.F. Sword", Some(&meta)),
            Some(Category::Artifact)
        );
    }

    #[test]
    fn test_emblem_requires_set_namespace_and_literal() {
        let c = classifier();
        let meta = json!({ "composition": ["TFT_Item_Spatula", "TFT_Item_NegatronCloak"] });

        assert_eq!(
            c.classify("TFT16_Item_MarinerEmblemItem", "Mariner Emblem", Some(&meta)),
            Some(Category::Emblem)
        );
        // Same recipe, foreign set prefix: excluded, not mis-tagged
        assert_eq!(
            c.classify("TFT9_Item_VoidEmblemItem", "Void Emblem", Some(&meta)),
            None
        );
        // Set-prefixed but missing the EmblemItem literal
        assert_eq!(
            c.classify("TFT16_Item_MarinerCrest", "Mariner Crest", Some(&meta)),
            None
        );
    }

    #[test]
    fn test_emblem_by_tag_without_spatula() {
        let c = classifier();
        let meta = json!({ "itemTags": ["emblem"] });
        assert_eq!(
            c.classify("TFT16_Item_SugarcraftEmblemItem", "Sugarcraft Emblem", Some(&meta)),
            Some(Category::Emblem)
        );
    }

    #[test]
    fn test_combined_from_two_base_components() {
        let c = classifier();
        let meta = json!({ "composition": ["TFT_Item_BFSword", "TFT_Item_RecurveBow"] });
        assert_eq!(
            c.classify("TFT_Item_GuinsoosRageblade", "Guinsoo's Rageblade", Some(&meta)),
            Some(Category::Combined)
        );
    }

    #[test]
    fn test_combined_rejects_spatula_recipes() {
        let c = classifier();
        // Spatula recipes fall under the emblem rule, which then excludes
        // non-conventional ids outright.
        let meta = json!({ "composition": ["TFT_Item_Spatula", "TFT_Item_BFSword"] });
        assert_eq!(c.classify("TFT_Item_Mystery", "Mystery", Some(&meta)), None);
    }

    #[test]
    fn test_combined_requires_exactly_two_components() {
        let c = classifier();
        let meta = json!({ "composition": ["TFT_Item_BFSword"] });
        assert_eq!(c.classify("TFT_Item_Partial", "Partial", Some(&meta)), None);

        let meta = json!({
            "composition": ["TFT_Item_BFSword", "TFT_Item_RecurveBow", "TFT_Item_ChainVest"]
        });
        assert_eq!(c.classify("TFT_Item_Triple", "Triple", Some(&meta)), None);
    }

    #[test]
    fn test_set_scoped_item_is_bilgewater() {
        let c = classifier();
        let meta = json!({});
        assert_eq!(
            c.classify("TFT16_Item_PowderKeg", "Powder Keg", Some(&meta)),
            Some(Category::Bilgewater)
        );
    }

    #[test]
    fn test_set_scoped_perk_family_is_rejected() {
        let c = classifier();
        let meta = json!({});
        for id in [
            "TFT16_Item_Piltover_Crest",
            "TFT16_Item_ShopReroll",
            "TFT16_Item_ChampionDuplicator",
            "TFT16_Item_RefreshToken",
            "TFT16_Item_UpgradeCore",
            "TFT16_Item_FirstFreeShop",
        ] {
            assert_eq!(c.classify(id, "Perk", Some(&meta)), None, "{id}");
        }
    }

    #[test]
    fn test_foreign_id_with_trait_metadata_is_bilgewater() {
        let c = classifier();
        let meta = json!({ "associatedTraits": ["Mariner"] });
        assert_eq!(
            c.classify("TFT15_Item_LuckyCoin", "Lucky Coin", Some(&meta)),
            Some(Category::Bilgewater)
        );

        let meta = json!({ "tags": ["blackmarket"] });
        assert_eq!(
            c.classify("TFT15_Item_SmugglersCache", "Smuggler's Cache", Some(&meta)),
            Some(Category::Bilgewater)
        );
    }

    #[test]
    fn test_foreign_id_with_grants_trait_only_is_rejected() {
        // grantsTrait alone marks the item trait-linked, but without the
        // id prefix the weaker branch demands an explicit traits list or
        // tag, so this falls through.
        let c = classifier();
        let meta = json!({ "grantsTrait": true });
        assert_eq!(c.classify("TFT15_Item_Oddity", "Oddity", Some(&meta)), None);
    }

    #[test]
    fn test_bilgewater_not_equipable_is_dropped() {
        let c = classifier();
        let meta = json!({ "isDisabled": true });
        assert_eq!(c.classify("TFT16_Item_Prototype", "Prototype", Some(&meta)), None);
    }

    #[test]
    fn test_bilgewater_blocklist_by_name_and_fragment() {
        let c = classifier();
        let meta = json!({});
        assert_eq!(
            c.classify("TFT16_Item_CaptainsHat", "Captain's Hat", Some(&meta)),
            None
        );
        assert_eq!(
            c.classify("TFT16_Item_DreadwayCannon", "Renamed Cannon", Some(&meta)),
            None
        );
    }

    #[test]
    fn test_force_exclude_wins_over_artifact_signals() {
        let c = classifier();
        let meta = json!({ "isArtifact": true });
        assert_eq!(
            c.classify("TFT_Item_Artifact_SpectralCutlass", "Spectral Cutlass", Some(&meta)),
            None
        );
    }

    #[test]
    fn test_force_include_overrides_cascade_result() {
        let c = classifier();
        // Metadata would classify this as combined; the force-include
        // list pins it to artifact.
        let meta = json!({ "composition": ["TFT_Item_BFSword", "TFT_Item_SparringGloves"] });
        assert_eq!(
            c.classify("TFT16_Item_GamblersBlade", "Gambler's Blade", Some(&meta)),
            Some(Category::Artifact)
        );
    }

    #[test]
    fn test_force_include_fragment_overrides_by_id() {
        let c = classifier();
        let meta = json!({});
        assert_eq!(
            c.classify("TFT4_Item_OrnnTheCollector", "The Collector", Some(&meta)),
            Some(Category::Artifact)
        );
    }
}
