//! Item document assembly
//!
//! One pass over the primary item feed: per-record noise filtering,
//! classification against the comprehensive metadata, artifact dedupe,
//! and the final category/name sort. Pure transform: same inputs always
//! produce the same document.

use serde_json::Value;
use std::collections::HashSet;

use crate::classify::ItemClassifier;
use crate::dedupe::ItemCollector;
use crate::icon::convert_icon_path;
use crate::index::MetaIndex;
use crate::meta;
use crate::model::OutputItem;
use crate::rules::SetRules;

/// Build the items document from the two decoded feeds.
///
/// Returns `None` when the primary feed is not an array (stage-level
/// malformation); individual malformed records are skipped silently.
pub fn build_items(comp: &Value, item_feed: &Value, rules: &SetRules) -> Option<Vec<OutputItem>> {
    let records = item_feed.as_array()?;

    let index = MetaIndex::build(comp, rules.set);
    let classifier = ItemClassifier::new(rules);

    let mut seen: HashSet<String> = HashSet::new();
    let mut collector = ItemCollector::new();

    for record in records {
        let Some(record) = record.as_object() else {
            continue;
        };

        let Some(name_id) = record
            .get("nameId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        else {
            continue;
        };

        if !seen.insert(name_id.to_string()) {
            continue;
        }

        if classifier.should_skip_upstream(name_id) {
            continue;
        }

        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(name_id);
        if name.is_empty() || name == "null" {
            continue;
        }

        let item_meta = index.get(name_id);

        let Some(category) = classifier.classify(name_id, name, item_meta) else {
            tracing::debug!(id = name_id, "item excluded from output");
            continue;
        };

        let icon = record
            .get("squareIconPath")
            .and_then(Value::as_str)
            .unwrap_or("");

        let item = OutputItem {
            id: name_id.to_string(),
            name: name.to_string(),
            icon: convert_icon_path(icon),
            category,
            recipe: meta::output_recipe(item_meta),
        };

        collector.push(item, item_meta);
    }

    Some(collector.into_sorted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use serde_json::json;

    fn rules() -> &'static SetRules {
        SetRules::builtin(16).unwrap()
    }

    #[test]
    fn test_non_array_feed_is_rejected() {
        assert!(build_items(&json!({}), &json!({ "items": [] }), rules()).is_none());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let feed = json!([
            "junk",
            { "name": "No id" },
            { "nameId": "", "name": "Empty id" },
            { "nameId": "TFT_Item_BFSword", "name": "B.F. Sword", "squareIconPath": "" },
        ]);
        let comp = json!({ "items": [{ "apiName": "TFT_Item_BFSword" }] });

        let items = build_items(&comp, &feed, rules()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Component);
    }

    #[test]
    fn test_duplicate_name_ids_keep_first_record() {
        let comp = json!({ "items": [{ "apiName": "TFT_Item_BFSword" }] });
        let feed = json!([
            { "nameId": "TFT_Item_BFSword", "name": "B.F. Sword" },
            { "nameId": "TFT_Item_BFSword", "name": "B.F. Sword (copy)" },
        ]);

        let items = build_items(&comp, &feed, rules()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "B.F. Sword");
    }

    #[test]
    fn test_empty_and_null_names_are_skipped() {
        let comp = json!({ "items": [{ "apiName": "TFT_Item_BFSword" }] });
        let feed = json!([
            { "nameId": "TFT_Item_BFSword", "name": "" },
            { "nameId": "TFT_Item_RecurveBow", "name": "null" },
        ]);

        let items = build_items(&comp, &feed, rules()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_name_falls_back_to_id() {
        let comp = json!({ "items": [{ "apiName": "TFT_Item_BFSword" }] });
        let feed = json!([{ "nameId": "TFT_Item_BFSword" }]);

        let items = build_items(&comp, &feed, rules()).unwrap();
        assert_eq!(items[0].name, "TFT_Item_BFSword");
    }

    #[test]
    fn test_recipe_comes_from_composition() {
        let comp = json!({
            "items": [{
                "apiName": "TFT_Item_GuinsoosRageblade",
                "composition": ["TFT_Item_NeedlesslyLargeRod", "TFT_Item_RecurveBow"]
            }]
        });
        let feed = json!([
            { "nameId": "TFT_Item_GuinsoosRageblade", "name": "Guinsoo's Rageblade" }
        ]);

        let items = build_items(&comp, &feed, rules()).unwrap();
        assert_eq!(items[0].category, Category::Combined);
        assert_eq!(
            items[0].recipe,
            vec!["TFT_Item_NeedlesslyLargeRod", "TFT_Item_RecurveBow"]
        );
    }

    #[test]
    fn test_output_is_sorted_by_category_then_name() {
        let comp = json!({
            "items": [
                { "apiName": "TFT_Item_BFSword" },
                { "apiName": "TFT_Item_RecurveBow" },
                {
                    "apiName": "TFT_Item_GuinsoosRageblade",
                    "composition": ["TFT_Item_NeedlesslyLargeRod", "TFT_Item_RecurveBow"]
                },
            ]
        });
        let feed = json!([
            {
                "nameId": "TFT_Item_GuinsoosRageblade",
                "name": "Guinsoo's Rageblade"
            },
            { "nameId": "TFT_Item_RecurveBow", "name": "Recurve Bow" },
            { "nameId": "TFT_Item_BFSword", "name": "B.F. Sword" },
        ]);

        let items = build_items(&comp, &feed, rules()).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B.F. Sword", "Recurve Bow", "Guinsoo's Rageblade"]);
    }
}
