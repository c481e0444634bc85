//! Champion and trait extraction
//!
//! Champions come from the comprehensive feed's set-scoped roster; traits
//! come from their own flat feed, filtered by the set token. Both are
//! pure reshaping passes with per-record junk skipping.

use serde_json::Value;

use crate::icon::convert_icon_path;
use crate::model::{ChampionTrait, OutputChampion, OutputTrait, TraitBreakpoint};

/// Integer coercion for fields upstream sometimes ships as floats or
/// numeric strings.
fn coerce_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64))
            .unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        Some(Value::Bool(true)) => 1,
        _ => 0,
    }
}

fn string_field<'a>(record: &'a Value, name: &str) -> &'a str {
    record.get(name).and_then(Value::as_str).unwrap_or("")
}

/// Extract the playable champion roster for a set.
///
/// Entries without traits (reward chests and other non-combat records
/// that share the champion schema) and entries costing more than 10 are
/// filtered out. Returns `None` when the feed has no champion collection
/// for the set, so the caller can leave the previous document untouched.
pub fn extract_champions(comp: &Value, set: u32) -> Option<Vec<OutputChampion>> {
    let roster = comp
        .get("sets")?
        .get(set.to_string())?
        .get("champions")?
        .as_array()?;
    if roster.is_empty() {
        return None;
    }

    let mut champions = Vec::new();

    for champion in roster {
        if !champion.is_object() {
            continue;
        }

        let traits = match champion.get("traits").and_then(Value::as_array) {
            Some(traits) if !traits.is_empty() => traits,
            _ => continue,
        };

        let cost = coerce_i64(champion.get("cost"));
        if cost > 10 {
            continue;
        }

        let icon_path = champion
            .get("squareIcon")
            .and_then(Value::as_str)
            .or_else(|| champion.get("icon").and_then(Value::as_str))
            .unwrap_or("");

        champions.push(OutputChampion {
            id: string_field(champion, "apiName").to_string(),
            name: string_field(champion, "name").to_string(),
            cost,
            traits: traits
                .iter()
                .filter_map(Value::as_str)
                .map(|name| ChampionTrait {
                    name: name.to_string(),
                })
                .collect(),
            icon: convert_icon_path(icon_path),
        });
    }

    champions.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.name.cmp(&b.name)));

    Some(champions)
}

/// Extract the traits belonging to a set from the trait feed.
///
/// Membership is an exact match of the record's `set` field against the
/// `TFTSet<N>` token. Returns `None` when the feed is not an array.
pub fn extract_traits(feed: &Value, set: u32) -> Option<Vec<OutputTrait>> {
    let records = feed.as_array()?;
    let set_token = format!("TFTSet{set}");

    let mut traits = Vec::new();

    for record in records {
        if !record.is_object() {
            continue;
        }

        if string_field(record, "set") != set_token {
            continue;
        }

        let breakpoints = record
            .get("conditional_trait_sets")
            .and_then(Value::as_array)
            .map(|sets| {
                sets.iter()
                    .filter(|bp| bp.is_object())
                    .map(|bp| TraitBreakpoint {
                        min: coerce_i64(bp.get("min_units")),
                        max: coerce_i64(bp.get("max_units")),
                        style: string_field(bp, "style_name").to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        traits.push(OutputTrait {
            id: string_field(record, "trait_id").to_string(),
            name: string_field(record, "display_name").to_string(),
            icon: convert_icon_path(string_field(record, "icon_path")),
            breakpoints,
        });
    }

    traits.sort_by(|a, b| a.name.cmp(&b.name));

    Some(traits)
}
