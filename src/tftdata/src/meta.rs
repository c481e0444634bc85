//! Comprehensive-feed metadata field readers
//!
//! The secondary feed is an arbitrary bag of fields per item, and which
//! field carries a given signal drifts between releases. Each reader here
//! tries the known field aliases in a fixed preference order; an explicit
//! `null` falls through to the next alias.

use serde_json::Value;

/// Flags any of which mark an item as not player-equipable.
const NOT_EQUIPABLE_FLAGS: &[&str] = &[
    "isNotEquipable",
    "notEquipable",
    "isNonEquipable",
    "nonEquipable",
    "isDisabled",
    "disabled",
    "isDeprecated",
    "deprecated",
    "isHidden",
    "hidden",
    "isTutorial",
    "tutorial",
    "isNYI",
    "nyi",
];

/// Field aliases that may carry the crafting component list.
const RECIPE_FIELDS: &[&str] = &["composition", "from", "components", "recipe"];

/// Field aliases that may carry the associated-traits list.
const TRAIT_FIELDS: &[&str] = &["associatedTraits", "traits", "trait"];

/// Field aliases any of which mark an item as granting a trait.
const GRANTS_TRAIT_FIELDS: &[&str] = &["trait", "traits", "grantsTrait", "grantTrait"];

fn field<'a>(meta: Option<&'a Value>, names: &[&str]) -> Option<&'a Value> {
    let meta = meta?;
    names
        .iter()
        .find_map(|name| meta.get(*name).filter(|value| !value.is_null()))
}

/// Whether the metadata carries one of the wanted tags, case-insensitively.
///
/// Tags are read from `itemTags` or `tags`, in that order.
pub fn has_tag(meta: Option<&Value>, wanted: &[&str]) -> bool {
    let Some(Value::Array(tags)) = field(meta, &["itemTags", "tags"]) else {
        return false;
    };

    tags.iter()
        .filter_map(Value::as_str)
        .any(|tag| wanted.iter().any(|want| tag.eq_ignore_ascii_case(want)))
}

/// Component list used for classification.
///
/// First non-null recipe field wins; a field that is not a list yields an
/// empty recipe. Entries are filtered to non-empty strings.
pub fn classification_recipe(meta: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = field(meta, RECIPE_FIELDS) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Component list published in the output document.
///
/// Unlike [`classification_recipe`], only `composition` feeds the output;
/// the wider alias fallback exists to classify, not to publish.
pub fn output_recipe(meta: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = field(meta, &["composition"]) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

/// Whether the metadata carries a non-empty associated-traits value.
///
/// A bare non-empty string counts as a single-entry list.
pub fn has_associated_traits(meta: Option<&Value>) -> bool {
    match field(meta, TRAIT_FIELDS) {
        Some(Value::String(name)) => !name.is_empty(),
        Some(Value::Array(entries)) => !entries.is_empty(),
        _ => false,
    }
}

/// Whether the metadata indicates the item grants a trait to its holder.
pub fn grants_trait(meta: Option<&Value>) -> bool {
    let Some(meta) = meta else {
        return false;
    };

    GRANTS_TRAIT_FIELDS
        .iter()
        .any(|name| meta.get(*name).is_some_and(is_truthy))
}

/// Whether any not-equipable flag is set to a literal `true`.
pub fn says_not_equipable(meta: Option<&Value>) -> bool {
    let Some(meta) = meta else {
        return false;
    };

    NOT_EQUIPABLE_FLAGS
        .iter()
        .any(|name| meta.get(*name).and_then(Value::as_bool).unwrap_or(false))
}

/// Whether the metadata's `isArtifact` flag is a literal `true`.
pub fn is_artifact_flag(meta: Option<&Value>) -> bool {
    meta.and_then(|m| m.get("isArtifact"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Loose truthiness: absent, null, false, zero, empty string/"0", and
/// empty containers are all falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(entries) => !entries.is_empty(),
        Value::Object(_) => true,
    }
}
