//! Output document models
//!
//! The three persisted artifacts (champions, items, traits) are arrays of
//! these shapes, rebuilt wholesale on every sync.

use serde::{Deserialize, Serialize};

/// Category assigned to every published item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Component,
    Combined,
    Bilgewater,
    Emblem,
    Artifact,
}

impl Category {
    /// All categories in output order.
    pub const ALL: &'static [Category] = &[
        Category::Component,
        Category::Combined,
        Category::Bilgewater,
        Category::Emblem,
        Category::Artifact,
    ];

    /// Output ordering: components first, artifacts last.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Component => 0,
            Self::Combined => 1,
            Self::Bilgewater => 2,
            Self::Emblem => 3,
            Self::Artifact => 4,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Combined => write!(f, "combined"),
            Self::Bilgewater => write!(f, "bilgewater"),
            Self::Emblem => write!(f, "emblem"),
            Self::Artifact => write!(f, "artifact"),
        }
    }
}

/// Item entry in the items document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputItem {
    /// Upstream `nameId`, kept verbatim as the stable identifier.
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: Category,
    /// Component ids the item is crafted from (empty for non-crafted items).
    pub recipe: Vec<String>,
}

/// Trait reference carried by a champion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionTrait {
    pub name: String,
}

/// Champion entry in the champions document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputChampion {
    pub id: String,
    pub name: String,
    pub cost: i64,
    pub traits: Vec<ChampionTrait>,
    pub icon: String,
}

/// Activation threshold of a trait, mapped to a visual style tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitBreakpoint {
    pub min: i64,
    pub max: i64,
    pub style: String,
}

/// Trait entry in the traits document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputTrait {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub breakpoints: Vec<TraitBreakpoint>,
}
