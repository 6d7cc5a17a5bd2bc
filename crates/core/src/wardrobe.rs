//! Wardrobe item types and the catalog trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Garment categories the system buckets by.
///
/// `Other` absorbs categories a newer backend may introduce so that
/// deserialization never fails on unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    #[serde(untagged)]
    Other(String),
}

impl Category {
    /// The fixed buckets gap analysis and seasonal scoring iterate over.
    pub const CORE: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single garment in the user's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Unique ID for this item.
    pub id: String,

    /// Display name ("Navy chinos").
    pub name: String,

    /// Which bucket the item belongs to.
    pub category: Category,

    /// Dominant color, as reported by the catalog.
    pub color: String,

    /// How many times the item has been worn.
    #[serde(default)]
    pub wear_count: u32,

    /// Whether the user starred this item.
    #[serde(default)]
    pub is_favorite: bool,

    /// Heuristic priority favoring rarely-worn items during generation.
    /// Higher = more overdue for a wear.
    #[serde(default)]
    pub diversity_score: f64,
}

/// The wardrobe catalog collaborator.
#[async_trait]
pub trait WardrobeCatalog: Send + Sync {
    fn name(&self) -> &str;

    /// List every item the user owns. An empty wardrobe is a valid result.
    async fn list_items(
        &self,
        user_id: &str,
    ) -> std::result::Result<Vec<WardrobeItem>, CatalogError>;
}
