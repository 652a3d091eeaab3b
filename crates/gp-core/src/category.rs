use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Id of the synthetic "Key Highlights" category. It does not correspond to a
/// `category_title` tag; it selects projects flagged `is_key_highlight`.
pub const KEY_HIGHLIGHTS_ID: u32 = 0;

/// A named grouping used to filter the project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

static REGISTRY: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new(KEY_HIGHLIGHTS_ID, "Key Highlights"),
        Category::new(1, "Web GIS and Data Visualization"),
        Category::new(2, "Agriculture"),
        Category::new(3, "Disaster Risk Resilience"),
        Category::new(4, "Training & Capacity Building"),
        Category::new(5, "Software & Application Development"),
        Category::new(6, "E-Governance"),
        Category::new(7, "Surveying and GIS Mapping"),
        Category::new(8, "Open Data Initiatives"),
        Category::new(9, "Innovation in Land Reform and Management"),
        Category::new(10, "Tourism"),
        Category::new(11, "Frontier Technologies"),
    ]
});

/// The fixed, ordered category registry. Established at process start and
/// never fetched or mutated at runtime.
pub fn registry() -> &'static [Category] {
    &REGISTRY
}

/// Resolve a category id to its display name.
pub fn resolve_name(categories: &[Category], id: u32) -> Option<&str> {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.as_str())
}
