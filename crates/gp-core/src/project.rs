use serde::{Deserialize, Deserializer, Serialize};

/// A single portfolio project as returned by the remote catalog.
///
/// `start_date` and `end_date` are opaque strings; this layer never parses
/// them. `id` uniqueness is assumed upstream, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Normalized at the deserialization boundary: the remote source has been
    /// observed to return ids both as JSON numbers and as strings.
    #[serde(deserialize_with = "deserialize_project_id")]
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub clients: String,
    pub start_date: String,
    pub end_date: String,
    /// Photo reference (URI string), not dereferenced by this layer.
    pub photo: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Category display names this project is tagged with. Matched
    /// case-sensitively against the registry by the filter.
    #[serde(default)]
    pub category_title: Vec<String>,
    /// Marks the project for the synthetic "Key Highlights" category.
    #[serde(default)]
    pub is_key_highlight: bool,
}

fn deserialize_project_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(i64),
        Text(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(n) => Ok(n),
        IdRepr::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid project id: {:?}", s))),
    }
}
