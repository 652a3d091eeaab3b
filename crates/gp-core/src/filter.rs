use crate::category::{resolve_name, Category, KEY_HIGHLIGHTS_ID};
use crate::project::Project;

/// Derive the filtered catalog view for a selected category.
///
/// - The synthetic highlight id selects projects flagged `is_key_highlight`.
/// - Any other id is resolved to its display name and matched against each
///   project's `category_title` tags (case-sensitive exact match).
/// - An id with no registry entry yields an empty view, not an error.
///
/// Catalog order is preserved; inputs are never mutated. O(n) per call, which
/// is fine for a catalog of tens to low hundreds of records recomputed on
/// selection change only.
pub fn filter_projects(
    projects: &[Project],
    categories: &[Category],
    selected_id: u32,
) -> Vec<Project> {
    if selected_id == KEY_HIGHLIGHTS_ID {
        return projects
            .iter()
            .filter(|project| project.is_key_highlight)
            .cloned()
            .collect();
    }

    let Some(name) = resolve_name(categories, selected_id) else {
        return Vec::new();
    };

    projects
        .iter()
        .filter(|project| project.category_title.iter().any(|tag| tag == name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::registry;

    fn project(id: i64, highlight: bool, tags: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            subtitle: String::new(),
            description: String::new(),
            clients: String::new(),
            start_date: "2021-01-01".to_string(),
            end_date: "2021-12-31".to_string(),
            photo: String::new(),
            technologies: Vec::new(),
            category_title: tags.iter().map(|tag| tag.to_string()).collect(),
            is_key_highlight: highlight,
        }
    }

    fn ids(projects: &[Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn highlight_id_selects_flagged_projects_in_catalog_order() {
        let catalog = vec![
            project(3, true, &["Tourism"]),
            project(1, false, &["Tourism"]),
            project(2, true, &[]),
        ];

        let filtered = filter_projects(&catalog, registry(), KEY_HIGHLIGHTS_ID);
        assert_eq!(ids(&filtered), vec![3, 2]);
    }

    #[test]
    fn known_category_matches_tags_exactly() {
        let catalog = vec![
            project(1, false, &["Agriculture", "Tourism"]),
            project(2, false, &["agriculture"]), // case-sensitive: no match
            project(3, false, &[]),
            project(4, true, &["Agriculture"]),
        ];

        let filtered = filter_projects(&catalog, registry(), 2);
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn unknown_id_yields_empty_view() {
        let catalog = vec![project(1, true, &["Agriculture"])];
        let filtered = filter_projects(&catalog, registry(), 999);
        assert!(filtered.is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let catalog = vec![
            project(1, true, &["Agriculture"]),
            project(2, false, &["Tourism"]),
        ];
        let snapshot = catalog.clone();

        let _ = filter_projects(&catalog, registry(), 2);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = vec![
            project(1, true, &["Agriculture"]),
            project(2, false, &["Tourism"]),
            project(3, false, &["Agriculture"]),
        ];

        let first = filter_projects(&catalog, registry(), 2);
        let second = filter_projects(&catalog, registry(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_scenario() {
        let catalog = vec![
            project(1, true, &["Agriculture"]),
            project(2, false, &["Tourism"]),
        ];
        let categories = vec![
            Category::new(0, "Key Highlights"),
            Category::new(2, "Agriculture"),
            Category::new(10, "Tourism"),
        ];

        assert_eq!(ids(&filter_projects(&catalog, &categories, 0)), vec![1]);
        assert_eq!(ids(&filter_projects(&catalog, &categories, 10)), vec![2]);
        assert!(filter_projects(&catalog, &categories, 999).is_empty());
    }
}
