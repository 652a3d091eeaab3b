use crate::api::AppState;
use gp_core::category::{registry, resolve_name, Category, KEY_HIGHLIGHTS_ID};
use gp_core::{filter_projects, Project};
use log::warn;
use tauri::State;

/// The fixed category registry, in display order.
#[tauri::command]
pub fn get_categories() -> Vec<Category> {
    registry().to_vec()
}

/// Currently selected category id.
#[tauri::command]
pub fn get_selected_category(state: State<AppState>) -> Result<u32, String> {
    let selection = state
        .selection
        .read()
        .map_err(|_| "selection state poisoned".to_string())?;
    Ok(selection.selected())
}

/// Store the selected category id unconditionally; unknown ids degrade to an
/// empty filtered view rather than an error.
#[tauri::command]
pub fn select_category(state: State<AppState>, category_id: u32) -> Result<(), String> {
    let mut selection = state
        .selection
        .write()
        .map_err(|_| "selection state poisoned".to_string())?;
    selection.select(category_id);
    Ok(())
}

/// The catalog filtered by the current selection. Awaits the (cached) fetch
/// first, so the filter never sees a partially-loaded catalog.
#[tauri::command]
pub async fn get_filtered_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    let projects = state
        .portfolio
        .fetch_all_projects()
        .await
        .map_err(String::from)?;

    let selected = {
        let selection = state
            .selection
            .read()
            .map_err(|_| "selection state poisoned".to_string())?;
        selection.selected()
    };

    if selected != KEY_HIGHLIGHTS_ID && resolve_name(registry(), selected).is_none() {
        warn!("selected category id {} is not in the registry", selected);
    }

    Ok(filter_projects(&projects, registry(), selected))
}

/// Invalidate the cached catalog and refetch it, returning the refreshed
/// filtered view.
#[tauri::command]
pub async fn refresh_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    state.portfolio.invalidate().await;
    get_filtered_projects(state).await
}
