//! GeoPortfolio desktop backend.
//!
//! Fetches the remote project catalog once per session, caches it, and serves
//! category-filtered views, the auth path, and user-form validation to the
//! webview through Tauri commands.

pub mod api;
pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;

pub use config::Environment;
pub use error::{AppError, Result};

use application::{AuthService, PortfolioService};
use infrastructure::http::{HttpClient, TokenStore};
use log::info;
use std::sync::Arc;

pub fn run() {
    let environment = Environment::load();

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(environment.log_level)
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            use tauri::Manager;

            info!("portfolio API base URL: {}", environment.api_url);

            let tokens = Arc::new(TokenStore::default());
            let http = HttpClient::new(&environment, tokens.clone())?;
            app.manage(api::AppState::new(
                PortfolioService::new(http.clone()),
                AuthService::new(http, tokens),
            ));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::portfolio::get_categories,
            api::portfolio::get_selected_category,
            api::portfolio::select_category,
            api::portfolio::get_filtered_projects,
            api::portfolio::refresh_projects,
            api::auth::login,
            api::auth::register,
            api::auth::current_user,
            api::auth::refresh_token,
            api::auth::logout,
            api::auth::is_authenticated,
            api::user_form::submit_user_form,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
