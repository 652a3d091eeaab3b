//! Tauri command surface.
//!
//! Commands return `Result<T, String>`; `AppError` is stringified at this
//! boundary and the webview renders the retry affordance.

pub mod auth;
pub mod portfolio;
pub mod user_form;

use crate::application::{AuthService, PortfolioService};
use gp_core::SelectionState;
use std::sync::RwLock;

/// State managed by the Tauri runtime and injected into commands.
///
/// The selection lock has a single logical writer (the user-interaction
/// command) and many readers; no await happens while it is held.
pub struct AppState {
    pub portfolio: PortfolioService,
    pub auth: AuthService,
    pub selection: RwLock<SelectionState>,
}

impl AppState {
    pub fn new(portfolio: PortfolioService, auth: AuthService) -> Self {
        Self {
            portfolio,
            auth,
            selection: RwLock::new(SelectionState::default()),
        }
    }
}
