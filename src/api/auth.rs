use crate::api::AppState;
use crate::application::auth_service::{
    AuthToken, LoginCredentials, RegisterPayload, Session, User,
};
use tauri::State;

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    credentials: LoginCredentials,
) -> Result<Session, String> {
    state.auth.login(&credentials).await.map_err(String::from)
}

#[tauri::command]
pub async fn register(
    state: State<'_, AppState>,
    payload: RegisterPayload,
) -> Result<User, String> {
    state.auth.register(&payload).await.map_err(String::from)
}

#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<User, String> {
    state.auth.current_user().await.map_err(String::from)
}

#[tauri::command]
pub async fn refresh_token(state: State<'_, AppState>) -> Result<AuthToken, String> {
    state.auth.refresh().await.map_err(String::from)
}

#[tauri::command]
pub fn logout(state: State<AppState>) {
    state.auth.logout();
}

#[tauri::command]
pub fn is_authenticated(state: State<AppState>) -> bool {
    state.auth.is_authenticated()
}
