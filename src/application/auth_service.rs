use crate::error::{AppError, Result};
use crate::infrastructure::http::{HttpClient, TokenStore};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const AUTH_ENDPOINT: &str = "/auth";

/// Envelope the auth endpoints wrap their payloads in. `/projects` does NOT
/// use it; the catalog is a bare array.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A successful login: the authenticated user plus the issued token.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    pub token: AuthToken,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Bearer-token auth path. Independent of the catalog flow: the catalog
/// endpoint works with or without a stored token.
pub struct AuthService {
    http: HttpClient,
    tokens: Arc<TokenStore>,
}

impl AuthService {
    pub fn new(http: HttpClient, tokens: Arc<TokenStore>) -> Self {
        Self { http, tokens }
    }

    /// Login with email and password, store the issued tokens, and fetch the
    /// authenticated user.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Session> {
        info!("user login attempt: {}", credentials.email);

        let response: ApiResponse<AuthToken> = self
            .http
            .post_json(&format!("{}/login", AUTH_ENDPOINT), credentials)
            .await?;
        let token = unwrap_envelope(response, "Login failed")?;
        self.tokens
            .set(token.access_token.clone(), token.refresh_token.clone());

        let user = self.current_user().await?;
        info!("user login successful: {}", user.id);
        Ok(Session { user, token })
    }

    /// Register a new user.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User> {
        info!("user registration attempt: {}", payload.email);

        let response: ApiResponse<User> = self
            .http
            .post_json(&format!("{}/register", AUTH_ENDPOINT), payload)
            .await?;
        let user = unwrap_envelope(response, "Registration failed")?;
        info!("user registration successful: {}", user.id);
        Ok(user)
    }

    /// Get the currently authenticated user.
    pub async fn current_user(&self) -> Result<User> {
        let response: ApiResponse<User> = self
            .http
            .get_json(&format!("{}/me", AUTH_ENDPOINT))
            .await?;
        unwrap_envelope(response, "Failed to fetch user")
    }

    /// Exchange the stored refresh token for a fresh pair. A failed refresh
    /// clears the stored tokens.
    pub async fn refresh(&self) -> Result<AuthToken> {
        info!("refreshing authentication token");

        let refresh_token = self
            .tokens
            .refresh_token()
            .ok_or_else(|| AppError::auth("No refresh token available"))?;

        let result: Result<ApiResponse<AuthToken>> = self
            .http
            .post_json(
                &format!("{}/refresh", AUTH_ENDPOINT),
                &RefreshRequest {
                    refresh_token: &refresh_token,
                },
            )
            .await;

        let token = result
            .and_then(|response| unwrap_envelope(response, "Token refresh failed"))
            .map_err(|err| {
                error!("token refresh failed: {}", err);
                self.tokens.clear();
                err
            })?;

        self.tokens
            .set(token.access_token.clone(), token.refresh_token.clone());
        info!("token refreshed");
        Ok(token)
    }

    /// Clear the stored tokens.
    pub fn logout(&self) {
        info!("user logout");
        self.tokens.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }
}

fn unwrap_envelope<T>(response: ApiResponse<T>, context: &str) -> Result<T> {
    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| context.to_string());
        return Err(AppError::auth(message));
    }
    response
        .data
        .ok_or_else(|| AppError::decode(format!("{}: envelope carried no data", context)))
}
