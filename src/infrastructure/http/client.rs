use crate::config::Environment;
use crate::error::{AppError, Result};
use crate::infrastructure::http::token::TokenStore;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Thin wrapper over `reqwest::Client`: base-URL joining, bearer-token
/// injection, and the Network/Decode error mapping.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl HttpClient {
    pub fn new(environment: &Environment, tokens: Arc<TokenStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(environment.request_timeout)
            .build()
            .map_err(|e| AppError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: environment.api_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// `GET <base>/<path>`, decoding a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let mut request = self.client.get(&url);
        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// `POST <base>/<path>` with a JSON body, decoding a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
