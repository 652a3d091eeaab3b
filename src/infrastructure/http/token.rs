use std::sync::RwLock;

/// In-memory bearer-token store shared between the HTTP client and the auth
/// service. Nothing is persisted; tokens die with the process.
#[derive(Debug, Default)]
pub struct TokenStore {
    access: RwLock<Option<String>>,
    refresh: RwLock<Option<String>>,
}

impl TokenStore {
    pub fn set(&self, access: String, refresh: String) {
        *self.access.write().unwrap_or_else(|e| e.into_inner()) = Some(access);
        *self.refresh.write().unwrap_or_else(|e| e.into_inner()) = Some(refresh);
    }

    pub fn clear(&self) {
        *self.access.write().unwrap_or_else(|e| e.into_inner()) = None;
        *self.refresh.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.refresh
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}
