use crate::error::Result;
use crate::infrastructure::http::HttpClient;
use gp_core::Project;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

const PROJECTS_ENDPOINT: &str = "/projects";
const PROJECTS_CACHE_KEY: &str = "projects";

/// Fetches the full project catalog and caches it under a fixed key.
///
/// The first caller issues the network request; callers arriving while that
/// request is in flight queue on the cache lock and observe the resolved
/// value, so a session issues at most one request per key until
/// `invalidate` is called. A failed fetch caches nothing; the catalog stays
/// unresolved until a consumer re-invokes the fetch.
pub struct PortfolioService {
    http: HttpClient,
    cache: Mutex<HashMap<&'static str, Arc<Vec<Project>>>>,
}

impl PortfolioService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get all portfolio projects, from cache when already resolved.
    pub async fn fetch_all_projects(&self) -> Result<Arc<Vec<Project>>> {
        // The lock is held across the request: at most one concurrent fetch.
        let mut cache = self.cache.lock().await;
        if let Some(projects) = cache.get(PROJECTS_CACHE_KEY) {
            debug!("project catalog served from cache");
            return Ok(projects.clone());
        }

        info!("fetching project catalog from {}", PROJECTS_ENDPOINT);
        let projects: Vec<Project> = self
            .http
            .get_json(PROJECTS_ENDPOINT)
            .await
            .map_err(|err| {
                error!("failed to fetch portfolios: {}", err);
                err
            })?;
        info!("project catalog loaded: {} records", projects.len());

        let shared = Arc::new(projects);
        cache.insert(PROJECTS_CACHE_KEY, shared.clone());
        Ok(shared)
    }

    /// Drop the cached catalog; the next fetch hits the network again.
    pub async fn invalidate(&self) {
        self.cache.lock().await.remove(PROJECTS_CACHE_KEY);
        debug!("project catalog cache invalidated");
    }

    /// Projects flagged for the synthetic "Key Highlights" category.
    pub async fn featured_projects(&self) -> Result<Vec<Project>> {
        let projects = self.fetch_all_projects().await?;
        Ok(projects
            .iter()
            .filter(|project| project.is_key_highlight)
            .cloned()
            .collect())
    }

    /// Projects tagged with the given category display name.
    pub async fn projects_by_category(&self, category_name: &str) -> Result<Vec<Project>> {
        let projects = self.fetch_all_projects().await?;
        Ok(projects
            .iter()
            .filter(|project| {
                project
                    .category_title
                    .iter()
                    .any(|tag| tag == category_name)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::error::AppError;
    use crate::infrastructure::http::TokenStore;
    use log::LevelFilter;
    use std::time::Duration;

    fn service_for(server: &mockito::Server) -> PortfolioService {
        let environment = Environment {
            api_url: server.url(),
            request_timeout: Duration::from_secs(5),
            log_level: LevelFilter::Info,
        };
        let http = HttpClient::new(&environment, Arc::new(TokenStore::default())).unwrap();
        PortfolioService::new(http)
    }

    fn catalog_body() -> &'static str {
        r#"[
            {
                "id": 1,
                "title": "Municipal Crop Monitor",
                "subtitle": "Seasonal yield dashboards",
                "description": "Dashboards for seasonal crop yields",
                "clients": "Ministry of Agriculture",
                "start_date": "2021-01-01",
                "end_date": "2021-12-31",
                "photo": "https://cdn.example.com/p/1.jpg",
                "category_title": ["Agriculture"],
                "is_key_highlight": true
            },
            {
                "id": "2",
                "title": "Trail Explorer",
                "subtitle": "Trekking route viewer",
                "description": "Interactive trekking route maps",
                "clients": "Tourism Board",
                "start_date": "2022-02-01",
                "end_date": "2022-10-01",
                "photo": "https://cdn.example.com/p/2.jpg",
                "category_title": ["Tourism"],
                "is_key_highlight": false
            }
        ]"#
    }

    #[tokio::test]
    async fn sequential_fetches_issue_one_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body())
            .expect(1)
            .create_async()
            .await;

        let service = service_for(&server);
        let first = service.fetch_all_projects().await.unwrap();
        let second = service.fetch_all_projects().await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body())
            .expect(1)
            .create_async()
            .await;

        let service = Arc::new(service_for(&server));
        let a = {
            let service = service.clone();
            tokio::spawn(async move { service.fetch_all_projects().await })
        };
        let b = {
            let service = service.clone();
            tokio::spawn(async move { service.fetch_all_projects().await })
        };

        let first = a.await.unwrap().unwrap();
        let second = b.await.unwrap().unwrap();
        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body())
            .expect(2)
            .create_async()
            .await;

        let service = service_for(&server);
        service.fetch_all_projects().await.unwrap();
        service.invalidate().await;
        service.fetch_all_projects().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let failing = server
            .mock("GET", "/projects")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let service = service_for(&server);
        let err = service.fetch_all_projects().await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
        failing.assert_async().await;

        // A later call re-issues the request instead of serving the failure.
        let recovered = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body())
            .expect(1)
            .create_async()
            .await;
        let projects = service.fetch_all_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        recovered.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_catalog_maps_to_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected": "shape"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let err = service.fetch_all_projects().await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn featured_and_category_helpers_derive_from_the_catalog() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body())
            .expect(1)
            .create_async()
            .await;

        let service = service_for(&server);
        let featured = service.featured_projects().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, 1);

        let tourism = service.projects_by_category("Tourism").await.unwrap();
        assert_eq!(tourism.len(), 1);
        // String id in the payload normalized at the boundary.
        assert_eq!(tourism[0].id, 2);
        mock.assert_async().await;
    }
}
