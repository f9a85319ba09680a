#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use rect_core::alternative::{Alternative, ComparisonPair};
use rect_core::dataset::Dataset;
use rect_core::deal::Deal;
use rect_core::error::{CoreError, CoreResult};
use rect_core::search::{GlobalSearchResult, SearchResult};
use rect_core::submission::{NewSubmission, Submission};
use rect_core::taxonomy::{Category, Tag};
use rect_core::tool::Tool;
use rect_core::types::Timestamp;
use rect_core::{Catalog, DataSource, LocalCatalog, ToolFilter};
use tower::ServiceExt;

use rect_api::config::ServerConfig;
use rect_api::router::build_app_router;
use rect_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        use_fallback_data: true,
        database_url: None,
        fallback_data_dir: None,
        backend_timeout_secs: 10,
        db_max_connections: 1,
        run_migrations: false,
        site_base_url: "https://rect.one".to_string(),
    }
}

/// Full application router over `catalog`, with the production middleware
/// stack.
pub fn build_test_app_with(catalog: Arc<dyn Catalog>) -> Router {
    let config = test_config();
    let state = AppState {
        catalog,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Full application router over the embedded seed in local mode.
pub fn build_test_app() -> Router {
    let dataset = Dataset::embedded().expect("embedded seed is valid");
    build_test_app_with(Arc::new(LocalCatalog::new(dataset)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Slugs of the tools in a JSON array.
pub fn slugs(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|t| t["slug"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Failing catalog
// ---------------------------------------------------------------------------

/// A remote-flavoured catalog whose every call fails with a fixed error.
pub struct FailingCatalog {
    timeout: bool,
}

impl FailingCatalog {
    pub fn unavailable() -> Arc<dyn Catalog> {
        Arc::new(Self { timeout: false })
    }

    pub fn timing_out() -> Arc<dyn Catalog> {
        Arc::new(Self { timeout: true })
    }

    fn fail<T>(&self) -> CoreResult<T> {
        if self.timeout {
            Err(CoreError::BackendTimeout { secs: 10 })
        } else {
            Err(CoreError::BackendUnavailable("connection refused".into()))
        }
    }
}

#[async_trait]
impl Catalog for FailingCatalog {
    fn source(&self) -> DataSource {
        DataSource::Remote
    }
    async fn ping(&self) -> CoreResult<()> {
        self.fail()
    }
    async fn query_tools(&self, _: &ToolFilter) -> CoreResult<SearchResult<Tool>> {
        self.fail()
    }
    async fn tool_by_slug(&self, _: &str) -> CoreResult<Option<Tool>> {
        self.fail()
    }
    async fn featured_tools(&self, _: i64) -> CoreResult<Vec<Tool>> {
        self.fail()
    }
    async fn trending_tools(&self, _: i64) -> CoreResult<Vec<Tool>> {
        self.fail()
    }
    async fn latest_tools(&self, _: i64) -> CoreResult<Vec<Tool>> {
        self.fail()
    }
    async fn categories(&self) -> CoreResult<Vec<Category>> {
        self.fail()
    }
    async fn category_by_slug(&self, _: &str) -> CoreResult<Option<Category>> {
        self.fail()
    }
    async fn tags(&self) -> CoreResult<Vec<Tag>> {
        self.fail()
    }
    async fn tag_by_slug(&self, _: &str) -> CoreResult<Option<Tag>> {
        self.fail()
    }
    async fn active_deals(&self, _: Timestamp) -> CoreResult<Vec<Deal>> {
        self.fail()
    }
    async fn deals_for_tool(&self, _: &str, _: Timestamp) -> CoreResult<Vec<Deal>> {
        self.fail()
    }
    async fn alternatives(&self) -> CoreResult<Vec<Alternative>> {
        self.fail()
    }
    async fn alternative_by_brand(&self, _: &str) -> CoreResult<Option<Alternative>> {
        self.fail()
    }
    async fn comparisons(&self) -> CoreResult<Vec<ComparisonPair>> {
        self.fail()
    }
    async fn comparison(&self, _: &str, _: &str) -> CoreResult<Option<ComparisonPair>> {
        self.fail()
    }
    async fn global_search(&self, _: &str) -> CoreResult<GlobalSearchResult> {
        self.fail()
    }
    async fn submit(&self, _: NewSubmission) -> CoreResult<Submission> {
        self.fail()
    }
    async fn snapshot(&self) -> CoreResult<Dataset> {
        self.fail()
    }
}
