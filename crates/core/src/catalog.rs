//! The catalog abstraction both data sources implement.
//!
//! A `Catalog` is chosen once at startup ([`DataSource::Local`] over an
//! in-process dataset, or [`DataSource::Remote`] over PostgreSQL) and then
//! shared as `Arc<dyn Catalog>`. Callers never learn which one served them;
//! both return identical shapes for identical data.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::alternative::{Alternative, ComparisonPair};
use crate::dataset::Dataset;
use crate::deal::Deal;
use crate::error::CoreResult;
use crate::filter::ToolFilter;
use crate::search::{GlobalSearchResult, SearchResult};
use crate::submission::{NewSubmission, Submission};
use crate::taxonomy::{Category, Tag};
use crate::tool::Tool;
use crate::types::Timestamp;

/// Which store backs a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Local,
    Remote,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Local => "local",
            DataSource::Remote => "remote",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the tool directory plus the single mutation, `submit`.
///
/// Single-entity lookups return `Ok(None)` for absence. Errors are reserved
/// for store failures ([`CoreError::BackendUnavailable`],
/// [`CoreError::BackendTimeout`]) and rejected submissions.
///
/// [`CoreError::BackendUnavailable`]: crate::error::CoreError::BackendUnavailable
/// [`CoreError::BackendTimeout`]: crate::error::CoreError::BackendTimeout
#[async_trait]
pub trait Catalog: Send + Sync {
    fn source(&self) -> DataSource;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> CoreResult<()>;

    /// Filter, sort and paginate published tools.
    async fn query_tools(&self, filter: &ToolFilter) -> CoreResult<SearchResult<Tool>>;

    async fn tool_by_slug(&self, slug: &str) -> CoreResult<Option<Tool>>;

    /// Featured tools, most recently updated first.
    async fn featured_tools(&self, limit: i64) -> CoreResult<Vec<Tool>>;

    async fn trending_tools(&self, limit: i64) -> CoreResult<Vec<Tool>>;

    /// Most recently created first.
    async fn latest_tools(&self, limit: i64) -> CoreResult<Vec<Tool>>;

    /// All categories with freshly computed counts, largest first.
    async fn categories(&self) -> CoreResult<Vec<Category>>;

    async fn category_by_slug(&self, slug: &str) -> CoreResult<Option<Category>>;

    async fn tags(&self) -> CoreResult<Vec<Tag>>;

    async fn tag_by_slug(&self, slug: &str) -> CoreResult<Option<Tag>>;

    /// Deals live at `now`, soonest expiry first.
    async fn active_deals(&self, now: Timestamp) -> CoreResult<Vec<Deal>>;

    async fn deals_for_tool(&self, tool_slug: &str, now: Timestamp) -> CoreResult<Vec<Deal>>;

    async fn alternatives(&self) -> CoreResult<Vec<Alternative>>;

    /// Case-insensitive brand lookup.
    async fn alternative_by_brand(&self, brand: &str) -> CoreResult<Option<Alternative>>;

    async fn comparisons(&self) -> CoreResult<Vec<ComparisonPair>>;

    /// The pair for `a` and `b` in either order.
    async fn comparison(&self, a: &str, b: &str) -> CoreResult<Option<ComparisonPair>>;

    async fn global_search(&self, query: &str) -> CoreResult<GlobalSearchResult>;

    /// Queue a tool for review.
    async fn submit(&self, submission: NewSubmission) -> CoreResult<Submission>;

    /// Everything a fallback dataset needs, published tools only.
    async fn snapshot(&self) -> CoreResult<Dataset>;
}
