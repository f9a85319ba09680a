//! PostgreSQL-backed [`Catalog`].
//!
//! Every read runs under a deadline. A query that fails surfaces as
//! [`CoreError::BackendUnavailable`]; one that outlives the deadline
//! surfaces as [`CoreError::BackendTimeout`]. Neither falls back to the
//! local dataset.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use rect_core::alternative::{Alternative, ComparisonPair};
use rect_core::catalog::{Catalog, DataSource};
use rect_core::dataset::Dataset;
use rect_core::deal::Deal;
use rect_core::error::{CoreError, CoreResult};
use rect_core::filter::{SortKey, ToolFilter};
use rect_core::search::{
    clamp_limit, contains_pattern, GlobalSearchResult, SearchResult, DEFAULT_HIGHLIGHT_LIMIT,
    GLOBAL_SEARCH_CATEGORY_LIMIT, GLOBAL_SEARCH_TAG_LIMIT, GLOBAL_SEARCH_TOOL_LIMIT,
    MAX_PAGE_LIMIT,
};
use rect_core::submission::{NewSubmission, Submission};
use rect_core::taxonomy::{Category, Tag};
use rect_core::tool::Tool;
use rect_core::types::Timestamp;

use crate::repositories::{
    AlternativeRepo, CategoryRepo, ComparisonRepo, DealRepo, SubmissionRepo, TagRepo, ToolRepo,
};
use crate::DbPool;

/// Default per-query deadline when `BACKEND_TIMEOUT_SECS` is not set.
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of rows written by [`PgCatalog::import_dataset`], per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub tools: usize,
    pub categories: usize,
    pub tags: usize,
    pub deals: usize,
    pub alternatives: usize,
    pub comparisons: usize,
}

/// Remote catalog over a connection pool.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: DbPool,
    timeout: Duration,
}

impl PgCatalog {
    pub fn new(pool: DbPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run `query` under the configured deadline and map its failure modes.
    async fn guarded<T, F>(&self, operation: &'static str, query: F) -> CoreResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(error = %e, operation, "Catalog query failed");
                Err(CoreError::BackendUnavailable(e.to_string()))
            }
            Err(_) => {
                let secs = self.timeout.as_secs();
                tracing::error!(operation, timeout_secs = secs, "Catalog query timed out");
                Err(CoreError::BackendTimeout { secs })
            }
        }
    }

    async fn top_tools(
        &self,
        operation: &'static str,
        featured_only: bool,
        sort: SortKey,
        limit: i64,
    ) -> CoreResult<Vec<Tool>> {
        let limit = clamp_limit(Some(limit), DEFAULT_HIGHLIGHT_LIMIT, MAX_PAGE_LIMIT);
        let rows = self
            .guarded(
                operation,
                ToolRepo::list_top(&self.pool, featured_only, sort, limit),
            )
            .await?;
        Ok(rows.into_iter().map(Tool::from).collect())
    }

    // -----------------------------------------------------------------------
    // Import
    // -----------------------------------------------------------------------

    /// Upsert a whole dataset in one transaction, in file order, so that
    /// `position` reproduces the dataset's insertion order on a fresh
    /// database.
    pub async fn import_dataset(&self, dataset: &Dataset) -> CoreResult<ImportSummary> {
        dataset.validate()?;

        let mut tx = self.pool.begin().await.map_err(unavailable)?;
        for tool in &dataset.tools {
            ToolRepo::upsert(&mut tx, tool).await.map_err(unavailable)?;
        }
        for category in &dataset.categories {
            CategoryRepo::upsert(&mut tx, category)
                .await
                .map_err(unavailable)?;
        }
        for tag in &dataset.tags {
            TagRepo::upsert(&mut tx, tag).await.map_err(unavailable)?;
        }
        for deal in &dataset.deals {
            DealRepo::upsert(&mut tx, deal).await.map_err(unavailable)?;
        }
        for alternative in &dataset.alternatives {
            AlternativeRepo::upsert(&mut tx, alternative)
                .await
                .map_err(unavailable)?;
        }
        for pair in &dataset.comparisons {
            ComparisonRepo::upsert(&mut tx, pair)
                .await
                .map_err(unavailable)?;
        }
        tx.commit().await.map_err(unavailable)?;

        let summary = ImportSummary {
            tools: dataset.tools.len(),
            categories: dataset.categories.len(),
            tags: dataset.tags.len(),
            deals: dataset.deals.len(),
            alternatives: dataset.alternatives.len(),
            comparisons: dataset.comparisons.len(),
        };
        tracing::info!(?summary, "Dataset imported");
        Ok(summary)
    }
}

fn unavailable(e: sqlx::Error) -> CoreError {
    tracing::error!(error = %e, "Catalog write failed");
    CoreError::BackendUnavailable(e.to_string())
}

#[async_trait]
impl Catalog for PgCatalog {
    fn source(&self) -> DataSource {
        DataSource::Remote
    }

    async fn ping(&self) -> CoreResult<()> {
        self.guarded("ping", crate::health_check(&self.pool)).await
    }

    async fn query_tools(&self, filter: &ToolFilter) -> CoreResult<SearchResult<Tool>> {
        let window = filter.window();
        let (rows, total) = self
            .guarded("query_tools", ToolRepo::search(&self.pool, filter, window))
            .await?;
        let tools = rows.into_iter().map(Tool::from).collect();
        Ok(SearchResult::new(tools, total, window))
    }

    async fn tool_by_slug(&self, slug: &str) -> CoreResult<Option<Tool>> {
        let row = self
            .guarded(
                "tool_by_slug",
                ToolRepo::find_published_by_slug(&self.pool, slug),
            )
            .await?;
        Ok(row.map(Tool::from))
    }

    async fn featured_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        self.top_tools("featured_tools", true, SortKey::Updated, limit)
            .await
    }

    async fn trending_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        self.top_tools("trending_tools", false, SortKey::Trending, limit)
            .await
    }

    async fn latest_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        self.top_tools("latest_tools", false, SortKey::Newest, limit)
            .await
    }

    async fn categories(&self) -> CoreResult<Vec<Category>> {
        let rows = self
            .guarded("categories", CategoryRepo::list(&self.pool))
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn category_by_slug(&self, slug: &str) -> CoreResult<Option<Category>> {
        let row = self
            .guarded(
                "category_by_slug",
                CategoryRepo::find_by_slug(&self.pool, slug),
            )
            .await?;
        Ok(row.map(Category::from))
    }

    async fn tags(&self) -> CoreResult<Vec<Tag>> {
        let rows = self.guarded("tags", TagRepo::list(&self.pool)).await?;
        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn tag_by_slug(&self, slug: &str) -> CoreResult<Option<Tag>> {
        let row = self
            .guarded("tag_by_slug", TagRepo::find_by_slug(&self.pool, slug))
            .await?;
        Ok(row.map(Tag::from))
    }

    async fn active_deals(&self, now: Timestamp) -> CoreResult<Vec<Deal>> {
        let rows = self
            .guarded("active_deals", DealRepo::list_live(&self.pool, now, None))
            .await?;
        Ok(rows.into_iter().map(Deal::from).collect())
    }

    async fn deals_for_tool(&self, tool_slug: &str, now: Timestamp) -> CoreResult<Vec<Deal>> {
        let rows = self
            .guarded(
                "deals_for_tool",
                DealRepo::list_live(&self.pool, now, Some(tool_slug)),
            )
            .await?;
        Ok(rows.into_iter().map(Deal::from).collect())
    }

    async fn alternatives(&self) -> CoreResult<Vec<Alternative>> {
        let rows = self
            .guarded("alternatives", AlternativeRepo::list(&self.pool))
            .await?;
        Ok(rows.into_iter().map(Alternative::from).collect())
    }

    async fn alternative_by_brand(&self, brand: &str) -> CoreResult<Option<Alternative>> {
        let row = self
            .guarded(
                "alternative_by_brand",
                AlternativeRepo::find_by_brand(&self.pool, brand),
            )
            .await?;
        Ok(row.map(Alternative::from))
    }

    async fn comparisons(&self) -> CoreResult<Vec<ComparisonPair>> {
        let rows = self
            .guarded("comparisons", ComparisonRepo::list(&self.pool))
            .await?;
        Ok(rows.into_iter().map(ComparisonPair::from).collect())
    }

    async fn comparison(&self, a: &str, b: &str) -> CoreResult<Option<ComparisonPair>> {
        let row = self
            .guarded("comparison", ComparisonRepo::find_pair(&self.pool, a, b))
            .await?;
        Ok(row.map(ComparisonPair::from))
    }

    async fn global_search(&self, text: &str) -> CoreResult<GlobalSearchResult> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(GlobalSearchResult::default());
        }

        let filter = ToolFilter::new()
            .with_query(text)
            .with_limit(GLOBAL_SEARCH_TOOL_LIMIT);
        let pattern = contains_pattern(text);

        let ((tools, _), categories, tags) = self
            .guarded("global_search", async {
                tokio::try_join!(
                    ToolRepo::search(&self.pool, &filter, filter.window()),
                    CategoryRepo::search(&self.pool, &pattern, GLOBAL_SEARCH_CATEGORY_LIMIT),
                    TagRepo::search(&self.pool, &pattern, GLOBAL_SEARCH_TAG_LIMIT),
                )
            })
            .await?;

        Ok(GlobalSearchResult {
            tools: tools.into_iter().map(Tool::from).collect(),
            categories: categories.into_iter().map(Category::from).collect(),
            tags: tags.into_iter().map(Tag::from).collect(),
        })
    }

    async fn submit(&self, submission: NewSubmission) -> CoreResult<Submission> {
        submission.check()?;
        let row = self
            .guarded("submit", SubmissionRepo::create(&self.pool, &submission))
            .await?;
        tracing::info!(submission_id = %row.id, name = %row.name, "Tool submission queued");
        Ok(Submission::from(row))
    }

    async fn snapshot(&self) -> CoreResult<Dataset> {
        let (tools, categories, tags, deals, alternatives, comparisons) = self
            .guarded("snapshot", async {
                tokio::try_join!(
                    ToolRepo::list_published(&self.pool),
                    CategoryRepo::list(&self.pool),
                    TagRepo::list(&self.pool),
                    DealRepo::list_all(&self.pool),
                    AlternativeRepo::list_all(&self.pool),
                    ComparisonRepo::list_all(&self.pool),
                )
            })
            .await?;

        Ok(Dataset {
            tools: tools.into_iter().map(Tool::from).collect(),
            categories: categories.into_iter().map(Category::from).collect(),
            tags: tags.into_iter().map(Tag::from).collect(),
            deals: deals.into_iter().map(Deal::from).collect(),
            alternatives: alternatives.into_iter().map(Alternative::from).collect(),
            comparisons: comparisons.into_iter().map(ComparisonPair::from).collect(),
        })
    }
}
