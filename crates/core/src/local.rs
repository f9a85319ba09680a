//! In-memory catalog over a read-only dataset.
//!
//! [`query`] is the reference filter/sort/paginate pipeline. It never
//! mutates its input and every sort is stable, so ties keep the dataset's
//! insertion order.

use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

use async_trait::async_trait;

use crate::alternative::{Alternative, ComparisonPair};
use crate::catalog::{Catalog, DataSource};
use crate::dataset::Dataset;
use crate::deal::{cmp_by_expiry, Deal};
use crate::error::{CoreError, CoreResult};
use crate::filter::{SortKey, ToolFilter};
use crate::search::{
    clamp_limit, GlobalSearchResult, SearchResult, DEFAULT_HIGHLIGHT_LIMIT,
    GLOBAL_SEARCH_CATEGORY_LIMIT, GLOBAL_SEARCH_TAG_LIMIT, GLOBAL_SEARCH_TOOL_LIMIT,
    MAX_PAGE_LIMIT,
};
use crate::submission::{NewSubmission, Submission};
use crate::taxonomy::{recount_categories, recount_tags, Category, Tag};
use crate::tool::Tool;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Query pipeline
// ---------------------------------------------------------------------------

/// Filter, sort and paginate `tools` according to `filter`.
pub fn query(tools: &[Tool], filter: &ToolFilter) -> SearchResult<Tool> {
    let window = filter.window();
    let mut matched: Vec<&Tool> = tools.iter().filter(|t| filter.matches(t)).collect();
    sort_tools(&mut matched, filter.sort);

    let total = matched.len() as i64;
    let page: Vec<Tool> = window.slice(&matched).into_iter().cloned().collect();
    SearchResult::new(page, total, window)
}

/// Stable sort by `key`.
pub fn sort_tools(tools: &mut [&Tool], key: SortKey) {
    match key {
        SortKey::Newest => tools.sort_by_key(|t| Reverse(t.created_at)),
        SortKey::Updated | SortKey::Trending => tools.sort_by_key(|t| Reverse(t.updated_at)),
        SortKey::Name => tools.sort_by(|a, b| cmp_names(&a.name, &b.name)),
        SortKey::Rating => tools.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
    }
}

/// Case-insensitive first, exact text second.
fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn top_tools<F>(tools: &[Tool], limit: i64, keep: F, key: SortKey) -> Vec<Tool>
where
    F: Fn(&Tool) -> bool,
{
    let limit = clamp_limit(Some(limit), DEFAULT_HIGHLIGHT_LIMIT, MAX_PAGE_LIMIT);
    let mut picked: Vec<&Tool> = tools
        .iter()
        .filter(|t| t.is_published() && keep(t))
        .collect();
    sort_tools(&mut picked, key);
    picked
        .into_iter()
        .take(limit as usize)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// LocalCatalog
// ---------------------------------------------------------------------------

/// Catalog served from an in-process [`Dataset`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    dataset: Arc<Dataset>,
}

impl LocalCatalog {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn counted_categories(&self) -> Vec<Category> {
        let mut categories = self.dataset.categories.clone();
        recount_categories(&mut categories, &self.dataset.tools);
        categories
    }

    fn counted_tags(&self) -> Vec<Tag> {
        let mut tags = self.dataset.tags.clone();
        recount_tags(&mut tags, &self.dataset.tools);
        tags
    }

    fn live_deals(&self, now: Timestamp, tool_slug: Option<&str>) -> Vec<Deal> {
        let mut deals: Vec<Deal> = self
            .dataset
            .deals
            .iter()
            .filter(|d| d.is_live(now))
            .filter(|d| tool_slug.map_or(true, |slug| d.tool_slug == slug))
            .cloned()
            .collect();
        deals.sort_by(cmp_by_expiry);
        deals
    }
}

#[async_trait]
impl Catalog for LocalCatalog {
    fn source(&self) -> DataSource {
        DataSource::Local
    }

    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }

    async fn query_tools(&self, filter: &ToolFilter) -> CoreResult<SearchResult<Tool>> {
        Ok(query(&self.dataset.tools, filter))
    }

    async fn tool_by_slug(&self, slug: &str) -> CoreResult<Option<Tool>> {
        Ok(self
            .dataset
            .tools
            .iter()
            .find(|t| t.slug == slug && t.is_published())
            .cloned())
    }

    async fn featured_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        Ok(top_tools(
            &self.dataset.tools,
            limit,
            |t| t.is_featured,
            SortKey::Updated,
        ))
    }

    async fn trending_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        Ok(top_tools(&self.dataset.tools, limit, |_| true, SortKey::Trending))
    }

    async fn latest_tools(&self, limit: i64) -> CoreResult<Vec<Tool>> {
        Ok(top_tools(&self.dataset.tools, limit, |_| true, SortKey::Newest))
    }

    async fn categories(&self) -> CoreResult<Vec<Category>> {
        Ok(self.counted_categories())
    }

    async fn category_by_slug(&self, slug: &str) -> CoreResult<Option<Category>> {
        Ok(self
            .counted_categories()
            .into_iter()
            .find(|c| c.slug == slug))
    }

    async fn tags(&self) -> CoreResult<Vec<Tag>> {
        Ok(self.counted_tags())
    }

    async fn tag_by_slug(&self, slug: &str) -> CoreResult<Option<Tag>> {
        Ok(self.counted_tags().into_iter().find(|t| t.slug == slug))
    }

    async fn active_deals(&self, now: Timestamp) -> CoreResult<Vec<Deal>> {
        Ok(self.live_deals(now, None))
    }

    async fn deals_for_tool(&self, tool_slug: &str, now: Timestamp) -> CoreResult<Vec<Deal>> {
        Ok(self.live_deals(now, Some(tool_slug)))
    }

    async fn alternatives(&self) -> CoreResult<Vec<Alternative>> {
        let mut alternatives = self.dataset.alternatives.clone();
        alternatives.sort_by_key(|a| Reverse(a.created_at));
        Ok(alternatives)
    }

    async fn alternative_by_brand(&self, brand: &str) -> CoreResult<Option<Alternative>> {
        Ok(self
            .dataset
            .alternatives
            .iter()
            .find(|a| a.matches_brand(brand))
            .cloned())
    }

    async fn comparisons(&self) -> CoreResult<Vec<ComparisonPair>> {
        let mut pairs = self.dataset.comparisons.clone();
        pairs.sort_by_key(|p| Reverse(p.created_at));
        Ok(pairs)
    }

    async fn comparison(&self, a: &str, b: &str) -> CoreResult<Option<ComparisonPair>> {
        Ok(self
            .dataset
            .comparisons
            .iter()
            .find(|p| p.involves_pair(a, b))
            .cloned())
    }

    async fn global_search(&self, text: &str) -> CoreResult<GlobalSearchResult> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(GlobalSearchResult::default());
        }
        let needle = text.to_lowercase();

        let tools = query(
            &self.dataset.tools,
            &ToolFilter::new()
                .with_query(text)
                .with_limit(GLOBAL_SEARCH_TOOL_LIMIT),
        )
        .data;

        let categories = self
            .counted_categories()
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .take(GLOBAL_SEARCH_CATEGORY_LIMIT as usize)
            .collect();

        let tags = self
            .counted_tags()
            .into_iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .take(GLOBAL_SEARCH_TAG_LIMIT as usize)
            .collect();

        Ok(GlobalSearchResult {
            tools,
            categories,
            tags,
        })
    }

    async fn submit(&self, submission: NewSubmission) -> CoreResult<Submission> {
        tracing::warn!(name = %submission.name, "Rejected submission in local data mode");
        Err(CoreError::SubmissionRequiresBackend)
    }

    async fn snapshot(&self) -> CoreResult<Dataset> {
        let mut dataset = (*self.dataset).clone().published();
        recount_categories(&mut dataset.categories, &dataset.tools);
        recount_tags(&mut dataset.tags, &dataset.tools);
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
