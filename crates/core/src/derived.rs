//! Views composed from [`Catalog::query_tools`].
//!
//! None of these hold state; they only shape a [`ToolFilter`] and trim the
//! result, so they behave identically over either data source.

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::filter::{SortKey, ToolFilter};
use crate::search::{
    clamp_limit, DEFAULT_PLATFORM_LIMIT, DEFAULT_RECOMMENDED_LIMIT, DEFAULT_RELATED_LIMIT,
    MAX_PAGE_LIMIT,
};
use crate::tool::Tool;

/// Tools sharing `tool`'s primary category (or first tag when it has no
/// category), never including `tool` itself.
pub async fn related_tools(
    catalog: &dyn Catalog,
    tool: &Tool,
    limit: Option<i64>,
) -> CoreResult<Vec<Tool>> {
    let limit = clamp_limit(limit, DEFAULT_RELATED_LIMIT, MAX_PAGE_LIMIT - 1);

    // One extra row covers the tool itself showing up in its own category.
    let mut filter = ToolFilter::new().with_limit(limit + 1);
    if let Some(category) = tool.primary_category() {
        filter = filter.with_category(category);
    } else if let Some(tag) = tool.tags.first() {
        filter = filter.with_tags([tag.as_str()]);
    }

    let result = catalog.query_tools(&filter).await?;
    Ok(result
        .data
        .into_iter()
        .filter(|t| t.slug != tool.slug)
        .take(limit as usize)
        .collect())
}

/// Published tools available on `platform`.
pub async fn tools_by_platform(
    catalog: &dyn Catalog,
    platform: &str,
    limit: Option<i64>,
) -> CoreResult<Vec<Tool>> {
    let limit = clamp_limit(limit, DEFAULT_PLATFORM_LIMIT, MAX_PAGE_LIMIT);
    let filter = ToolFilter::new()
        .with_platforms([platform])
        .with_limit(limit);
    Ok(catalog.query_tools(&filter).await?.data)
}

/// Best-rated tools matching `filter`. Sort, page and limit are overridden.
pub async fn recommended_tools(
    catalog: &dyn Catalog,
    filter: ToolFilter,
    limit: Option<i64>,
) -> CoreResult<Vec<Tool>> {
    let limit = clamp_limit(limit, DEFAULT_RECOMMENDED_LIMIT, MAX_PAGE_LIMIT);
    let filter = ToolFilter {
        sort: SortKey::Rating,
        page: None,
        limit: Some(limit),
        ..filter
    };
    Ok(catalog.query_tools(&filter).await?.data)
}
