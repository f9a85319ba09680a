//! Pagination and result-shape helpers shared by both catalog backends.
//!
//! This module lives in `core` (no I/O) so the in-memory engine, the
//! PostgreSQL adapter, and the HTTP layer all agree on defaults and on the
//! `SearchResult` contract.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, Tag};
use crate::tool::Tool;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of tools per listing page.
pub const DEFAULT_PAGE_LIMIT: i64 = 24;

/// Maximum number of tools per listing page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Default size of the featured / trending / latest strips.
pub const DEFAULT_HIGHLIGHT_LIMIT: i64 = 6;

/// Default number of related tools on a detail page.
pub const DEFAULT_RELATED_LIMIT: i64 = 6;

/// Default number of tools on a platform page.
pub const DEFAULT_PLATFORM_LIMIT: i64 = 12;

/// Default number of recommended tools.
pub const DEFAULT_RECOMMENDED_LIMIT: i64 = 6;

// ---------------------------------------------------------------------------
// Global search limits
// ---------------------------------------------------------------------------

pub const GLOBAL_SEARCH_TOOL_LIMIT: i64 = 10;
pub const GLOBAL_SEARCH_CATEGORY_LIMIT: i64 = 5;
pub const GLOBAL_SEARCH_TAG_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Result shapes
// ---------------------------------------------------------------------------

/// One page of a filtered listing.
///
/// `total` counts every match before pagination; `has_more` is exactly
/// `total > page * limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

impl<T> SearchResult<T> {
    pub fn new(data: Vec<T>, total: i64, window: PageWindow) -> Self {
        Self {
            data,
            total,
            page: window.page,
            limit: window.limit,
            has_more: total > window.page.saturating_mul(window.limit),
        }
    }

    pub fn empty(window: PageWindow) -> Self {
        Self::new(Vec::new(), 0, window)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U> {
        SearchResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            has_more: self.has_more,
        }
    }
}

/// Combined result of the site-wide search box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalSearchResult {
    pub tools: Vec<Tool>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// A normalized 1-based page and its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Normalize caller input. Non-positive values fall back to the defaults
    /// instead of failing; oversized limits are clamped.
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p,
            _ => 1,
        };
        let limit = match limit {
            Some(l) if l > 0 => l.min(MAX_PAGE_LIMIT),
            _ => DEFAULT_PAGE_LIMIT,
        };
        Self { page, limit }
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Slice a fully filtered and sorted collection to this page.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(0);
        items.iter().skip(start).take(take).cloned().collect()
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(max),
        _ => default,
    }
}

/// Escape `%`, `_` and `\` so user text matches literally inside `ILIKE`.
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `%text%` with the text escaped for `ILIKE`.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like_pattern(input))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- PageWindow ----------------------------------------------------------

    #[test]
    fn window_defaults_when_unset() {
        assert_eq!(
            PageWindow::normalize(None, None),
            PageWindow { page: 1, limit: 24 }
        );
    }

    #[test]
    fn window_normalizes_non_positive_values() {
        assert_eq!(
            PageWindow::normalize(Some(0), Some(-5)),
            PageWindow { page: 1, limit: 24 }
        );
        assert_eq!(
            PageWindow::normalize(Some(-3), Some(0)),
            PageWindow { page: 1, limit: 24 }
        );
    }

    #[test]
    fn window_clamps_large_limit() {
        assert_eq!(PageWindow::normalize(Some(2), Some(1000)).limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn window_slices_second_page() {
        let items: Vec<i32> = (0..30).collect();
        let window = PageWindow::normalize(Some(2), Some(24));
        assert_eq!(window.offset(), 24);
        assert_eq!(window.slice(&items), (24..30).collect::<Vec<_>>());
    }

    #[test]
    fn window_past_end_is_empty() {
        let items: Vec<i32> = (0..5).collect();
        assert!(PageWindow::normalize(Some(9), Some(24)).slice(&items).is_empty());
    }

    // -- SearchResult --------------------------------------------------------

    #[test]
    fn has_more_follows_total() {
        let window = PageWindow { page: 1, limit: 24 };
        assert!(SearchResult::new(vec![0; 24], 30, window).has_more);
        let window = PageWindow { page: 2, limit: 24 };
        assert!(!SearchResult::new(vec![0; 6], 30, window).has_more);
        let window = PageWindow { page: 1, limit: 24 };
        assert!(!SearchResult::new(vec![0; 24], 24, window).has_more);
    }

    #[test]
    fn has_more_is_false_for_huge_pages() {
        let items: Vec<i32> = (0..5).collect();
        for page in [i64::MAX / 2, i64::MAX] {
            let window = PageWindow::normalize(Some(page), Some(24));
            let r = SearchResult::new(window.slice(&items), 5, window);
            assert_eq!(r.page, page);
            assert!(r.data.is_empty());
            assert!(!r.has_more);
        }
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let r: SearchResult<i32> = SearchResult::empty(PageWindow::normalize(None, None));
        assert_eq!(r.total, 0);
        assert!(r.data.is_empty());
        assert!(!r.has_more);
    }

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_for_invalid() {
        assert_eq!(clamp_limit(None, 6, 50), 6);
        assert_eq!(clamp_limit(Some(0), 6, 50), 6);
        assert_eq!(clamp_limit(Some(-1), 6, 50), 6);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 6, 50), 50);
        assert_eq!(clamp_limit(Some(12), 6, 50), 12);
    }

    // -- LIKE escaping -------------------------------------------------------

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like_pattern("100%_off\\"), "100\\%\\_off\\\\");
        assert_eq!(contains_pattern("ai"), "%ai%");
    }
}
