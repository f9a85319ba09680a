//! Query-string parameter types for API handlers.
//!
//! Numbers and flags arrive as raw strings so that malformed values can be
//! reported as `INVALID_FILTER` instead of a generic extractor rejection.

use rect_core::error::CoreError;
use rect_core::filter::{SortKey, ToolFilter};
use rect_core::types::Locale;
use serde::Deserialize;

/// Parameters of the tool listing (`GET /tools`, `GET /tools/recommended`).
///
/// `tags` and `platforms` are comma-separated.
#[derive(Debug, Default, Deserialize)]
pub struct ToolListParams {
    #[serde(alias = "query")]
    pub q: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub platforms: Option<String>,
    pub is_open_source: Option<String>,
    pub supports_secondary_locale: Option<String>,
    pub has_free_trial: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ToolListParams {
    pub fn into_filter(self) -> Result<ToolFilter, CoreError> {
        Ok(ToolFilter {
            query: self.q,
            category: self.category,
            tags: split_list(self.tags.as_deref()),
            platforms: split_list(self.platforms.as_deref()),
            is_open_source: parse_flag("is_open_source", self.is_open_source.as_deref())?,
            supports_secondary_locale: parse_flag(
                "supports_secondary_locale",
                self.supports_secondary_locale.as_deref(),
            )?,
            has_free_trial: parse_flag("has_free_trial", self.has_free_trial.as_deref())?,
            sort: self
                .sort
                .as_deref()
                .map(SortKey::from_str_lossy)
                .unwrap_or_default(),
            page: parse_int("page", self.page.as_deref())?,
            limit: parse_int("limit", self.limit.as_deref())?,
        })
    }
}

/// `?limit=` for fixed-size lists.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    pub fn limit(&self) -> Result<Option<i64>, CoreError> {
        parse_int("limit", self.limit.as_deref())
    }
}

/// `?lang=` for localized detail pages.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    pub fn locale(&self) -> Locale {
        self.lang
            .as_deref()
            .map(Locale::from_code_lossy)
            .unwrap_or_default()
    }
}

/// `?q=` for the global search box.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_int(name: &str, raw: Option<&str>) -> Result<Option<i64>, CoreError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| CoreError::InvalidFilter(format!("{name} must be an integer, got '{v}'"))),
    }
}

fn parse_flag(name: &str, raw: Option<&str>) -> Result<Option<bool>, CoreError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => crate::config::parse_flag(v)
            .map(Some)
            .ok_or_else(|| CoreError::InvalidFilter(format!("{name} must be true or false, got '{v}'"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn comma_lists_are_split_and_trimmed() {
        let filter = ToolListParams {
            tags: Some("ai-coding, chatbot,,".into()),
            platforms: Some("Web".into()),
            ..ToolListParams::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.tags, vec!["ai-coding", "chatbot"]);
        assert_eq!(filter.platforms, vec!["Web"]);
    }

    #[test]
    fn unknown_sort_falls_back_to_default() {
        let filter = ToolListParams {
            sort: Some("popularity".into()),
            ..ToolListParams::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.sort, SortKey::Trending);
    }

    #[test]
    fn non_numeric_page_is_an_invalid_filter() {
        let result = ToolListParams {
            page: Some("two".into()),
            ..ToolListParams::default()
        }
        .into_filter();
        assert_matches!(result, Err(CoreError::InvalidFilter(_)));
    }

    #[test]
    fn non_positive_numbers_pass_through_for_normalization() {
        let filter = ToolListParams {
            page: Some("0".into()),
            limit: Some("-5".into()),
            ..ToolListParams::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.page, Some(0));
        assert_eq!(filter.window().limit, 24);
    }

    #[test]
    fn bad_flag_is_an_invalid_filter() {
        let result = ToolListParams {
            has_free_trial: Some("sometimes".into()),
            ..ToolListParams::default()
        }
        .into_filter();
        assert_matches!(result, Err(CoreError::InvalidFilter(_)));
    }

    #[test]
    fn lang_resolves_lossily() {
        let params = LangParams {
            lang: Some("zh-CN".into()),
        };
        assert_eq!(params.locale(), Locale::Zh);
        assert_eq!(LangParams::default().locale(), Locale::En);
    }
}
