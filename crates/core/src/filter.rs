//! Tool listing filter and sort keys.
//!
//! A [`ToolFilter`] is the single query input both catalog backends accept.
//! [`ToolFilter::matches`] is the reference predicate; the SQL adapter
//! reproduces it clause by clause.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::search::PageWindow;
use crate::tool::Tool;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Listing order. Unknown or missing keys mean `Trending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently updated first. There is no usage signal behind it.
    #[default]
    Trending,
    Newest,
    Updated,
    Rating,
    Name,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Trending => "trending",
            SortKey::Newest => "newest",
            SortKey::Updated => "updated",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    /// Parse a sort key, falling back to `Trending` for anything unknown.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => SortKey::Newest,
            "updated" => SortKey::Updated,
            "rating" => SortKey::Rating,
            "name" => SortKey::Name,
            _ => SortKey::Trending,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_lossy(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Query input for tool listings. Every field is optional; unset means
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolFilter {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// OR-matched against `Tool::tags`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// OR-matched against `Tool::platforms`.
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub is_open_source: Option<bool>,
    #[serde(default)]
    pub supports_secondary_locale: Option<bool>,
    #[serde(default)]
    pub has_free_trial: Option<bool>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ToolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::normalize(self.page, self.limit)
    }

    /// Free-text query, trimmed. Blank text is treated as unset.
    pub fn text(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }

    /// Category key, trimmed. Blank is treated as unset.
    pub fn category_key(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    /// True when `tool` is visible and satisfies every constraint.
    pub fn matches(&self, tool: &Tool) -> bool {
        if !tool.is_published() {
            return false;
        }
        if let Some(text) = self.text() {
            if !matches_text(tool, &text.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category_key() {
            if !tool.categories.iter().any(|c| c == category) {
                return false;
            }
        }
        if !self.tags.is_empty() && !overlaps(&tool.tags, &self.tags) {
            return false;
        }
        if !self.platforms.is_empty() && !overlaps(&tool.platforms, &self.platforms) {
            return false;
        }
        flag_matches(self.is_open_source, tool.is_open_source)
            && flag_matches(self.supports_secondary_locale, tool.supports_secondary_locale)
            && flag_matches(self.has_free_trial, tool.has_free_trial)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring match on name, slogan, tags and category keys.
/// `needle` must already be lowercased.
pub fn matches_text(tool: &Tool, needle: &str) -> bool {
    let hit = |haystack: &str| haystack.to_lowercase().contains(needle);
    hit(&tool.name)
        || hit(&tool.slogan)
        || tool.tags.iter().any(|t| hit(t))
        || tool.categories.iter().any(|c| hit(c))
}

fn overlaps(have: &[String], wanted: &[String]) -> bool {
    wanted.iter().any(|w| have.contains(w))
}

fn flag_matches(wanted: Option<bool>, actual: bool) -> bool {
    wanted.map_or(true, |w| w == actual)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ToolBuilder;
    use crate::tool::ToolStatus;

    // -- SortKey -------------------------------------------------------------

    #[test]
    fn unknown_sort_falls_back_to_trending() {
        assert_eq!(SortKey::from_str_lossy("popularity"), SortKey::Trending);
        assert_eq!(SortKey::from_str_lossy(""), SortKey::Trending);
        assert_eq!(SortKey::from_str_lossy(" Rating "), SortKey::Rating);
    }

    #[test]
    fn sort_deserializes_leniently() {
        let f: ToolFilter = serde_json::from_str(r#"{"sort":"bogus"}"#).unwrap();
        assert_eq!(f.sort, SortKey::Trending);
        let f: ToolFilter = serde_json::from_str(r#"{"sort":"name"}"#).unwrap();
        assert_eq!(f.sort, SortKey::Name);
    }

    // -- matches -------------------------------------------------------------

    #[test]
    fn drafts_never_match() {
        let tool = ToolBuilder::new("a").status(ToolStatus::Draft).build();
        assert!(!ToolFilter::new().matches(&tool));
    }

    #[test]
    fn text_matches_name_slogan_tags_and_categories() {
        let tool = ToolBuilder::new("cursor")
            .name("Cursor")
            .slogan("The AI code editor")
            .tags(&["ide"])
            .categories(&["coding"])
            .build();
        for q in ["CURSOR", "code editor", "ID", "cod"] {
            assert!(ToolFilter::new().with_query(q).matches(&tool), "query {q}");
        }
        assert!(!ToolFilter::new().with_query("spreadsheet").matches(&tool));
    }

    #[test]
    fn blank_query_is_ignored() {
        let tool = ToolBuilder::new("a").build();
        assert!(ToolFilter::new().with_query("   ").matches(&tool));
    }

    #[test]
    fn tags_and_platforms_are_or_matched() {
        let tool = ToolBuilder::new("a")
            .tags(&["chatbot"])
            .platforms(&["web"])
            .build();
        assert!(ToolFilter::new().with_tags(["writing", "chatbot"]).matches(&tool));
        assert!(!ToolFilter::new().with_tags(["writing"]).matches(&tool));
        assert!(ToolFilter::new().with_platforms(["ios", "web"]).matches(&tool));
        assert!(!ToolFilter::new().with_platforms(["ios"]).matches(&tool));
    }

    #[test]
    fn boolean_flags_are_tri_state() {
        let open = ToolBuilder::new("a").open_source(true).build();
        let closed = ToolBuilder::new("b").build();
        let mut f = ToolFilter::new();
        assert!(f.matches(&open) && f.matches(&closed));
        f.is_open_source = Some(true);
        assert!(f.matches(&open) && !f.matches(&closed));
        f.is_open_source = Some(false);
        assert!(!f.matches(&open) && f.matches(&closed));
    }

    #[test]
    fn category_must_be_listed() {
        let tool = ToolBuilder::new("a").categories(&["writing", "chat"]).build();
        assert!(ToolFilter::new().with_category("chat").matches(&tool));
        assert!(!ToolFilter::new().with_category("dev").matches(&tool));
    }
}
