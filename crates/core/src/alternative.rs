//! "Alternatives to <brand>" pages and head-to-head comparisons.

use serde::{Deserialize, Serialize};

use crate::localization::{localized, localized_opt, Translations};
use crate::taxonomy::slugify;
use crate::types::{Locale, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeItem {
    pub tool_slug: String,
    pub reason: String,
}

/// A brand with an ordered list of recommended substitutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub brand: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub translations: Translations,
    pub items: Vec<AlternativeItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Alternative {
    /// Brand lookups ignore case: "claude" and "Claude" are the same page.
    pub fn matches_brand(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.trim().to_lowercase()
    }

    /// Path segment used by the alternatives page, e.g. `chatgpt-alternatives`.
    pub fn page_slug(&self) -> String {
        format!("{}-alternatives", slugify(&self.brand))
    }

    pub fn localized_brand(&self, locale: Locale) -> &str {
        localized(&self.translations, "brand", &self.brand, locale)
    }

    pub fn localized_description(&self, locale: Locale) -> Option<&str> {
        localized_opt(
            &self.translations,
            "description",
            self.description.as_deref(),
            locale,
        )
    }
}

/// Per-audience recommendation on a comparison page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub beginner: String,
    pub team: String,
    pub enterprise: String,
}

/// An unordered pair of tools compared side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPair {
    pub id: String,
    pub a_slug: String,
    pub b_slug: String,
    /// Free-form comparison facts (price, features, platforms, strengths...).
    #[serde(default)]
    pub matrix: serde_json::Value,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub translations: Translations,
    pub verdict: Verdict,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ComparisonPair {
    /// True for `(a, b)` in either order.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.a_slug == a && self.b_slug == b) || (self.a_slug == b && self.b_slug == a)
    }

    /// Path segment used by the comparison page, e.g. `chatgpt-vs-claude`.
    pub fn page_slug(&self) -> String {
        format!("{}-vs-{}", self.a_slug, self.b_slug)
    }

    pub fn localized_summary(&self, locale: Locale) -> Option<&str> {
        localized_opt(&self.translations, "summary", self.summary.as_deref(), locale)
    }
}
