//! Promotional deals attached (weakly) to tools.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::localization::{localized, Translations};
use crate::types::{Locale, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    /// Weak reference: the tool may no longer exist.
    pub tool_slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub code: Option<String>,
    pub url: String,
    #[serde(default)]
    pub starts_at: Option<Timestamp>,
    /// `None` means the deal never expires.
    #[serde(default)]
    pub ends_at: Option<Timestamp>,
    pub source: String,
    #[serde(default)]
    pub discount_percentage: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Deal {
    /// Live at `now`: flagged active and inside its date window.
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.is_active
            && self.starts_at.map_or(true, |start| start <= now)
            && self.ends_at.map_or(true, |end| end > now)
    }

    pub fn localized_title(&self, locale: Locale) -> &str {
        localized(&self.translations, "title", &self.title, locale)
    }

    pub fn localized_description(&self, locale: Locale) -> &str {
        localized(&self.translations, "description", &self.description, locale)
    }
}

/// Order by expiry, soonest first; never-expiring deals go last.
pub fn cmp_by_expiry(a: &Deal, b: &Deal) -> Ordering {
    match (a.ends_at, b.ends_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
