//! Categories and tags.
//!
//! Both carry a `count` of published tools referencing them. Stored counts
//! are never trusted: [`recount_categories`] and [`recount_tags`] derive
//! them from the tool collection at read time.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::localization::{localized, localized_opt, Translations};
use crate::tool::Tool;
use crate::types::{Locale, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Also the key tools list in `categories`.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    pub fn localized_name(&self, locale: Locale) -> &str {
        localized(&self.translations, "name", &self.name, locale)
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    /// Also the key tools list in `tags`.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tag {
    pub fn localized_name(&self, locale: Locale) -> &str {
        localized(&self.translations, "name", &self.name, locale)
    }
}

/// Normalize a free-form label into a slug: lowercase, whitespace runs to `-`.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn published_key_counts<'a, F>(tools: &'a [Tool], keys: F) -> HashMap<&'a str, i64>
where
    F: Fn(&'a Tool) -> &'a [String],
{
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for tool in tools.iter().filter(|t| t.is_published()) {
        let distinct: HashSet<&str> = keys(tool).iter().map(String::as_str).collect();
        for key in distinct {
            *counts.entry(key).or_default() += 1;
        }
    }
    counts
}

/// Replace every category's `count` with the number of published tools
/// listing it (a tool repeating a key counts once), then order by count descending (stable on ties).
pub fn recount_categories(categories: &mut [Category], tools: &[Tool]) {
    let counts = published_key_counts(tools, |t| t.categories.as_slice());
    for category in categories.iter_mut() {
        category.count = counts.get(category.slug.as_str()).copied().unwrap_or(0);
    }
    categories.sort_by_key(|c| Reverse(c.count));
}

/// Same as [`recount_categories`] over tool tags.
pub fn recount_tags(tags: &mut [Tag], tools: &[Tool]) {
    let counts = published_key_counts(tools, |t| t.tags.as_slice());
    for tag in tags.iter_mut() {
        tag.count = counts.get(tag.slug.as_str()).copied().unwrap_or(0);
    }
    tags.sort_by_key(|t| Reverse(t.count));
}

/// Build a tag list from the labels used by tools, in first-seen order.
pub fn derive_tags(tools: &[Tool], created_at: Timestamp) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for label in tools.iter().flat_map(|t| t.tags.iter()) {
        let slug = slugify(label);
        if tags.iter().any(|t| t.slug == slug) {
            continue;
        }
        tags.push(Tag {
            id: format!("tag-{}", tags.len()),
            slug,
            name: label.clone(),
            translations: Translations::new(),
            count: 0,
            created_at,
            updated_at: created_at,
        });
    }
    recount_tags(&mut tags, tools);
    tags
}
