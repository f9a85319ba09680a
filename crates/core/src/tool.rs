//! The `Tool` entity and its display helpers.

use serde::{Deserialize, Serialize};

use crate::localization::{localized, Translations};
use crate::pricing::{free_plan, lowest_paid_plan, PricingPlan};
use crate::types::{Locale, Timestamp};

/// Publication state. Listing queries only ever see `Published`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Published,
    Draft,
    Pending,
}

impl ToolStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolStatus::Published => "published",
            ToolStatus::Draft => "draft",
            ToolStatus::Pending => "pending",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "published" => Some(ToolStatus::Published),
            "draft" => Some(ToolStatus::Draft),
            "pending" => Some(ToolStatus::Pending),
            _ => None,
        }
    }
}

/// Editorial ratings, each on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub ease: f64,
    pub value: f64,
    pub features: f64,
    pub docs: f64,
}

impl Score {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;

    pub fn mean(&self) -> f64 {
        (self.ease + self.value + self.features + self.docs) / 4.0
    }

    /// The rating as shown on cards: one decimal place.
    pub fn display(&self) -> String {
        format!("{:.1}", self.mean())
    }

    pub fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("ease", self.ease),
            ("value", self.value),
            ("features", self.features),
            ("docs", self.docs),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// A listed tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub slogan: String,
    pub description: String,
    #[serde(default)]
    pub translations: Translations,
    pub website_url: String,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
    #[serde(default)]
    pub is_open_source: bool,
    #[serde(default)]
    pub has_free_trial: bool,
    #[serde(default)]
    pub supports_secondary_locale: bool,
    /// Category keys; the first one is the primary category.
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub login_methods: Vec<String>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub faq: Vec<Faq>,
    /// Slugs this tool is positioned against. Not checked for existence.
    #[serde(default)]
    pub alt_of: Vec<String>,
    #[serde(default)]
    pub deal_ids: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub status: ToolStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tool {
    pub fn is_published(&self) -> bool {
        self.status == ToolStatus::Published
    }

    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Mean score, or 0 for unrated tools.
    pub fn rating(&self) -> f64 {
        self.score.map(|s| s.mean()).unwrap_or(0.0)
    }

    pub fn display_rating(&self) -> Option<String> {
        self.score.map(|s| s.display())
    }

    pub fn free_plan(&self) -> Option<&PricingPlan> {
        free_plan(&self.pricing)
    }

    pub fn lowest_paid_plan(&self) -> Option<&PricingPlan> {
        lowest_paid_plan(&self.pricing)
    }

    pub fn localized_name(&self, locale: Locale) -> &str {
        localized(&self.translations, "name", &self.name, locale)
    }

    pub fn localized_slogan(&self, locale: Locale) -> &str {
        localized(&self.translations, "slogan", &self.slogan, locale)
    }

    pub fn localized_description(&self, locale: Locale) -> &str {
        localized(&self.translations, "description", &self.description, locale)
    }
}

/// Short price label for a tool card.
pub fn price_label(tool: &Tool, locale: Locale) -> String {
    let pick = |en: &str, zh: &str| {
        if locale == Locale::Zh {
            zh.to_string()
        } else {
            en.to_string()
        }
    };

    match (tool.free_plan(), tool.lowest_paid_plan()) {
        (Some(_), Some(_)) => pick("Free trial", "免费试用"),
        (Some(_), None) => pick("Free", "免费"),
        (None, Some(paid)) => paid.price.clone(),
        (None, None) => pick("Contact", "询价"),
    }
}

/// Locale-resolved fields a page needs to render a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDisplay {
    pub locale: Locale,
    pub name: String,
    pub slogan: String,
    pub description: String,
    pub rating: Option<String>,
    pub price_label: String,
    pub lowest_paid_price: Option<String>,
}

impl ToolDisplay {
    pub fn new(tool: &Tool, locale: Locale) -> Self {
        Self {
            locale,
            name: tool.localized_name(locale).to_string(),
            slogan: tool.localized_slogan(locale).to_string(),
            description: tool.localized_description(locale).to_string(),
            rating: tool.display_rating(),
            price_label: price_label(tool, locale),
            lowest_paid_price: tool.lowest_paid_plan().map(|p| p.price.clone()),
        }
    }
}
