//! Row model for the `tools` table.

use rect_core::localization::Translations;
use rect_core::pricing::PricingPlan;
use rect_core::tool::{Faq, Score, Tool, ToolStatus};
use rect_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `tools` table.
#[derive(Debug, Clone, FromRow)]
pub struct ToolRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub slogan: String,
    pub description: String,
    pub translations: Json<Translations>,
    pub website_url: String,
    pub docs_url: Option<String>,
    pub logo_url: Option<String>,
    pub pricing: Json<Vec<PricingPlan>>,
    pub is_open_source: bool,
    pub has_free_trial: bool,
    pub supports_secondary_locale: bool,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub platforms: Vec<String>,
    pub integrations: Vec<String>,
    pub login_methods: Vec<String>,
    pub score_ease: Option<f64>,
    pub score_value: Option<f64>,
    pub score_features: Option<f64>,
    pub score_docs: Option<f64>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub faq: Json<Vec<Faq>>,
    pub alt_of: Vec<String>,
    pub deal_ids: Vec<String>,
    pub is_featured: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ToolRow {
    fn score(&self) -> Option<Score> {
        Some(Score {
            ease: self.score_ease?,
            value: self.score_value?,
            features: self.score_features?,
            docs: self.score_docs?,
        })
    }
}

impl From<ToolRow> for Tool {
    fn from(row: ToolRow) -> Self {
        let score = row.score();
        Tool {
            id: row.id,
            slug: row.slug,
            name: row.name,
            slogan: row.slogan,
            description: row.description,
            translations: row.translations.0,
            website_url: row.website_url,
            docs_url: row.docs_url,
            logo_url: row.logo_url,
            pricing: row.pricing.0,
            is_open_source: row.is_open_source,
            has_free_trial: row.has_free_trial,
            supports_secondary_locale: row.supports_secondary_locale,
            categories: row.categories,
            tags: row.tags,
            platforms: row.platforms,
            integrations: row.integrations,
            login_methods: row.login_methods,
            score,
            pros: row.pros,
            cons: row.cons,
            faq: row.faq.0,
            alt_of: row.alt_of,
            deal_ids: row.deal_ids,
            is_featured: row.is_featured,
            // The CHECK constraint limits status to known values.
            status: ToolStatus::from_db(&row.status).unwrap_or(ToolStatus::Draft),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
