//! Row models for `alternatives` and `comparison_pairs`.

use rect_core::alternative::{Alternative, AlternativeItem, ComparisonPair, Verdict};
use rect_core::localization::Translations;
use rect_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AlternativeRow {
    pub id: String,
    pub brand: String,
    pub description: Option<String>,
    pub translations: Json<Translations>,
    pub items: Json<Vec<AlternativeItem>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AlternativeRow> for Alternative {
    fn from(row: AlternativeRow) -> Self {
        Alternative {
            id: row.id,
            brand: row.brand,
            description: row.description,
            translations: row.translations.0,
            items: row.items.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ComparisonRow {
    pub id: String,
    pub a_slug: String,
    pub b_slug: String,
    pub matrix: serde_json::Value,
    pub summary: Option<String>,
    pub translations: Json<Translations>,
    pub verdict: Json<Verdict>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ComparisonRow> for ComparisonPair {
    fn from(row: ComparisonRow) -> Self {
        ComparisonPair {
            id: row.id,
            a_slug: row.a_slug,
            b_slug: row.b_slug,
            matrix: row.matrix,
            summary: row.summary,
            translations: row.translations.0,
            verdict: row.verdict.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
