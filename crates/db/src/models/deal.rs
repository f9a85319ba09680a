use rect_core::deal::Deal;
use rect_core::localization::Translations;
use rect_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `deals` table.
#[derive(Debug, Clone, FromRow)]
pub struct DealRow {
    pub id: String,
    pub tool_slug: String,
    pub title: String,
    pub description: String,
    pub translations: Json<Translations>,
    pub code: Option<String>,
    pub url: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub source: String,
    pub discount_percentage: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DealRow> for Deal {
    fn from(row: DealRow) -> Self {
        Deal {
            id: row.id,
            tool_slug: row.tool_slug,
            title: row.title,
            description: row.description,
            translations: row.translations.0,
            code: row.code,
            url: row.url,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            source: row.source,
            discount_percentage: row.discount_percentage,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
