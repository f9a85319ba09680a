//! Row models for `categories` and `tags`.
//!
//! Neither table stores a count; queries compute `count` from published
//! tools and alias it onto the row.

use rect_core::localization::Translations;
use rect_core::taxonomy::{Category, Tag};
use rect_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub translations: Json<Translations>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            translations: row.translations.0,
            icon: row.icon,
            color: row.color,
            count: row.count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TagRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub translations: Json<Translations>,
    pub count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            slug: row.slug,
            name: row.name,
            translations: row.translations.0,
            count: row.count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
