//! Repository for the `deals` table.

use rect_core::deal::Deal;
use rect_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::deal::DealRow;

/// Column list for `deals` queries.
const DEAL_COLUMNS: &str = "\
    id, tool_slug, title, description, translations, code, url, \
    starts_at, ends_at, source, discount_percentage, is_active, \
    created_at, updated_at";

pub struct DealRepo;

impl DealRepo {
    /// Deals live at `now`, optionally for a single tool. Soonest expiry
    /// first, never-expiring deals last.
    pub async fn list_live(
        pool: &PgPool,
        now: Timestamp,
        tool_slug: Option<&str>,
    ) -> Result<Vec<DealRow>, sqlx::Error> {
        let query = format!(
            "SELECT {DEAL_COLUMNS} FROM deals \
             WHERE is_active \
               AND (starts_at IS NULL OR starts_at <= $1) \
               AND (ends_at IS NULL OR ends_at > $1) \
               AND ($2::text IS NULL OR tool_slug = $2) \
             ORDER BY ends_at ASC NULLS LAST, position ASC"
        );
        sqlx::query_as::<_, DealRow>(&query)
            .bind(now)
            .bind(tool_slug)
            .fetch_all(pool)
            .await
    }

    /// Every deal in insertion order, live or not.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DealRow>, sqlx::Error> {
        let query = format!("SELECT {DEAL_COLUMNS} FROM deals ORDER BY position");
        sqlx::query_as::<_, DealRow>(&query).fetch_all(pool).await
    }

    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        deal: &Deal,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO deals (\
                id, tool_slug, title, description, translations, code, url, \
                starts_at, ends_at, source, discount_percentage, is_active, \
                created_at, updated_at\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             ON CONFLICT (id) DO UPDATE SET \
                tool_slug = EXCLUDED.tool_slug, title = EXCLUDED.title, \
                description = EXCLUDED.description, translations = EXCLUDED.translations, \
                code = EXCLUDED.code, url = EXCLUDED.url, \
                starts_at = EXCLUDED.starts_at, ends_at = EXCLUDED.ends_at, \
                source = EXCLUDED.source, discount_percentage = EXCLUDED.discount_percentage, \
                is_active = EXCLUDED.is_active, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&deal.id)
        .bind(&deal.tool_slug)
        .bind(&deal.title)
        .bind(&deal.description)
        .bind(Json(&deal.translations))
        .bind(deal.code.as_deref())
        .bind(&deal.url)
        .bind(deal.starts_at)
        .bind(deal.ends_at)
        .bind(&deal.source)
        .bind(deal.discount_percentage)
        .bind(deal.is_active)
        .bind(deal.created_at)
        .bind(deal.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
