//! Repositories for `alternatives` and `comparison_pairs`.

use rect_core::alternative::{Alternative, ComparisonPair};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::alternative::{AlternativeRow, ComparisonRow};

/// Column list for `alternatives` queries.
const ALTERNATIVE_COLUMNS: &str = "\
    id, brand, description, translations, items, created_at, updated_at";

/// Column list for `comparison_pairs` queries.
const COMPARISON_COLUMNS: &str = "\
    id, a_slug, b_slug, matrix, summary, translations, verdict, created_at, updated_at";

pub struct AlternativeRepo;

impl AlternativeRepo {
    /// Newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AlternativeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ALTERNATIVE_COLUMNS} FROM alternatives ORDER BY created_at DESC, position ASC"
        );
        sqlx::query_as::<_, AlternativeRow>(&query).fetch_all(pool).await
    }

    /// Insertion order, as stored.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AlternativeRow>, sqlx::Error> {
        let query = format!("SELECT {ALTERNATIVE_COLUMNS} FROM alternatives ORDER BY position");
        sqlx::query_as::<_, AlternativeRow>(&query).fetch_all(pool).await
    }

    /// Case-insensitive brand match. The first inserted row wins on duplicates.
    pub async fn find_by_brand(
        pool: &PgPool,
        brand: &str,
    ) -> Result<Option<AlternativeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ALTERNATIVE_COLUMNS} FROM alternatives \
             WHERE lower(brand) = lower($1) \
             ORDER BY position ASC LIMIT 1"
        );
        sqlx::query_as::<_, AlternativeRow>(&query)
            .bind(brand.trim())
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        alternative: &Alternative,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO alternatives \
                (id, brand, description, translations, items, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                brand = EXCLUDED.brand, description = EXCLUDED.description, \
                translations = EXCLUDED.translations, items = EXCLUDED.items, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&alternative.id)
        .bind(&alternative.brand)
        .bind(alternative.description.as_deref())
        .bind(Json(&alternative.translations))
        .bind(Json(&alternative.items))
        .bind(alternative.created_at)
        .bind(alternative.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

pub struct ComparisonRepo;

impl ComparisonRepo {
    /// Newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ComparisonRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPARISON_COLUMNS} FROM comparison_pairs \
             ORDER BY created_at DESC, position ASC"
        );
        sqlx::query_as::<_, ComparisonRow>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<ComparisonRow>, sqlx::Error> {
        let query = format!("SELECT {COMPARISON_COLUMNS} FROM comparison_pairs ORDER BY position");
        sqlx::query_as::<_, ComparisonRow>(&query).fetch_all(pool).await
    }

    /// The pair for `a` and `b` stored in either order.
    pub async fn find_pair(
        pool: &PgPool,
        a: &str,
        b: &str,
    ) -> Result<Option<ComparisonRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPARISON_COLUMNS} FROM comparison_pairs \
             WHERE (a_slug = $1 AND b_slug = $2) OR (a_slug = $2 AND b_slug = $1) \
             ORDER BY position ASC LIMIT 1"
        );
        sqlx::query_as::<_, ComparisonRow>(&query)
            .bind(a)
            .bind(b)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        pair: &ComparisonPair,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO comparison_pairs \
                (id, a_slug, b_slug, matrix, summary, translations, verdict, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                a_slug = EXCLUDED.a_slug, b_slug = EXCLUDED.b_slug, \
                matrix = EXCLUDED.matrix, summary = EXCLUDED.summary, \
                translations = EXCLUDED.translations, verdict = EXCLUDED.verdict, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&pair.id)
        .bind(&pair.a_slug)
        .bind(&pair.b_slug)
        .bind(&pair.matrix)
        .bind(pair.summary.as_deref())
        .bind(Json(&pair.translations))
        .bind(Json(&pair.verdict))
        .bind(pair.created_at)
        .bind(pair.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
