//! Repositories for `categories` and `tags`.
//!
//! Counts are computed per query from published tools, never stored.
//! Listings order by that count (descending) and then by `position`.

use rect_core::taxonomy::{Category, Tag};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::taxonomy::{CategoryRow, TagRow};

/// Category columns plus the live published-tool count.
const CATEGORY_SELECT: &str = "\
    SELECT c.id, c.slug, c.name, c.description, c.translations, c.icon, c.color, \
           (SELECT COUNT(*) FROM tools t \
             WHERE t.status = 'published' AND c.slug = ANY(t.categories)) AS count, \
           c.created_at, c.updated_at \
    FROM categories c";

/// Tag columns plus the live published-tool count.
const TAG_SELECT: &str = "\
    SELECT g.id, g.slug, g.name, g.translations, \
           (SELECT COUNT(*) FROM tools t \
             WHERE t.status = 'published' AND g.slug = ANY(t.tags)) AS count, \
           g.created_at, g.updated_at \
    FROM tags g";

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("{CATEGORY_SELECT} ORDER BY count DESC, c.position ASC");
        sqlx::query_as::<_, CategoryRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("{CATEGORY_SELECT} WHERE c.slug = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Categories whose name or description contains `pattern` (an `ILIKE`
    /// pattern), largest first.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!(
            "{CATEGORY_SELECT} \
             WHERE c.name ILIKE $1 OR c.description ILIKE $1 \
             ORDER BY count DESC, c.position ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        category: &Category,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO categories \
                (id, slug, name, description, translations, icon, color, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                slug = EXCLUDED.slug, name = EXCLUDED.name, \
                description = EXCLUDED.description, translations = EXCLUDED.translations, \
                icon = EXCLUDED.icon, color = EXCLUDED.color, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&category.id)
        .bind(&category.slug)
        .bind(&category.name)
        .bind(category.description.as_deref())
        .bind(Json(&category.translations))
        .bind(category.icon.as_deref())
        .bind(category.color.as_deref())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

pub struct TagRepo;

impl TagRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<TagRow>, sqlx::Error> {
        let query = format!("{TAG_SELECT} ORDER BY count DESC, g.position ASC");
        sqlx::query_as::<_, TagRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!("{TAG_SELECT} WHERE g.slug = $1");
        sqlx::query_as::<_, TagRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Tags whose name contains `pattern`, largest first.
    pub async fn search(pool: &PgPool, pattern: &str, limit: i64) -> Result<Vec<TagRow>, sqlx::Error> {
        let query = format!(
            "{TAG_SELECT} WHERE g.name ILIKE $1 ORDER BY count DESC, g.position ASC LIMIT $2"
        );
        sqlx::query_as::<_, TagRow>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tag: &Tag,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tags (id, slug, name, translations, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                slug = EXCLUDED.slug, name = EXCLUDED.name, \
                translations = EXCLUDED.translations, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&tag.id)
        .bind(&tag.slug)
        .bind(&tag.name)
        .bind(Json(&tag.translations))
        .bind(tag.created_at)
        .bind(tag.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
