//! Repository for the `tools` table.
//!
//! [`ToolRepo::search`] pushes every step of the listing pipeline into
//! SQL: the filter predicate, the sort order (with `position` as the final
//! tie-break), and offset pagination.
//!
//! Case folding happens in PostgreSQL (`ILIKE`, `lower()`), so results match
//! the in-memory engine's `to_lowercase` only for ASCII letters. Caseless
//! scripts such as CJK compare byte for byte on both sides; accented Latin
//! names may fold differently under a `C` database locale.

use rect_core::filter::{SortKey, ToolFilter};
use rect_core::search::{contains_pattern, PageWindow};
use rect_core::tool::Tool;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::tool::ToolRow;

/// Column list for `tools` queries.
const TOOL_COLUMNS: &str = "\
    id, slug, name, slogan, description, translations, \
    website_url, docs_url, logo_url, pricing, \
    is_open_source, has_free_trial, supports_secondary_locale, \
    categories, tags, platforms, integrations, login_methods, \
    score_ease, score_value, score_features, score_docs, \
    pros, cons, faq, alt_of, deal_ids, is_featured, status, \
    created_at, updated_at";

/// Listing predicate. Binds, in order: text pattern, category, tags,
/// platforms, open source, secondary locale, free trial.
const FILTER_CLAUSE: &str = "\
    status = 'published' \
    AND ($1::text IS NULL \
         OR name ILIKE $1 \
         OR slogan ILIKE $1 \
         OR EXISTS (SELECT 1 FROM unnest(tags) AS t(label) WHERE t.label ILIKE $1) \
         OR EXISTS (SELECT 1 FROM unnest(categories) AS c(key) WHERE c.key ILIKE $1)) \
    AND ($2::text IS NULL OR $2 = ANY(categories)) \
    AND (cardinality($3::text[]) = 0 OR tags && $3::text[]) \
    AND (cardinality($4::text[]) = 0 OR platforms && $4::text[]) \
    AND ($5::boolean IS NULL OR is_open_source = $5) \
    AND ($6::boolean IS NULL OR supports_secondary_locale = $6) \
    AND ($7::boolean IS NULL OR has_free_trial = $7)";

/// `ORDER BY` body for a sort key.
fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Newest => "created_at DESC, position ASC",
        SortKey::Updated | SortKey::Trending => "updated_at DESC, position ASC",
        SortKey::Name => "lower(name) COLLATE \"C\" ASC, name COLLATE \"C\" ASC, position ASC",
        SortKey::Rating => "rating DESC, position ASC",
    }
}

/// Owned bind values for [`FILTER_CLAUSE`].
struct FilterBinds {
    pattern: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    platforms: Vec<String>,
    is_open_source: Option<bool>,
    supports_secondary_locale: Option<bool>,
    has_free_trial: Option<bool>,
}

impl From<&ToolFilter> for FilterBinds {
    fn from(filter: &ToolFilter) -> Self {
        Self {
            pattern: filter.text().map(contains_pattern),
            category: filter.category_key().map(str::to_string),
            tags: filter.tags.clone(),
            platforms: filter.platforms.clone(),
            is_open_source: filter.is_open_source,
            supports_secondary_locale: filter.supports_secondary_locale,
            has_free_trial: filter.has_free_trial,
        }
    }
}

/// Provides queries over the tool directory.
pub struct ToolRepo;

impl ToolRepo {
    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// One page of published tools matching `filter`, plus the total match
    /// count before pagination.
    pub async fn search(
        pool: &PgPool,
        filter: &ToolFilter,
        window: PageWindow,
    ) -> Result<(Vec<ToolRow>, i64), sqlx::Error> {
        let binds = FilterBinds::from(filter);

        let count_query = format!("SELECT COUNT(*) FROM tools WHERE {FILTER_CLAUSE}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(binds.pattern.as_deref())
            .bind(binds.category.as_deref())
            .bind(&binds.tags)
            .bind(&binds.platforms)
            .bind(binds.is_open_source)
            .bind(binds.supports_secondary_locale)
            .bind(binds.has_free_trial)
            .fetch_one(pool)
            .await?;

        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let page_query = format!(
            "SELECT {TOOL_COLUMNS} FROM tools WHERE {FILTER_CLAUSE} \
             ORDER BY {order} LIMIT $8 OFFSET $9",
            order = order_clause(filter.sort),
        );
        let rows = sqlx::query_as::<_, ToolRow>(&page_query)
            .bind(binds.pattern.as_deref())
            .bind(binds.category.as_deref())
            .bind(&binds.tags)
            .bind(&binds.platforms)
            .bind(binds.is_open_source)
            .bind(binds.supports_secondary_locale)
            .bind(binds.has_free_trial)
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await?;

        Ok((rows, total))
    }

    /// Top published tools by `sort`, optionally restricted to featured ones.
    pub async fn list_top(
        pool: &PgPool,
        featured_only: bool,
        sort: SortKey,
        limit: i64,
    ) -> Result<Vec<ToolRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TOOL_COLUMNS} FROM tools \
             WHERE status = 'published' AND ($1 = FALSE OR is_featured) \
             ORDER BY {order} LIMIT $2",
            order = order_clause(sort),
        );
        sqlx::query_as::<_, ToolRow>(&query)
            .bind(featured_only)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Every published tool in insertion order.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<ToolRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TOOL_COLUMNS} FROM tools WHERE status = 'published' ORDER BY position"
        );
        sqlx::query_as::<_, ToolRow>(&query).fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Find a published tool by slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ToolRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TOOL_COLUMNS} FROM tools WHERE slug = $1 AND status = 'published'"
        );
        sqlx::query_as::<_, ToolRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Import
    // -----------------------------------------------------------------------

    /// Insert or update a tool by id. New rows take the next `position`;
    /// existing rows keep theirs.
    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tool: &Tool,
    ) -> Result<(), sqlx::Error> {
        let score = tool.score;
        sqlx::query(
            "INSERT INTO tools (\
                id, slug, name, slogan, description, translations, \
                website_url, docs_url, logo_url, pricing, \
                is_open_source, has_free_trial, supports_secondary_locale, \
                categories, tags, platforms, integrations, login_methods, \
                score_ease, score_value, score_features, score_docs, \
                pros, cons, faq, alt_of, deal_ids, is_featured, status, \
                created_at, updated_at\
             ) VALUES (\
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31\
             ) \
             ON CONFLICT (id) DO UPDATE SET \
                slug = EXCLUDED.slug, name = EXCLUDED.name, slogan = EXCLUDED.slogan, \
                description = EXCLUDED.description, translations = EXCLUDED.translations, \
                website_url = EXCLUDED.website_url, docs_url = EXCLUDED.docs_url, \
                logo_url = EXCLUDED.logo_url, pricing = EXCLUDED.pricing, \
                is_open_source = EXCLUDED.is_open_source, \
                has_free_trial = EXCLUDED.has_free_trial, \
                supports_secondary_locale = EXCLUDED.supports_secondary_locale, \
                categories = EXCLUDED.categories, tags = EXCLUDED.tags, \
                platforms = EXCLUDED.platforms, integrations = EXCLUDED.integrations, \
                login_methods = EXCLUDED.login_methods, \
                score_ease = EXCLUDED.score_ease, score_value = EXCLUDED.score_value, \
                score_features = EXCLUDED.score_features, score_docs = EXCLUDED.score_docs, \
                pros = EXCLUDED.pros, cons = EXCLUDED.cons, faq = EXCLUDED.faq, \
                alt_of = EXCLUDED.alt_of, deal_ids = EXCLUDED.deal_ids, \
                is_featured = EXCLUDED.is_featured, status = EXCLUDED.status, \
                created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        )
        .bind(&tool.id)
        .bind(&tool.slug)
        .bind(&tool.name)
        .bind(&tool.slogan)
        .bind(&tool.description)
        .bind(Json(&tool.translations))
        .bind(&tool.website_url)
        .bind(tool.docs_url.as_deref())
        .bind(tool.logo_url.as_deref())
        .bind(Json(&tool.pricing))
        .bind(tool.is_open_source)
        .bind(tool.has_free_trial)
        .bind(tool.supports_secondary_locale)
        .bind(&tool.categories)
        .bind(&tool.tags)
        .bind(&tool.platforms)
        .bind(&tool.integrations)
        .bind(&tool.login_methods)
        .bind(score.map(|s| s.ease))
        .bind(score.map(|s| s.value))
        .bind(score.map(|s| s.features))
        .bind(score.map(|s| s.docs))
        .bind(&tool.pros)
        .bind(&tool.cons)
        .bind(Json(&tool.faq))
        .bind(&tool.alt_of)
        .bind(&tool.deal_ids)
        .bind(tool.is_featured)
        .bind(tool.status.as_str())
        .bind(tool.created_at)
        .bind(tool.updated_at)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
