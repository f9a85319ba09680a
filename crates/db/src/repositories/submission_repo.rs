//! Repository for the `pending_submissions` table.

use rect_core::submission::NewSubmission;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::submission::SubmissionRow;

/// Column list for `pending_submissions` queries.
const SUBMISSION_COLUMNS: &str = "\
    id, name, website_url, slogan, description, category, tags, platforms, \
    pricing_type, has_free_trial, is_open_source, supports_secondary_locale, \
    logo_url, contact_email, additional_notes, status, created_at";

pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Queue a submission for review. Status starts as `pending`.
    pub async fn create(pool: &PgPool, input: &NewSubmission) -> Result<SubmissionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pending_submissions (\
                name, website_url, slogan, description, category, tags, platforms, \
                pricing_type, has_free_trial, is_open_source, supports_secondary_locale, \
                logo_url, contact_email, additional_notes\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {SUBMISSION_COLUMNS}"
        );
        sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(input.name.trim())
            .bind(input.website_url.trim())
            .bind(input.slogan.trim())
            .bind(input.description.as_deref())
            .bind(input.category.as_deref())
            .bind(&input.tags)
            .bind(&input.platforms)
            .bind(input.pricing_type.as_deref())
            .bind(input.has_free_trial)
            .bind(input.is_open_source)
            .bind(input.supports_secondary_locale)
            .bind(input.logo_url.as_deref())
            .bind(input.contact_email.as_deref())
            .bind(input.additional_notes.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SubmissionRow>, sqlx::Error> {
        let query = format!("SELECT {SUBMISSION_COLUMNS} FROM pending_submissions WHERE id = $1");
        sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pending_submissions")
            .fetch_one(pool)
            .await
    }
}
