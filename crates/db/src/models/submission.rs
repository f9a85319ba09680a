use rect_core::submission::{NewSubmission, Submission, SubmissionStatus};
use rect_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `pending_submissions` table.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionRow {
    pub id: Uuid,
    pub name: String,
    pub website_url: String,
    pub slogan: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub platforms: Vec<String>,
    pub pricing_type: Option<String>,
    pub has_free_trial: bool,
    pub is_open_source: bool,
    pub supports_secondary_locale: bool,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub additional_notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<SubmissionRow> for Submission {
    fn from(row: SubmissionRow) -> Self {
        Submission {
            id: row.id,
            payload: NewSubmission {
                name: row.name,
                website_url: row.website_url,
                slogan: row.slogan,
                description: row.description,
                category: row.category,
                tags: row.tags,
                platforms: row.platforms,
                pricing_type: row.pricing_type,
                has_free_trial: row.has_free_trial,
                is_open_source: row.is_open_source,
                supports_secondary_locale: row.supports_secondary_locale,
                logo_url: row.logo_url,
                contact_email: row.contact_email,
                additional_notes: row.additional_notes,
            },
            status: SubmissionStatus::from_db(&row.status).unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
