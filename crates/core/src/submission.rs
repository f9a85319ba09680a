//! Visitor-submitted tools awaiting review.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{CoreError, CoreResult};
use crate::types::Timestamp;

/// Payload of the "submit a tool" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSubmission {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(url)]
    pub website_url: String,
    #[validate(length(min = 1, max = 300))]
    pub slogan: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub pricing_type: Option<String>,
    #[serde(default)]
    pub has_free_trial: bool,
    #[serde(default)]
    pub is_open_source: bool,
    #[serde(default)]
    pub supports_secondary_locale: bool,
    #[serde(default)]
    #[validate(url)]
    pub logo_url: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl NewSubmission {
    /// Check the payload before it is forwarded to the store of record.
    pub fn check(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be blank".to_string()));
        }
        if self.slogan.trim().is_empty() {
            return Err(CoreError::Validation("slogan must not be blank".to_string()));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(SubmissionStatus::Pending),
            "approved" => Some(SubmissionStatus::Approved),
            "rejected" => Some(SubmissionStatus::Rejected),
            _ => None,
        }
    }
}

/// A stored submission as returned by the store of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    #[serde(flatten)]
    pub payload: NewSubmission,
    pub status: SubmissionStatus,
    pub created_at: Timestamp,
}
