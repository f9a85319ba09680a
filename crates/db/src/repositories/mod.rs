//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or an open transaction for imports) as the
//! first argument.

pub mod alternative_repo;
pub mod deal_repo;
pub mod submission_repo;
pub mod taxonomy_repo;
pub mod tool_repo;

pub use alternative_repo::{AlternativeRepo, ComparisonRepo};
pub use deal_repo::DealRepo;
pub use submission_repo::SubmissionRepo;
pub use taxonomy_repo::{CategoryRepo, TagRepo};
pub use tool_repo::ToolRepo;
