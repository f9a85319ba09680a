//! Behaviour specific to the PostgreSQL catalog: submissions and failure
//! modes.

use std::time::Duration;

use assert_matches::assert_matches;
use rect_core::catalog::Catalog;
use rect_core::error::CoreError;
use rect_core::submission::SubmissionStatus;
use rect_core::testing::submission;
use rect_core::ToolFilter;
use rect_db::remote::DEFAULT_BACKEND_TIMEOUT;
use rect_db::repositories::SubmissionRepo;
use rect_db::PgCatalog;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_submit_stores_pending_row(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone(), DEFAULT_BACKEND_TIMEOUT);

    let stored = catalog.submit(submission("Zed")).await.unwrap();
    assert_eq!(stored.status, SubmissionStatus::Pending);
    assert_eq!(stored.payload, submission("Zed"));

    let row = SubmissionRepo::find_by_id(&pool, stored.id)
        .await
        .unwrap()
        .expect("submission should exist");
    assert_eq!(row.name, "Zed");
    assert_eq!(row.status, "pending");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_submission_is_not_stored(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone(), DEFAULT_BACKEND_TIMEOUT);

    let mut bad = submission("Zed");
    bad.website_url = "not a url".to_string();
    assert_matches!(catalog.submit(bad).await, Err(CoreError::Validation(_)));

    let mut blank = submission("Zed");
    blank.name = "  ".to_string();
    assert_matches!(catalog.submit(blank).await, Err(CoreError::Validation(_)));

    assert_eq!(SubmissionRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_closed_pool_reports_backend_unavailable(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone(), DEFAULT_BACKEND_TIMEOUT);
    pool.close().await;

    assert_matches!(
        catalog.query_tools(&ToolFilter::new()).await,
        Err(CoreError::BackendUnavailable(_))
    );
    assert_matches!(
        catalog.categories().await,
        Err(CoreError::BackendUnavailable(_))
    );
    assert_matches!(
        catalog.submit(submission("Zed")).await,
        Err(CoreError::BackendUnavailable(_))
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_zero_deadline_reports_backend_timeout(pool: PgPool) {
    let catalog = PgCatalog::new(pool, Duration::ZERO);

    assert_matches!(
        catalog.query_tools(&ToolFilter::new()).await,
        Err(CoreError::BackendTimeout { secs: 0 })
    );
    assert_matches!(
        catalog.global_search("ai").await,
        Err(CoreError::BackendTimeout { secs: 0 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_blank_global_search_skips_the_database(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone(), DEFAULT_BACKEND_TIMEOUT);
    pool.close().await;

    let result = catalog.global_search("  ").await.unwrap();
    assert!(result.tools.is_empty());
    assert!(result.categories.is_empty());
    assert!(result.tags.is_empty());
}
