//! Backend selection.
//!
//! The catalog is chosen once at startup. Local mode is used when it is
//! forced by `USE_FALLBACK_DATA` or when no usable `DATABASE_URL` is
//! configured; otherwise the PostgreSQL catalog is used. A remote catalog
//! that later fails is never swapped for local data.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rect_core::dataset::{Dataset, DatasetError};
use rect_core::{Catalog, LocalCatalog};
use rect_db::PgCatalog;

use crate::config::ServerConfig;

/// Why the local catalog was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalReason {
    Forced,
    MissingDatabaseUrl,
    InvalidDatabaseUrl,
}

impl fmt::Display for LocalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocalReason::Forced => "USE_FALLBACK_DATA is set",
            LocalReason::MissingDatabaseUrl => "DATABASE_URL is not set",
            LocalReason::InvalidDatabaseUrl => "DATABASE_URL is not a PostgreSQL URL",
        })
    }
}

/// The resolved backend mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMode {
    Local(LocalReason),
    Remote { database_url: String },
}

/// Errors that prevent a catalog from being constructed.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to load fallback dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// A `DATABASE_URL` is usable when it names a PostgreSQL server.
pub fn is_valid_database_url(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

pub fn resolve_mode(config: &ServerConfig) -> BackendMode {
    if config.use_fallback_data {
        return BackendMode::Local(LocalReason::Forced);
    }
    match config.database_url.as_deref() {
        None => BackendMode::Local(LocalReason::MissingDatabaseUrl),
        Some(url) if !is_valid_database_url(url) => {
            BackendMode::Local(LocalReason::InvalidDatabaseUrl)
        }
        Some(url) => BackendMode::Remote {
            database_url: url.trim().to_string(),
        },
    }
}

/// Load the fallback dataset from `FALLBACK_DATA_DIR`, or the embedded seed.
pub fn load_fallback_dataset(config: &ServerConfig) -> Result<Dataset, DatasetError> {
    match &config.fallback_data_dir {
        Some(dir) => Dataset::from_json_dir(dir),
        None => Dataset::embedded(),
    }
}

/// Build the catalog for the resolved mode.
pub async fn select_catalog(config: &ServerConfig) -> Result<Arc<dyn Catalog>, BackendError> {
    match resolve_mode(config) {
        BackendMode::Local(reason) => {
            tracing::debug!(source = "local", %reason, "Selected catalog backend");
            let dataset = load_fallback_dataset(config)?;
            tracing::info!(
                tools = dataset.tools.len(),
                categories = dataset.categories.len(),
                "Fallback dataset loaded"
            );
            Ok(Arc::new(LocalCatalog::new(dataset)))
        }
        BackendMode::Remote { database_url } => {
            tracing::debug!(source = "remote", "Selected catalog backend");

            let pool = rect_db::create_pool(&database_url, config.db_max_connections).await?;
            tracing::info!("Database connection pool created");

            rect_db::health_check(&pool).await?;
            tracing::info!("Database health check passed");

            if config.run_migrations {
                rect_db::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PgCatalog::new(
                pool,
                Duration::from_secs(config.backend_timeout_secs),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use rect_core::DataSource;

    use super::*;

    fn config(use_fallback_data: bool, database_url: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            shutdown_timeout_secs: 30,
            use_fallback_data,
            database_url: database_url.map(str::to_string),
            fallback_data_dir: None,
            backend_timeout_secs: 10,
            db_max_connections: 1,
            run_migrations: false,
            site_base_url: "https://rect.one".to_string(),
        }
    }

    #[test]
    fn flag_forces_local_even_with_database() {
        assert_eq!(
            resolve_mode(&config(true, Some("postgres://db/rect"))),
            BackendMode::Local(LocalReason::Forced)
        );
    }

    #[test]
    fn missing_or_invalid_url_selects_local() {
        assert_eq!(
            resolve_mode(&config(false, None)),
            BackendMode::Local(LocalReason::MissingDatabaseUrl)
        );
        assert_eq!(
            resolve_mode(&config(false, Some("mysql://db/rect"))),
            BackendMode::Local(LocalReason::InvalidDatabaseUrl)
        );
    }

    #[test]
    fn postgres_url_selects_remote() {
        assert_eq!(
            resolve_mode(&config(false, Some(" postgresql://db/rect "))),
            BackendMode::Remote {
                database_url: "postgresql://db/rect".to_string()
            }
        );
    }

    #[tokio::test]
    async fn local_mode_serves_embedded_seed() {
        let catalog = select_catalog(&config(false, None)).await.unwrap();
        assert_eq!(catalog.source(), DataSource::Local);
        assert!(catalog.tool_by_slug("chatgpt").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn local_mode_reads_fallback_dir() {
        let dir = tempfile::tempdir().unwrap();
        Dataset::embedded().unwrap().write_json_dir(dir.path()).unwrap();

        let mut cfg = config(true, None);
        cfg.fallback_data_dir = Some(dir.path().to_path_buf());
        let catalog = select_catalog(&cfg).await.unwrap();
        assert_eq!(catalog.categories().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn missing_fallback_dir_loads_empty_catalog() {
        let mut cfg = config(true, None);
        cfg.fallback_data_dir = Some("/nonexistent/rect-seed".into());
        let catalog = select_catalog(&cfg).await.unwrap();
        assert!(catalog.categories().await.unwrap().is_empty());
    }
}
