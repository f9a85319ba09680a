use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Budget for draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Force the local catalog even when a database is configured.
    pub use_fallback_data: bool,
    /// Remote store connection string, if any.
    pub database_url: Option<String>,
    /// Directory of JSON seed files. `None` uses the embedded seed.
    pub fallback_data_dir: Option<PathBuf>,
    /// Per-operation deadline for remote catalog calls.
    pub backend_timeout_secs: u64,
    pub db_max_connections: u32,
    /// Apply migrations at startup in remote mode.
    pub run_migrations: bool,
    /// Public base URL used in `sitemap.xml` and `robots.txt`.
    pub site_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                       |
    /// | `USE_FALLBACK_DATA`     | `false`                    |
    /// | `DATABASE_URL`          | unset                      |
    /// | `FALLBACK_DATA_DIR`     | unset (embedded seed)      |
    /// | `BACKEND_TIMEOUT_SECS`  | `10`                       |
    /// | `DB_MAX_CONNECTIONS`    | `10`                       |
    /// | `RUN_MIGRATIONS`        | `true`                     |
    /// | `SITE_BASE_URL`         | `https://rect.one`         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let use_fallback_data = std::env::var("USE_FALLBACK_DATA")
            .map(|v| parse_flag(&v).expect("USE_FALLBACK_DATA must be true or false"))
            .unwrap_or(false);

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let fallback_data_dir = std::env::var("FALLBACK_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let backend_timeout_secs: u64 = std::env::var("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("BACKEND_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| rect_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let run_migrations = std::env::var("RUN_MIGRATIONS")
            .map(|v| parse_flag(&v).expect("RUN_MIGRATIONS must be true or false"))
            .unwrap_or(true);

        let site_base_url =
            std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "https://rect.one".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            use_fallback_data,
            database_url,
            fallback_data_dir,
            backend_timeout_secs,
            db_max_connections,
            run_migrations,
            site_base_url,
        }
    }
}

/// Parse a boolean environment flag. Accepts `true/false`, `1/0`, `yes/no`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
