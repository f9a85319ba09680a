//! `rect-sync`: move catalog data between the remote store and JSON seed
//! directories.
//!
//! - `export --dir <DIR>` writes the published remote catalog as a fallback
//!   dataset the API can serve with `USE_FALLBACK_DATA=true`.
//! - `import [--dir <DIR>]` upserts a dataset (or the embedded seed) into
//!   the remote store, keeping file order as insertion order.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rect_core::{Catalog, Dataset};
use rect_db::PgCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rect-sync", about = "Export or import the rect.one tool catalog")]
struct Cli {
    /// PostgreSQL connection URL (or set DATABASE_URL env var)
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Deadline for each catalog read, in seconds
    #[arg(long, env = "BACKEND_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the published catalog to a directory of JSON files
    Export {
        /// Target directory (created if missing)
        #[arg(long)]
        dir: PathBuf,
    },
    /// Upsert a dataset into the database
    Import {
        /// Source directory; the embedded seed is used when omitted
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Do not apply pending migrations first
        #[arg(long)]
        skip_migrations: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rect_sync=info,rect_db=info,rect_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if !rect_api::backend::is_valid_database_url(&cli.database_url) {
        bail!("DATABASE_URL must start with postgres:// or postgresql://");
    }

    let pool = rect_db::create_pool(&cli.database_url, 2)
        .await
        .context("Failed to connect to database")?;
    let catalog = PgCatalog::new(pool, Duration::from_secs(cli.timeout_secs));

    match cli.command {
        Commands::Export { dir } => {
            let dataset = catalog.snapshot().await?;
            dataset
                .write_json_dir(&dir)
                .with_context(|| format!("Failed to write {}", dir.display()))?;
            tracing::info!(
                dir = %dir.display(),
                tools = dataset.tools.len(),
                categories = dataset.categories.len(),
                deals = dataset.deals.len(),
                "Catalog exported"
            );
        }
        Commands::Import {
            dir,
            skip_migrations,
        } => {
            if !skip_migrations {
                rect_db::run_migrations(catalog.pool())
                    .await
                    .context("Failed to run database migrations")?;
            }
            let dataset = match &dir {
                Some(dir) => Dataset::from_json_dir(dir)
                    .with_context(|| format!("Failed to load {}", dir.display()))?,
                None => Dataset::embedded().context("Embedded seed is invalid")?,
            };
            let summary = catalog.import_dataset(&dataset).await?;
            println!(
                "Imported {} tools, {} categories, {} tags, {} deals, {} alternatives, {} comparisons",
                summary.tools,
                summary.categories,
                summary.tags,
                summary.deals,
                summary.alternatives,
                summary.comparisons,
            );
        }
    }

    Ok(())
}
