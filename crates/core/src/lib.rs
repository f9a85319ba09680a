//! Domain model and query engine for the rect.one tool directory.
//!
//! Everything here is I/O free apart from reading seed files: the data
//! model, the filter/sort/paginate pipeline, the in-memory [`LocalCatalog`],
//! the [`Catalog`] trait the PostgreSQL adapter also implements, and the
//! views derived from it.

pub mod alternative;
pub mod catalog;
pub mod dataset;
pub mod deal;
pub mod derived;
pub mod error;
pub mod filter;
pub mod local;
pub mod localization;
pub mod pricing;
pub mod search;
pub mod sitemap;
pub mod submission;
pub mod taxonomy;
pub mod tool;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use catalog::{Catalog, DataSource};
pub use dataset::Dataset;
pub use error::{CoreError, CoreResult};
pub use filter::{SortKey, ToolFilter};
pub use local::LocalCatalog;
pub use search::{GlobalSearchResult, SearchResult};
