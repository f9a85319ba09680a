//! Seed / fallback dataset loading.
//!
//! A [`Dataset`] is the full in-process collection the local catalog serves.
//! It comes either from the seed compiled into the binary or from a
//! directory of JSON files laid out as:
//!
//! | File                | Contents               |
//! |---------------------|------------------------|
//! | `tools.json`        | `[Tool]`               |
//! | `categories.json`   | `[Category]`           |
//! | `tags.json`         | `[Tag]` (optional)     |
//! | `deals.json`        | `[Deal]`               |
//! | `alternatives.json` | `[Alternative]`        |
//! | `comparisons.json`  | `[ComparisonPair]`     |
//!
//! Missing files load as empty collections. Without tags, tags are derived
//! from the tools' labels.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::alternative::{Alternative, ComparisonPair};
use crate::deal::Deal;
use crate::error::CoreError;
use crate::taxonomy::{derive_tags, Category, Tag};
use crate::tool::{Score, Tool};

const TOOLS_FILE: &str = "tools.json";
const CATEGORIES_FILE: &str = "categories.json";
const TAGS_FILE: &str = "tags.json";
const DEALS_FILE: &str = "deals.json";
const ALTERNATIVES_FILE: &str = "alternatives.json";
const COMPARISONS_FILE: &str = "comparisons.json";

const SEED_TOOLS: &str = include_str!("../seed/tools.json");
const SEED_CATEGORIES: &str = include_str!("../seed/categories.json");
const SEED_DEALS: &str = include_str!("../seed/deals.json");
const SEED_ALTERNATIVES: &str = include_str!("../seed/alternatives.json");
const SEED_COMPARISONS: &str = include_str!("../seed/comparisons.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },

    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

impl From<DatasetError> for CoreError {
    fn from(err: DatasetError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub tools: Vec<Tool>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub deals: Vec<Deal>,
    pub alternatives: Vec<Alternative>,
    pub comparisons: Vec<ComparisonPair>,
}

impl Dataset {
    /// The seed compiled into the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        let dataset = Self {
            tools: parse(TOOLS_FILE, SEED_TOOLS)?,
            categories: parse(CATEGORIES_FILE, SEED_CATEGORIES)?,
            tags: Vec::new(),
            deals: parse(DEALS_FILE, SEED_DEALS)?,
            alternatives: parse(ALTERNATIVES_FILE, SEED_ALTERNATIVES)?,
            comparisons: parse(COMPARISONS_FILE, SEED_COMPARISONS)?,
        };
        dataset.finish()
    }

    /// Load a dataset from a directory of JSON files.
    pub fn from_json_dir(dir: &Path) -> Result<Self, DatasetError> {
        let dataset = Self {
            tools: read_optional(dir, TOOLS_FILE)?,
            categories: read_optional(dir, CATEGORIES_FILE)?,
            tags: read_optional(dir, TAGS_FILE)?,
            deals: read_optional(dir, DEALS_FILE)?,
            alternatives: read_optional(dir, ALTERNATIVES_FILE)?,
            comparisons: read_optional(dir, COMPARISONS_FILE)?,
        };
        tracing::debug!(
            dir = %dir.display(),
            tools = dataset.tools.len(),
            categories = dataset.categories.len(),
            "Loaded dataset from directory"
        );
        dataset.finish()
    }

    /// Write the dataset in the layout [`Dataset::from_json_dir`] reads.
    pub fn write_json_dir(&self, dir: &Path) -> Result<(), DatasetError> {
        fs::create_dir_all(dir).map_err(|source| DatasetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        write_file(dir, TOOLS_FILE, &self.tools)?;
        write_file(dir, CATEGORIES_FILE, &self.categories)?;
        write_file(dir, TAGS_FILE, &self.tags)?;
        write_file(dir, DEALS_FILE, &self.deals)?;
        write_file(dir, ALTERNATIVES_FILE, &self.alternatives)?;
        write_file(dir, COMPARISONS_FILE, &self.comparisons)?;
        Ok(())
    }

    /// Reject data the query engine cannot serve consistently.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.slug.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "duplicate tool slug '{}'",
                    tool.slug
                )));
            }
            if tool.categories.is_empty() {
                return Err(DatasetError::Invalid(format!(
                    "tool '{}' has no categories",
                    tool.slug
                )));
            }
            if tool.updated_at < tool.created_at {
                return Err(DatasetError::Invalid(format!(
                    "tool '{}' was updated before it was created",
                    tool.slug
                )));
            }
            if let Some(score) = &tool.score {
                if let Some((name, value)) = out_of_range(score) {
                    return Err(DatasetError::Invalid(format!(
                        "tool '{}' score component {name} = {value} is outside {}..={}",
                        tool.slug,
                        Score::MIN,
                        Score::MAX
                    )));
                }
            }
        }
        Ok(())
    }

    /// The same dataset restricted to published tools.
    pub fn published(mut self) -> Self {
        self.tools.retain(Tool::is_published);
        self
    }

    fn finish(mut self) -> Result<Self, DatasetError> {
        if self.tags.is_empty() {
            let created_at = self
                .tools
                .iter()
                .map(|t| t.created_at)
                .min()
                .unwrap_or_default();
            self.tags = derive_tags(&self.tools, created_at);
        }
        self.validate()?;
        Ok(self)
    }
}

fn out_of_range(score: &Score) -> Option<(&'static str, f64)> {
    score
        .components()
        .into_iter()
        .find(|(_, v)| !(Score::MIN..=Score::MAX).contains(v))
}

fn parse<T: DeserializeOwned>(file: &str, raw: &str) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
        file: file.to_string(),
        source,
    })
}

fn read_optional<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, DatasetError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;
    parse(file, &raw)
}

fn write_file<T: Serialize>(dir: &Path, file: &str, items: &[T]) -> Result<(), DatasetError> {
    let path = dir.join(file);
    let json = serde_json::to_string_pretty(items).map_err(|source| DatasetError::Parse {
        file: file.to_string(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| DatasetError::Io { path, source })
}
