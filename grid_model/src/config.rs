// config.rs - Puzzle content: the two categories, their items and the clue list

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::grid::{self, Grid};

/// Errors raised while loading puzzle configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read puzzle file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid puzzle TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Item ids key the cells, so they must be unique per axis.
    #[error("category '{category}' lists item id '{id}' more than once")]
    DuplicateItemId { category: String, id: String },

    #[error("category '{category}' has no items")]
    EmptyCategory { category: String },

    #[error("no built-in puzzle named '{0}'")]
    UnknownPreset(String),
}

/// One labelled entry along an axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
}

/// One axis of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyCategory { category: self.name.clone() });
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateItemId {
                    category: self.name.clone(),
                    id: item.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn default_rules_heading() -> String {
    "Rules".to_string()
}

/// Everything a puzzle page shows. Read once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleConfig {
    pub title: String,
    #[serde(default)]
    pub eyebrow: String,
    #[serde(default)]
    pub lede: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default = "default_rules_heading")]
    pub rules_heading: String,
    #[serde(default)]
    pub rules_note: String,
    #[serde(default)]
    pub rules: Vec<String>,
    pub row_category: Category,
    pub column_category: Category,
}

impl PuzzleConfig {
    /// Parse and validate a puzzle from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        debug!(
            title = %config.title,
            rows = config.row_category.len(),
            columns = config.column_category.len(),
            rules = config.rules.len(),
            "parsed puzzle"
        );
        Ok(config)
    }

    /// Read, parse and validate a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), title = %config.title, "loaded puzzle file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.row_category.validate()?;
        self.column_category.validate()
    }

    /// `(rows, columns)` of the grid this puzzle needs.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_category.len(), self.column_category.len())
    }

    /// Blank grid sized for this puzzle.
    pub fn blank_grid(&self) -> Grid {
        let (rows, columns) = self.shape();
        grid::clear(rows, columns)
    }
}
