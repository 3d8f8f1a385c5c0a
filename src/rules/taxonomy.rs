//! Category taxonomy: the ordered mapping from category id to matching rule.
//!
//! The taxonomy is plain data so it can live outside the binary. The default
//! one is embedded from `taxonomy.toml`; callers can load their own with
//! [`Taxonomy::from_file`] or [`Taxonomy::from_toml_str`].
//!
//! ```toml
//! default = "notes"
//!
//! [[category]]
//! id = "finance"
//! label = "Finance"
//! keywords = ["pay", "bill", "factură"]
//! patterns = ['\b\d+\s*lei\b']
//! ```
//!
//! Loading only checks structure. Patterns are compiled (and can still fail)
//! in `CompiledTaxonomy::new`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN: &str = include_str!("taxonomy.toml");

/// Errors raised while loading, validating or compiling a taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("taxonomy defines no categories")]
    Empty,

    #[error("category id must not be empty")]
    EmptyId,

    #[error("duplicate category id '{0}'")]
    DuplicateId(String),

    #[error("default category '{0}' is not defined")]
    UnknownDefault(String),

    #[error("category '{0}' has no keywords or patterns")]
    EmptyRule(String),

    #[error("invalid pattern for category '{id}': {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}

/// One category: stable id, display label and its matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Ordered set of categories. Order is the tie-break when several match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Id of the category used when no rule matches.
    pub default: String,
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryDef>,
}

impl Taxonomy {
    /// The embedded Schedule / Finance / Mail Report / Notes taxonomy.
    pub fn builtin() -> Self {
        // Covered by `builtin_taxonomy_is_valid`.
        Self::from_toml_str(BUILTIN).expect("embedded taxonomy.toml is valid")
    }

    /// Parse and validate a taxonomy from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, TaxonomyError> {
        let taxonomy: Taxonomy = toml::from_str(content)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Read, parse and validate a taxonomy file.
    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| TaxonomyError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    /// Structural checks: at least one category, unique non-empty ids
    /// (case-insensitive), a known default and a non-empty rule per category.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        if self.categories.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let id = category.id.trim().to_lowercase();
            if id.is_empty() {
                return Err(TaxonomyError::EmptyId);
            }
            if !seen.insert(id) {
                return Err(TaxonomyError::DuplicateId(category.id.clone()));
            }
            let has_keyword = category.keywords.iter().any(|k| !k.trim().is_empty());
            if !has_keyword && category.patterns.is_empty() {
                return Err(TaxonomyError::EmptyRule(category.id.clone()));
            }
        }

        if !seen.contains(&self.default.trim().to_lowercase()) {
            return Err(TaxonomyError::UnknownDefault(self.default.clone()));
        }

        Ok(())
    }
}
