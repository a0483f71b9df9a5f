//! Connection-level defaults consulted during path building.
//!
//! These are pure domain values; loading them from disk or environment
//! is an adapter concern and lives outside this crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PathError, PathResult};

/// Immutable connection configuration.
///
/// Built once and shared by reference across concurrent callers; nothing
/// here is ever mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Root endpoint of the store's HTTP API.
    host: Url,
    /// Index addressed when neither the caller nor the mapping names one.
    default_index: String,
    /// Per-type default indices, consulted before the global default.
    #[serde(default)]
    type_indices: HashMap<String, String>,
}

impl ConnectionSettings {
    /// Create settings for a store endpoint with a global default index.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] when `default_index` is empty.
    pub fn new(host: Url, default_index: impl Into<String>) -> PathResult<Self> {
        let default_index = default_index.into();
        if default_index.is_empty() {
            return Err(PathError::EmptySegment {
                name: "default_index",
            });
        }
        Ok(Self {
            host,
            default_index,
            type_indices: HashMap::new(),
        })
    }

    /// Register a default index for one document type.
    #[must_use]
    pub fn with_type_index(
        mut self,
        doc_type: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        self.type_indices.insert(doc_type.into(), index.into());
        self
    }

    /// Root endpoint of the store's HTTP API.
    #[must_use]
    pub const fn host(&self) -> &Url {
        &self.host
    }

    /// The global default index.
    #[must_use]
    pub fn default_index(&self) -> &str {
        &self.default_index
    }

    /// Default index for a document type.
    ///
    /// Consults the per-type registry first, then the global default.
    #[must_use]
    pub fn index_for(&self, doc_type: &str) -> &str {
        self.type_indices
            .get(doc_type)
            .map_or(self.default_index.as_str(), String::as_str)
    }
}
