//! Request-modifier enumerations and per-operation parameter sets.
//!
//! Every field carries a defined default, and a field is written to the
//! query string only when it differs from that default. The store never
//! sees a default value on the wire.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Write replication mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Replication {
    /// Wait for replicas to acknowledge the write (store default).
    #[default]
    Sync,
    /// Return as soon as the primary has applied the write.
    Async,
}

impl Replication {
    /// Wire value for the query string.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }

    /// Whether this is the store default, which is never written to the wire.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Sync)
    }
}

/// Write consistency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    /// A single shard copy suffices.
    One,
    /// A quorum of shard copies (store default).
    #[default]
    Quorum,
    /// Every shard copy.
    All,
}

impl Consistency {
    /// Wire value for the query string.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Quorum => "quorum",
            Self::All => "all",
        }
    }

    /// Whether this is the store default, which is never written to the wire.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Quorum)
    }
}

/// Document versioning scheme for index-write operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    /// Store-managed version numbers (store default).
    #[default]
    Internal,
    /// Caller-supplied version numbers.
    External,
}

impl VersionType {
    /// Wire value for the query string.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }

    /// Whether this is the store default, which is never written to the wire.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Search execution strategy.
///
/// There is no default: the key is emitted only when a strategy was
/// explicitly chosen, so the store applies its own default otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Two-phase query then fetch.
    QueryThenFetch,
    /// Single-phase query and fetch.
    QueryAndFetch,
    /// Distributed term frequencies, then query then fetch.
    DfsQueryThenFetch,
    /// Distributed term frequencies, then query and fetch.
    DfsQueryAndFetch,
    /// Count matching documents only.
    Count,
    /// Scan through matches without scoring.
    Scan,
}

impl SearchType {
    /// Wire value for the query string.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::QueryThenFetch => "query_then_fetch",
            Self::QueryAndFetch => "query_and_fetch",
            Self::DfsQueryThenFetch => "dfs_query_then_fetch",
            Self::DfsQueryAndFetch => "dfs_query_and_fetch",
            Self::Count => "count",
            Self::Scan => "scan",
        }
    }
}

// ============================================================================
// Parameter Sets
// ============================================================================

/// Parameters accepted by simple write operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleParameters {
    /// Replication mode
    pub replication: Replication,
    /// Refresh affected shards so the change is immediately searchable
    pub refresh: bool,
}

impl SimpleParameters {
    /// Create a parameter set with every field at its store default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replication mode.
    #[must_use]
    pub const fn with_replication(mut self, replication: Replication) -> Self {
        self.replication = replication;
        self
    }

    /// Request an immediate refresh.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Parameters accepted by delete-by-query operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteByQueryParameters {
    /// Replication mode
    pub replication: Replication,
    /// Consistency level
    pub consistency: Consistency,
    /// Shard routing value
    pub routing: Option<String>,
}

impl DeleteByQueryParameters {
    /// Create a parameter set with every field at its store default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replication mode.
    #[must_use]
    pub const fn with_replication(mut self, replication: Replication) -> Self {
        self.replication = replication;
        self
    }

    /// Set the consistency level.
    #[must_use]
    pub const fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    /// Route the delete to the shard owning `routing`.
    #[must_use]
    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }
}

/// Sub-parameters applicable only to index-write operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexParameters {
    /// Versioning scheme
    pub version_type: VersionType,
    /// Operation timeout (e.g. `1m`, `30s`)
    pub timeout: Option<String>,
}

impl IndexParameters {
    /// Create a parameter set with every field at its store default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the versioning scheme.
    #[must_use]
    pub const fn with_version_type(mut self, version_type: VersionType) -> Self {
        self.version_type = version_type;
        self
    }

    /// Set the operation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}

/// Parameters accepted by generic write operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteParameters {
    /// Expected document version
    pub version: Option<String>,
    /// Shard routing value
    pub routing: Option<String>,
    /// Parent document id
    pub parent: Option<String>,
    /// Replication mode
    pub replication: Replication,
    /// Consistency level
    pub consistency: Consistency,
    /// Refresh affected shards so the change is immediately searchable
    pub refresh: bool,
    /// Index-write sub-parameters, when the operation is an index write
    pub index: Option<IndexParameters>,
}

impl WriteParameters {
    /// Create a parameter set with every field at its store default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given document version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Route the write to the shard owning `routing`.
    #[must_use]
    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Set the parent document id.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the replication mode.
    #[must_use]
    pub const fn with_replication(mut self, replication: Replication) -> Self {
        self.replication = replication;
        self
    }

    /// Set the consistency level.
    #[must_use]
    pub const fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    /// Request an immediate refresh.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Attach index-write sub-parameters.
    #[must_use]
    pub fn with_index_parameters(mut self, index: IndexParameters) -> Self {
        self.index = Some(index);
        self
    }
}

/// Parameters accepted by search operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// Shard routing value
    pub routing: Option<String>,
    /// Scroll keep-alive (e.g. `1m`); enables scrolling
    pub scroll: Option<String>,
    /// Search execution strategy
    pub search_type: Option<SearchType>,
}

impl SearchParameters {
    /// Create a parameter set with every field at its store default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the search to the shard owning `routing`.
    #[must_use]
    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Keep the scroll cursor alive for the given duration.
    #[must_use]
    pub fn with_scroll(mut self, scroll: impl Into<String>) -> Self {
        self.scroll = Some(scroll.into());
        self
    }

    /// Choose a search execution strategy.
    #[must_use]
    pub const fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }
}
