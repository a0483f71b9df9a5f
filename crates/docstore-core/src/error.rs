//! Error type shared by the path building crates.
//!
//! Every variant is a caller-input contract violation, surfaced
//! synchronously so the request can be corrected before any network
//! attempt. There is no retry policy and nothing is deferred.

use thiserror::Error;

/// Result type alias for path building operations.
pub type PathResult<T> = Result<T, PathError>;

/// Errors raised when a request addresses the store incompletely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// A required path segment was empty or missing.
    #[error("{name} must not be empty")]
    EmptySegment {
        /// Name of the offending segment (`index`, `type`, `id`, `suffix`, ...)
        name: &'static str,
    },

    /// An index or type list was empty where at least one entry is required.
    #[error("{name} must contain at least one entry")]
    EmptyCollection {
        /// Name of the offending collection
        name: &'static str,
    },
}
