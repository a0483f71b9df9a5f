#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod assemble;
mod builder;
mod descriptor;
pub mod query;

pub use builder::{PathBuilder, SEARCH_SUFFIX};
pub use descriptor::ALL_INDICES;

// Re-export the core types callers need to drive the builder.
pub use docstore_core::{
    AddressOverrides, Consistency, ConnectionSettings, DeleteByQueryParameters, DocumentMapping,
    IndexParameters, PathError, PathResult, QueryDescriptor, Replication, SearchParameters,
    SearchType, SimpleParameters, VersionType, WriteParameters,
};
