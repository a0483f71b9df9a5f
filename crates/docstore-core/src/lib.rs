#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod descriptor;
pub mod error;
pub mod mapping;
pub mod params;
pub mod settings;

// Re-export the full domain surface; downstream crates should not need
// to name the modules.
pub use descriptor::QueryDescriptor;
pub use error::{PathError, PathResult};
pub use mapping::{AddressOverrides, DocumentMapping};
pub use params::{
    Consistency, DeleteByQueryParameters, IndexParameters, Replication, SearchParameters,
    SearchType, SimpleParameters, VersionType, WriteParameters,
};
pub use settings::ConnectionSettings;
