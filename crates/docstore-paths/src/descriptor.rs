//! Effective index and type selection for descriptor-driven operations.
//!
//! A descriptor's selection resolves in three tiers: an explicit
//! non-empty list is comma-joined; an explicitly-empty selection (or a
//! raised all-flag) becomes the wildcard; anything else falls back to
//! the value injected by the call site. Types differ from indices only
//! in the wildcard tier: there is no wildcard token, the type segment is
//! dropped instead.

use docstore_core::QueryDescriptor;

/// Wildcard token addressing every index.
pub const ALL_INDICES: &str = "_all";

pub(crate) fn effective_index(descriptor: &QueryDescriptor, fallback: &str) -> String {
    match descriptor.indices() {
        // Explicitly set to empty: assume all.
        Some([]) => ALL_INDICES.to_owned(),
        Some(list) => list.join(","),
        None if descriptor.all_indices() => ALL_INDICES.to_owned(),
        None => fallback.to_owned(),
    }
}

pub(crate) fn effective_doc_type(
    descriptor: &QueryDescriptor,
    fallback: Option<&str>,
) -> Option<String> {
    match descriptor.types() {
        // Explicitly set to empty: no type filter.
        Some([]) => None,
        Some(list) => Some(list.join(",")),
        None if descriptor.all_types() => None,
        None => fallback.map(ToOwned::to_owned),
    }
}
