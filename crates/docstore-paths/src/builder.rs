//! Path builder orchestration.
//!
//! `PathBuilder` wires the assembler, the parameter serializer and the
//! descriptor selection rules together, resolving whatever the caller
//! left unset through the [`DocumentMapping`] port and the connection
//! settings.

use docstore_core::{
    AddressOverrides, ConnectionSettings, DocumentMapping, PathResult, QueryDescriptor,
};
use tracing::trace;

use crate::descriptor::{effective_doc_type, effective_index};
use crate::{assemble, query};

/// Suffix for search operations.
pub const SEARCH_SUFFIX: &str = "_search";

/// Builds REST paths and query strings for the document store HTTP API.
///
/// Holds only immutable connection defaults; a single builder is safe
/// to share by reference across any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    settings: ConnectionSettings,
}

impl PathBuilder {
    /// Create a builder over the given connection defaults.
    #[must_use]
    pub const fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    /// The connection defaults this builder resolves against.
    #[must_use]
    pub const fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Index for a document kind: the static mapping first, then the
    /// settings' per-type registry, then the global default.
    fn index_for<T: DocumentMapping>(&self) -> String {
        T::index().map_or_else(
            || self.settings.index_for(T::doc_type()).to_owned(),
            str::to_owned,
        )
    }

    fn resolve_address<T: DocumentMapping>(
        &self,
        doc: &T,
        overrides: &AddressOverrides,
    ) -> (String, String, Option<String>) {
        let index = overrides
            .index()
            .map_or_else(|| self.index_for::<T>(), str::to_owned);
        let doc_type = overrides
            .doc_type()
            .map_or_else(|| T::doc_type().to_owned(), str::to_owned);
        let id = overrides.id().map(str::to_owned).or_else(|| doc.id());
        (index, doc_type, id)
    }

    /// Path addressing one document: `"<index>/<type>/<id>"`.
    ///
    /// Fields left unset in `overrides` are resolved through the
    /// document's mapping and the connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`docstore_core::PathError::EmptySegment`] when any of
    /// the resolved index, type or id is still empty — including a
    /// document whose mapping knows no id.
    pub fn document_path<T: DocumentMapping>(
        &self,
        doc: &T,
        overrides: &AddressOverrides,
    ) -> PathResult<String> {
        let (index, doc_type, id) = self.resolve_address(doc, overrides);
        let path =
            assemble::index_type_id_path(&index, &doc_type, id.as_deref().unwrap_or_default(), None)?;
        trace!(%path, "assembled document path");
        Ok(path)
    }

    /// Like [`document_path`](Self::document_path), but a missing or
    /// empty id falls back to the type-level path `"<index>/<type>/"` —
    /// the form used for writes with a store-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`docstore_core::PathError::EmptySegment`] when the
    /// resolved index or type is empty.
    pub fn document_path_id_optional<T: DocumentMapping>(
        &self,
        doc: &T,
        overrides: &AddressOverrides,
    ) -> PathResult<String> {
        let (index, doc_type, id) = self.resolve_address(doc, overrides);
        let path = match id.as_deref() {
            Some(id) if !id.is_empty() => {
                assemble::index_type_id_path(&index, &doc_type, id, None)?
            }
            _ => assemble::index_type_path(&index, &doc_type, None)?,
        };
        trace!(%path, "assembled id-optional document path");
        Ok(path)
    }

    /// Search path for an untyped request; unset selections fall back to
    /// the connection default index and no type filter.
    ///
    /// # Errors
    ///
    /// Propagates assembler errors for empty resolved segments.
    pub fn search_path(&self, descriptor: &QueryDescriptor) -> PathResult<String> {
        self.extension_path(descriptor, SEARCH_SUFFIX)
    }

    /// Search path for a typed request; unset selections fall back to
    /// the document kind's index and type.
    ///
    /// # Errors
    ///
    /// Propagates assembler errors for empty resolved segments.
    pub fn search_path_for<T: DocumentMapping>(
        &self,
        descriptor: &QueryDescriptor,
    ) -> PathResult<String> {
        self.extension_path_for::<T>(descriptor, SEARCH_SUFFIX)
    }

    /// Descriptor path for an untyped request under a caller-chosen
    /// operation suffix (e.g. `_count`).
    ///
    /// # Errors
    ///
    /// Propagates assembler errors for empty resolved segments or an
    /// empty suffix.
    pub fn extension_path(
        &self,
        descriptor: &QueryDescriptor,
        suffix: &str,
    ) -> PathResult<String> {
        let index = effective_index(descriptor, self.settings.default_index());
        let doc_type = effective_doc_type(descriptor, None);
        Self::join_descriptor_path(&index, doc_type.as_deref(), suffix, descriptor)
    }

    /// Descriptor path for a typed request under a caller-chosen
    /// operation suffix.
    ///
    /// # Errors
    ///
    /// Propagates assembler errors for empty resolved segments or an
    /// empty suffix.
    pub fn extension_path_for<T: DocumentMapping>(
        &self,
        descriptor: &QueryDescriptor,
        suffix: &str,
    ) -> PathResult<String> {
        let fallback_index = self.index_for::<T>();
        let index = effective_index(descriptor, &fallback_index);
        let doc_type = effective_doc_type(descriptor, Some(T::doc_type()));
        Self::join_descriptor_path(&index, doc_type.as_deref(), suffix, descriptor)
    }

    fn join_descriptor_path(
        index: &str,
        doc_type: Option<&str>,
        suffix: &str,
        descriptor: &QueryDescriptor,
    ) -> PathResult<String> {
        let base = match doc_type {
            Some(doc_type) => assemble::index_type_path(index, doc_type, Some(suffix))?,
            None => assemble::index_path(index, Some(suffix))?,
        };
        let path = query::append_query(&base, descriptor.params());
        trace!(%path, "assembled descriptor path");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use docstore_core::PathError;
    use url::Url;

    use super::*;

    struct Tweet {
        id: Option<u64>,
    }

    impl DocumentMapping for Tweet {
        fn index() -> Option<&'static str> {
            Some("tweets")
        }

        fn doc_type() -> &'static str {
            "tweet"
        }

        fn id(&self) -> Option<String> {
            self.id.map(|id| id.to_string())
        }
    }

    /// No static index mapping: resolution goes through the settings.
    struct AuditEvent;

    impl DocumentMapping for AuditEvent {
        fn doc_type() -> &'static str {
            "audit_event"
        }
    }

    fn builder() -> PathBuilder {
        let settings = ConnectionSettings::new(
            Url::parse("http://localhost:9200").expect("valid host URL"),
            "main",
        )
        .expect("settings")
        .with_type_index("audit_event", "audit");
        PathBuilder::new(settings)
    }

    #[test]
    fn document_path_resolves_through_the_mapping() {
        let doc = Tweet { id: Some(42) };
        let path = builder()
            .document_path(&doc, &AddressOverrides::new())
            .unwrap();
        assert_eq!(path, "tweets/tweet/42");
    }

    #[test]
    fn overrides_win_over_the_mapping() {
        let doc = Tweet { id: Some(42) };
        let overrides = AddressOverrides::new()
            .with_index("archive")
            .with_doc_type("old-tweet")
            .with_id("7");
        let path = builder().document_path(&doc, &overrides).unwrap();
        assert_eq!(path, "archive/old-tweet/7");
    }

    #[test]
    fn document_path_requires_an_id() {
        let doc = Tweet { id: None };
        let error = builder()
            .document_path(&doc, &AddressOverrides::new())
            .unwrap_err();
        assert_eq!(error, PathError::EmptySegment { name: "id" });
    }

    #[test]
    fn id_optional_path_falls_back_to_the_type_level() {
        let doc = Tweet { id: None };
        let path = builder()
            .document_path_id_optional(&doc, &AddressOverrides::new())
            .unwrap();
        assert_eq!(path, "tweets/tweet/");
    }

    #[test]
    fn id_optional_path_keeps_a_known_id() {
        let doc = Tweet { id: Some(42) };
        let path = builder()
            .document_path_id_optional(&doc, &AddressOverrides::new())
            .unwrap();
        assert_eq!(path, "tweets/tweet/42");
    }

    #[test]
    fn id_optional_path_treats_an_empty_override_id_as_missing() {
        let doc = Tweet { id: Some(42) };
        let overrides = AddressOverrides::new().with_id("");
        let path = builder()
            .document_path_id_optional(&doc, &overrides)
            .unwrap();
        assert_eq!(path, "tweets/tweet/");
    }

    #[test]
    fn unmapped_index_resolves_through_the_settings_registry() {
        let path = builder()
            .document_path_id_optional(&AuditEvent, &AddressOverrides::new())
            .unwrap();
        assert_eq!(path, "audit/audit_event/");
    }

    #[test]
    fn typed_search_path_uses_the_mapping_fallbacks() {
        let path = builder()
            .search_path_for::<Tweet>(&QueryDescriptor::new())
            .unwrap();
        assert_eq!(path, "tweets/tweet/_search");
    }

    #[test]
    fn untyped_search_path_uses_the_default_index_and_no_type() {
        let path = builder().search_path(&QueryDescriptor::new()).unwrap();
        assert_eq!(path, "main/_search");
    }

    #[test]
    fn explicit_selections_override_typed_fallbacks() {
        let descriptor = QueryDescriptor::new()
            .with_indices(["logs", "metrics"])
            .with_doc_types(["entry"]);
        let path = builder().search_path_for::<Tweet>(&descriptor).unwrap();
        assert_eq!(path, "logs%2Cmetrics/entry/_search");
    }

    #[test]
    fn all_indices_resolves_to_the_wildcard() {
        let descriptor = QueryDescriptor::new().with_all_indices();
        let path = builder().search_path(&descriptor).unwrap();
        assert_eq!(path, "_all/_search");
    }

    #[test]
    fn all_types_drops_the_type_segment_for_typed_requests() {
        let descriptor = QueryDescriptor::new().with_all_types();
        let path = builder().search_path_for::<Tweet>(&descriptor).unwrap();
        assert_eq!(path, "tweets/_search");
    }

    #[test]
    fn descriptor_params_are_appended() {
        let descriptor = QueryDescriptor::new()
            .with_param("routing", "r1")
            .with_param("scroll", "1m");
        let path = builder().search_path(&descriptor).unwrap();
        assert_eq!(path, "main/_search?routing=r1&scroll=1m");
    }

    #[test]
    fn extension_path_takes_a_caller_suffix() {
        let path = builder()
            .extension_path_for::<Tweet>(&QueryDescriptor::new(), "_count")
            .unwrap();
        assert_eq!(path, "tweets/tweet/_count");
    }

    #[test]
    fn extension_path_rejects_an_empty_suffix() {
        let error = builder()
            .extension_path(&QueryDescriptor::new(), "")
            .unwrap_err();
        assert_eq!(error, PathError::EmptySegment { name: "suffix" });
    }
}
