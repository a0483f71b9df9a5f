//! Read-only descriptor for search and scan style operations.

/// Per-request index/type selection plus an ordered parameter map.
///
/// Index and type selection each distinguish three states: an explicit
/// non-empty list, an explicitly-empty selection (set to empty, or the
/// corresponding all-flag raised), and unset. An explicitly-empty index
/// selection resolves to the `_all` wildcard; an explicitly-empty type
/// selection drops the type segment entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    indices: Option<Vec<String>>,
    all_indices: bool,
    types: Option<Vec<String>>,
    all_types: bool,
    params: Vec<(String, String)>,
}

impl QueryDescriptor {
    /// Create a descriptor with index and type selection unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one index to the explicit index selection.
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.indices.get_or_insert_with(Vec::new).push(index.into());
        self
    }

    /// Set the explicit index selection.
    ///
    /// An empty iterator marks the selection as explicitly empty, which
    /// resolves to the `_all` wildcard rather than falling back.
    #[must_use]
    pub fn with_indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = Some(indices.into_iter().map(Into::into).collect());
        self
    }

    /// Address every index.
    #[must_use]
    pub const fn with_all_indices(mut self) -> Self {
        self.all_indices = true;
        self
    }

    /// Add one type to the explicit type selection.
    #[must_use]
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.types.get_or_insert_with(Vec::new).push(doc_type.into());
        self
    }

    /// Set the explicit type selection.
    ///
    /// An empty iterator marks the selection as explicitly empty, which
    /// drops the type segment rather than falling back.
    #[must_use]
    pub fn with_doc_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Search across every type.
    #[must_use]
    pub const fn with_all_types(mut self) -> Self {
        self.all_types = true;
        self
    }

    /// Append one query-string parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append query-string parameters, preserving their order.
    #[must_use]
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Explicit index selection, when one was set.
    #[must_use]
    pub fn indices(&self) -> Option<&[String]> {
        self.indices.as_deref()
    }

    /// Whether the all-indices flag was raised.
    #[must_use]
    pub const fn all_indices(&self) -> bool {
        self.all_indices
    }

    /// Explicit type selection, when one was set.
    #[must_use]
    pub fn types(&self) -> Option<&[String]> {
        self.types.as_deref()
    }

    /// Whether the all-types flag was raised.
    #[must_use]
    pub const fn all_types(&self) -> bool {
        self.all_types
    }

    /// The ordered query-string parameter map.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
