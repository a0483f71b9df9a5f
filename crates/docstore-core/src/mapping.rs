//! Document mapping port and caller-side address overrides.
//!
//! The path builder consults [`DocumentMapping`] only for fields the
//! caller did not supply through [`AddressOverrides`]. Implementations
//! are written per concrete document kind; there is no runtime registry
//! or reflection involved.

/// Store addressing for one concrete document kind.
///
/// # Example
///
/// ```
/// use docstore_core::DocumentMapping;
///
/// struct Tweet {
///     id: u64,
/// }
///
/// impl DocumentMapping for Tweet {
///     fn index() -> Option<&'static str> {
///         Some("tweets")
///     }
///
///     fn doc_type() -> &'static str {
///         "tweet"
///     }
///
///     fn id(&self) -> Option<String> {
///         Some(self.id.to_string())
///     }
/// }
/// ```
pub trait DocumentMapping {
    /// Index this document kind is stored in, when statically mapped.
    ///
    /// `None` defers to the connection settings: the per-type index
    /// registry first, then the global default index.
    fn index() -> Option<&'static str> {
        None
    }

    /// Type (document category) segment for this kind.
    fn doc_type() -> &'static str;

    /// Identifier of this document, when it has one.
    ///
    /// Documents written with a store-generated id return `None`.
    fn id(&self) -> Option<String> {
        None
    }
}

/// Explicit addressing supplied by the caller.
///
/// Any field left unset is resolved through [`DocumentMapping`] and the
/// connection settings instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressOverrides {
    index: Option<String>,
    doc_type: Option<String>,
    id: Option<String>,
}

impl AddressOverrides {
    /// Create an override set with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address this index instead of the mapped one.
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Address this type instead of the mapped one.
    #[must_use]
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Address this document id instead of the mapped one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The explicit index, when set.
    #[must_use]
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// The explicit type, when set.
    #[must_use]
    pub fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// The explicit id, when set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
