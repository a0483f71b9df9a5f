//! Query-string serialization with default-value suppression.
//!
//! Each parameter family serializes into a fixed field order; the order
//! is part of the wire contract because downstream stores and tests
//! assert on the literal string. A field is emitted only when its value
//! differs from the store default. Keys are lower_snake_case; values are
//! percent-encoded at append time.

use docstore_core::{
    DeleteByQueryParameters, SearchParameters, SimpleParameters, WriteParameters,
};

/// One query-string pair awaiting encoding.
pub type QueryPair = (&'static str, String);

fn push_text(pairs: &mut Vec<QueryPair>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_owned()));
    }
}

/// Append `pairs` to `path` as a query string.
///
/// An empty pair list leaves the path unchanged — no dangling `?`.
pub fn append_query<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), urlencoding::encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Pairs for simple write operations, in wire order:
/// replication, refresh.
#[must_use]
pub fn simple_parameter_pairs(params: &SimpleParameters) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    if !params.replication.is_default() {
        pairs.push(("replication", params.replication.as_query_value().to_owned()));
    }
    if params.refresh {
        pairs.push(("refresh", "true".to_owned()));
    }
    pairs
}

/// Pairs for delete-by-query operations, in wire order:
/// replication, consistency, routing.
#[must_use]
pub fn delete_by_query_parameter_pairs(params: &DeleteByQueryParameters) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    if !params.replication.is_default() {
        pairs.push(("replication", params.replication.as_query_value().to_owned()));
    }
    if !params.consistency.is_default() {
        pairs.push(("consistency", params.consistency.as_query_value().to_owned()));
    }
    push_text(&mut pairs, "routing", params.routing.as_deref());
    pairs
}

/// Pairs for generic write operations, in wire order:
/// version, routing, parent, replication, consistency, refresh, then the
/// index-write sub-parameters (version_type, timeout) when present.
#[must_use]
pub fn write_parameter_pairs(params: &WriteParameters) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    push_text(&mut pairs, "version", params.version.as_deref());
    push_text(&mut pairs, "routing", params.routing.as_deref());
    push_text(&mut pairs, "parent", params.parent.as_deref());
    if !params.replication.is_default() {
        pairs.push(("replication", params.replication.as_query_value().to_owned()));
    }
    if !params.consistency.is_default() {
        pairs.push(("consistency", params.consistency.as_query_value().to_owned()));
    }
    if params.refresh {
        pairs.push(("refresh", "true".to_owned()));
    }
    if let Some(index) = &params.index {
        if !index.version_type.is_default() {
            pairs.push(("version_type", index.version_type.as_query_value().to_owned()));
        }
        push_text(&mut pairs, "timeout", index.timeout.as_deref());
    }
    pairs
}

/// Pairs for search operations, in wire order:
/// routing, scroll, search_type.
#[must_use]
pub fn search_parameter_pairs(params: &SearchParameters) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    push_text(&mut pairs, "routing", params.routing.as_deref());
    push_text(&mut pairs, "scroll", params.scroll.as_deref());
    if let Some(search_type) = params.search_type {
        pairs.push(("search_type", search_type.as_query_value().to_owned()));
    }
    pairs
}

/// Append simple write parameters to a path.
#[must_use]
pub fn append_simple_parameters(path: &str, params: &SimpleParameters) -> String {
    append_query(path, &simple_parameter_pairs(params))
}

/// Append delete-by-query parameters to a path.
#[must_use]
pub fn append_delete_by_query_parameters(path: &str, params: &DeleteByQueryParameters) -> String {
    append_query(path, &delete_by_query_parameter_pairs(params))
}

/// Append generic write parameters to a path.
#[must_use]
pub fn append_write_parameters(path: &str, params: &WriteParameters) -> String {
    append_query(path, &write_parameter_pairs(params))
}

/// Append search parameters to a path.
#[must_use]
pub fn append_search_parameters(path: &str, params: &SearchParameters) -> String {
    append_query(path, &search_parameter_pairs(params))
}

#[cfg(test)]
mod tests {
    use docstore_core::{
        Consistency, IndexParameters, Replication, SearchType, VersionType,
    };

    use super::*;

    #[test]
    fn all_defaults_leave_the_path_untouched() {
        assert_eq!(
            append_simple_parameters("idx/user/1", &SimpleParameters::new()),
            "idx/user/1"
        );
        assert_eq!(
            append_write_parameters("idx/user/1", &WriteParameters::new()),
            "idx/user/1"
        );
        assert_eq!(
            append_delete_by_query_parameters("idx/_query", &DeleteByQueryParameters::new()),
            "idx/_query"
        );
        assert_eq!(
            append_search_parameters("idx/_search", &SearchParameters::new()),
            "idx/_search"
        );
    }

    #[test]
    fn simple_parameters_emit_in_order() {
        let params = SimpleParameters::new()
            .with_replication(Replication::Async)
            .with_refresh(true);
        assert_eq!(
            append_simple_parameters("idx/user/1", &params),
            "idx/user/1?replication=async&refresh=true"
        );
    }

    #[test]
    fn delete_by_query_parameters_emit_in_order() {
        let params = DeleteByQueryParameters::new()
            .with_replication(Replication::Async)
            .with_consistency(Consistency::All)
            .with_routing("user-7");
        assert_eq!(
            append_delete_by_query_parameters("idx/_query", &params),
            "idx/_query?replication=async&consistency=all&routing=user-7"
        );
    }

    #[test]
    fn delete_by_query_consistency_serializes_the_consistency_field() {
        let params = DeleteByQueryParameters::new().with_consistency(Consistency::One);
        assert_eq!(
            append_delete_by_query_parameters("idx/_query", &params),
            "idx/_query?consistency=one"
        );
    }

    #[test]
    fn write_parameters_routing_only() {
        let params = WriteParameters::new().with_routing("r1");
        assert_eq!(
            append_write_parameters("idx/user/1", &params),
            "idx/user/1?routing=r1"
        );
    }

    #[test]
    fn write_parameters_full_emission_order() {
        let params = WriteParameters::new()
            .with_version("3")
            .with_routing("r1")
            .with_parent("42")
            .with_replication(Replication::Async)
            .with_consistency(Consistency::One)
            .with_refresh(true)
            .with_index_parameters(
                IndexParameters::new()
                    .with_version_type(VersionType::External)
                    .with_timeout("1m"),
            );
        assert_eq!(
            append_write_parameters("idx/user/1", &params),
            "idx/user/1?version=3&routing=r1&parent=42&replication=async&consistency=one&refresh=true&version_type=external&timeout=1m"
        );
    }

    #[test]
    fn index_sub_parameters_require_the_index_set() {
        // Without the index sub-set, version_type and timeout never appear.
        let params = WriteParameters::new().with_refresh(true);
        assert_eq!(
            append_write_parameters("idx/user/1", &params),
            "idx/user/1?refresh=true"
        );
    }

    #[test]
    fn default_index_sub_parameters_are_suppressed() {
        let params = WriteParameters::new().with_index_parameters(IndexParameters::new());
        assert_eq!(append_write_parameters("idx/user/1", &params), "idx/user/1");
    }

    #[test]
    fn search_parameters_emit_in_order() {
        let params = SearchParameters::new()
            .with_routing("r1")
            .with_scroll("1m")
            .with_search_type(SearchType::Scan);
        assert_eq!(
            append_search_parameters("idx/_search", &params),
            "idx/_search?routing=r1&scroll=1m&search_type=scan"
        );
    }

    #[test]
    fn search_type_count_maps_to_count() {
        let params = SearchParameters::new().with_search_type(SearchType::Count);
        assert_eq!(
            append_search_parameters("idx/_search", &params),
            "idx/_search?search_type=count"
        );
    }

    #[test]
    fn unset_search_type_emits_no_key() {
        let params = SearchParameters::new().with_routing("r1");
        let path = append_search_parameters("idx/_search", &params);
        assert!(!path.contains("search_type"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = SearchParameters::new().with_routing("a b&c");
        assert_eq!(
            append_search_parameters("idx/_search", &params),
            "idx/_search?routing=a%20b%26c"
        );
    }

    #[test]
    fn serialization_is_idempotent() {
        let params = WriteParameters::new()
            .with_routing("r1")
            .with_refresh(true);
        let first = append_write_parameters("idx/user/1", &params);
        let second = append_write_parameters("idx/user/1", &params);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_string_fields_count_as_defaults() {
        let params = WriteParameters::new().with_version("").with_routing("r1");
        assert_eq!(
            append_write_parameters("idx/user/1", &params),
            "idx/user/1?routing=r1"
        );
    }
}
