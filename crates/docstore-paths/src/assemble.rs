//! Pure path assembly from percent-encoded segments.
//!
//! Each of index, type and id is encoded individually before joining
//! with `/`. Multi-valued index/type selections are comma-joined
//! *before* encoding, so a comma inside one entry is indistinguishable
//! from a separator — intentional API behavior of the store, not a bug.
//! Suffixes are passed through pre-formed (e.g. `_search`) and never
//! re-encoded.

use std::borrow::Cow;

use docstore_core::{PathError, PathResult};

fn encode(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

fn require(name: &'static str, value: &str) -> PathResult<()> {
    if value.is_empty() {
        return Err(PathError::EmptySegment { name });
    }
    Ok(())
}

fn require_any(name: &'static str, values: &[&str]) -> PathResult<()> {
    if values.is_empty() {
        return Err(PathError::EmptyCollection { name });
    }
    Ok(())
}

/// Normalize a path suffix by stripping exactly one leading `/`.
///
/// # Errors
///
/// Returns [`PathError::EmptySegment`] when the suffix is empty.
pub fn normalize_suffix(suffix: &str) -> PathResult<&str> {
    require("suffix", suffix)?;
    Ok(suffix.strip_prefix('/').unwrap_or(suffix))
}

/// Path addressing a whole index: `"<index>/"`, or `"<index>/<suffix>"`.
///
/// # Errors
///
/// Returns [`PathError::EmptySegment`] when the index or suffix is empty.
pub fn index_path(index: &str, suffix: Option<&str>) -> PathResult<String> {
    require("index", index)?;
    let index = encode(index);
    match suffix {
        Some(suffix) => Ok(format!("{index}/{}", normalize_suffix(suffix)?)),
        None => Ok(format!("{index}/")),
    }
}

/// Multi-index variant of [`index_path`]; the list is comma-joined
/// before encoding.
///
/// # Errors
///
/// Returns [`PathError::EmptyCollection`] when the list is empty, plus
/// the [`index_path`] errors.
pub fn multi_index_path(indices: &[&str], suffix: Option<&str>) -> PathResult<String> {
    require_any("indices", indices)?;
    index_path(&indices.join(","), suffix)
}

/// Path addressing a type within an index: `"<index>/<type>/"`, or
/// `"<index>/<type>/<suffix>"`.
///
/// # Errors
///
/// Returns [`PathError::EmptySegment`] when the index, type or suffix is
/// empty.
pub fn index_type_path(index: &str, doc_type: &str, suffix: Option<&str>) -> PathResult<String> {
    require("index", index)?;
    require("type", doc_type)?;
    let index = encode(index);
    let doc_type = encode(doc_type);
    match suffix {
        Some(suffix) => Ok(format!("{index}/{doc_type}/{}", normalize_suffix(suffix)?)),
        None => Ok(format!("{index}/{doc_type}/")),
    }
}

/// Multi-index/multi-type variant of [`index_type_path`]; each list is
/// comma-joined independently before encoding.
///
/// # Errors
///
/// Returns [`PathError::EmptyCollection`] when either list is empty,
/// plus the [`index_type_path`] errors.
pub fn multi_index_type_path(
    indices: &[&str],
    types: &[&str],
    suffix: Option<&str>,
) -> PathResult<String> {
    require_any("indices", indices)?;
    require_any("types", types)?;
    index_type_path(&indices.join(","), &types.join(","), suffix)
}

/// Path addressing one document: `"<index>/<type>/<id>"`, or
/// `"<index>/<type>/<id>/<suffix>"`.
///
/// # Errors
///
/// Returns [`PathError::EmptySegment`] when any of index, type, id or
/// suffix is empty.
pub fn index_type_id_path(
    index: &str,
    doc_type: &str,
    id: &str,
    suffix: Option<&str>,
) -> PathResult<String> {
    require("index", index)?;
    require("type", doc_type)?;
    require("id", id)?;
    let index = encode(index);
    let doc_type = encode(doc_type);
    let id = encode(id);
    match suffix {
        Some(suffix) => Ok(format!(
            "{index}/{doc_type}/{id}/{}",
            normalize_suffix(suffix)?
        )),
        None => Ok(format!("{index}/{doc_type}/{id}")),
    }
}
