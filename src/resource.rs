//! Resource address scheme:
//! `strapi://content-type/{uid}[/{entryId}][?query]`.
//!
//! Parsing is purely structural — no backend call is ever made here. The
//! embedded query string carries the same axes as [`QuerySpec`], encoded
//! per the rules in [`parse_query`].

use serde_json::Value;
use url::form_urlencoded;

use crate::protocol::AdapterError;
use crate::query::{Pagination, QuerySpec};

/// Fixed address prefix: scheme literal plus the content-type segment.
pub const ADDRESS_PREFIX: &str = "strapi://content-type/";

/// A parsed resource address. Request-scoped; never persisted.
///
/// When `entry_id` is present the read path ignores `query` — single-record
/// reads are not filterable. The parser itself stays total and records
/// whatever the address carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAddress {
    pub content_type_uid: String,
    pub entry_id: Option<String>,
    pub query: Option<QuerySpec>,
}

/// Build the address advertised for a content type, or for one entry of it.
pub fn format_address(uid: &str, entry_id: Option<&str>) -> String {
    match entry_id {
        Some(id) => format!("{ADDRESS_PREFIX}{uid}/{id}"),
        None => format!("{ADDRESS_PREFIX}{uid}"),
    }
}

/// Parse an address string against the fixed grammar.
///
/// The uid and entry id are any non-empty run of characters excluding `/`
/// and `?`. Anything that does not match is `InvalidAddress`.
pub fn parse_address(raw: &str) -> Result<ResourceAddress, AdapterError> {
    let rest = raw.strip_prefix(ADDRESS_PREFIX).ok_or_else(|| {
        AdapterError::InvalidAddress(format!(
            "address must start with {ADDRESS_PREFIX}, got: {raw}"
        ))
    })?;

    let (path, query_str) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let (uid, entry_id) = match path.split_once('/') {
        Some((uid, id)) => {
            if id.is_empty() || id.contains('/') {
                return Err(AdapterError::InvalidAddress(format!(
                    "malformed entry segment in address: {raw}"
                )));
            }
            (uid, Some(id.to_string()))
        }
        None => (path, None),
    };

    if uid.is_empty() {
        return Err(AdapterError::InvalidAddress(format!(
            "address is missing a content-type uid: {raw}"
        )));
    }

    let query = match query_str {
        Some(q) if !q.is_empty() => parse_query(q)?,
        _ => None,
    };

    Ok(ResourceAddress {
        content_type_uid: uid.to_string(),
        entry_id,
        query,
    })
}

/// Decode an address-embedded query string into a [`QuerySpec`].
///
/// - `filters` must be JSON; invalid JSON is `InvalidQuery`.
/// - `page` / `pageSize` are base-10 integers; either alone produces a
///   pagination object with only that key set.
/// - `sort` splits on `,` into raw tokens; the `field:direction` token
///   grammar is the backend's to validate.
/// - `populate` tries JSON first, then falls back to a `,`-split string
///   list. The query-string encoding is ambiguous between "JSON list" and
///   "comma string" without this two-stage heuristic.
///
/// Unrecognized keys are ignored. Returns `None` when nothing recognized
/// was present, so absent axes stay absent downstream.
pub fn parse_query(raw: &str) -> Result<Option<QuerySpec>, AdapterError> {
    let mut spec = QuerySpec::default();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match &*key {
            "filters" => {
                let filters: Value = serde_json::from_str(&value).map_err(|e| {
                    AdapterError::InvalidQuery(format!("filters must be valid JSON: {e}"))
                })?;
                spec.filters = Some(filters);
            }
            "page" => {
                let page = value.parse::<u64>().map_err(|_| {
                    AdapterError::InvalidQuery(format!("page must be an integer, got: {value}"))
                })?;
                spec.pagination.get_or_insert_with(Pagination::default).page = Some(page);
            }
            "pageSize" => {
                let page_size = value.parse::<u64>().map_err(|_| {
                    AdapterError::InvalidQuery(format!(
                        "pageSize must be an integer, got: {value}"
                    ))
                })?;
                spec.pagination
                    .get_or_insert_with(Pagination::default)
                    .page_size = Some(page_size);
            }
            "sort" => {
                spec.sort = Some(value.split(',').map(str::to_string).collect());
            }
            "populate" => {
                spec.populate = Some(match serde_json::from_str::<Value>(&value) {
                    Ok(parsed) => parsed,
                    Err(_) => Value::Array(
                        value
                            .split(',')
                            .map(|s| Value::String(s.to_string()))
                            .collect(),
                    ),
                });
            }
            _ => {}
        }
    }

    Ok(if spec.is_empty() { None } else { Some(spec) })
}
