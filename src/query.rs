//! Structured query specification and its translation into the backend's
//! query representation.
//!
//! Filters and the structured form of populate are opaque JSON: the backend
//! owns their grammar (`$contains`, nested relation maps, ...) and this
//! layer never re-shapes them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filter/pagination/sort/populate specification for a collection read.
///
/// Every axis is independently optional. An absent axis means "do not
/// constrain this axis" — never "use a default zero value". The backend
/// treats an explicitly-empty filter differently from an absent one, so
/// absent fields must stay absent all the way to the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Value>,
}

/// Page-based pagination. Only the supplied keys reach the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl QuerySpec {
    /// True when no axis is constrained.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Translate into the backend's query mapping.
    ///
    /// Produces exactly the keys whose source field is present: `filters`,
    /// `pagination`, `sort`, `populate`. Values pass through opaque.
    pub fn to_query_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(filters) = &self.filters {
            map.insert("filters".into(), filters.clone());
        }
        if let Some(pagination) = &self.pagination {
            let value = serde_json::to_value(pagination)
                .expect("Pagination must serialize to JSON Value");
            map.insert("pagination".into(), value);
        }
        if let Some(sort) = &self.sort {
            let tokens = sort.iter().cloned().map(Value::String).collect();
            map.insert("sort".into(), Value::Array(tokens));
        }
        if let Some(populate) = &self.populate {
            map.insert("populate".into(), populate.clone());
        }
        map
    }

    /// Flatten the query mapping into wire key/value pairs using the
    /// backend's bracket convention:
    ///
    /// `{"filters": {"title": {"$contains": "x"}}}` →
    /// `filters[title][$contains]=x`, arrays as `sort[0]=...`.
    ///
    /// Percent-encoding is left to the HTTP client.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in self.to_query_map() {
            flatten_value(&key, &value, &mut pairs);
        }
        pairs
    }
}

fn flatten_value(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_value(&format!("{prefix}[{key}]"), nested, out);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_value(&format!("{prefix}[{index}]"), nested, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Null => out.push((prefix.to_string(), String::new())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
