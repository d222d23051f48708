//! Content-type directory: descriptors fetched from the backend's metadata
//! endpoint, cached for the process lifetime.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{collection_from_uid, StrapiBackend};
use crate::protocol::AdapterError;

/// UID namespaces that never surface through the adapter.
const INTERNAL_PREFIXES: [&str; 3] = ["admin::", "plugin::", "strapi::"];

/// Display metadata for one backend collection. Derived entirely from the
/// backend; immutable once fetched within a process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDescriptor {
    pub uid: String,
    pub collection_name: String,
    pub display_name: String,
    pub description: String,
}

/// Parse one metadata item into a descriptor.
///
/// The content-type-builder endpoint nests display metadata under `schema`,
/// the content-manager endpoint under `info`; the two are not guaranteed
/// field-compatible, so missing fields fall back to the UID's collection
/// segment and an empty description. Items without a `uid`, and internal
/// types, yield `None`.
fn descriptor_from_value(item: &Value) -> Option<ContentTypeDescriptor> {
    let uid = item.get("uid")?.as_str()?;
    if INTERNAL_PREFIXES.iter().any(|p| uid.starts_with(p)) {
        return None;
    }

    let meta = item.get("schema").or_else(|| item.get("info"));
    let field = |name: &str| {
        meta.and_then(|m| m.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let collection = collection_from_uid(uid);
    Some(ContentTypeDescriptor {
        uid: uid.to_string(),
        collection_name: field("collectionName").unwrap_or_else(|| collection.to_string()),
        display_name: field("displayName").unwrap_or_else(|| collection.to_string()),
        description: field("description").unwrap_or_default(),
    })
}

/// Parse a metadata listing body (`{ "data": [...] }` or a bare array).
pub fn descriptors_from_listing(
    body: &Value,
) -> Result<Vec<ContentTypeDescriptor>, AdapterError> {
    let items = body
        .get("data")
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .ok_or_else(|| {
            AdapterError::BackendUnavailable(
                "content-type listing is not an array of descriptors".to_string(),
            )
        })?;

    Ok(items.iter().filter_map(descriptor_from_value).collect())
}

/// Process-wide directory cache.
///
/// Populated on the first successful fetch, then served without a network
/// call for the rest of the process lifetime — there is no automatic
/// refresh. The generation counter and `invalidate` exist so a refresh
/// policy (TTL, explicit tool) can be added without touching call sites.
/// No locking: the server handles one request at a time.
#[derive(Debug, Default)]
pub struct ContentTypeCache {
    snapshot: Option<Arc<Vec<ContentTypeDescriptor>>>,
    generation: u64,
}

impl ContentTypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached descriptors, fetching once if empty.
    ///
    /// A failed fetch caches nothing and propagates, so a later call will
    /// try the backend again.
    pub async fn get_or_fetch<B: StrapiBackend>(
        &mut self,
        backend: &B,
    ) -> Result<Arc<Vec<ContentTypeDescriptor>>, AdapterError> {
        if let Some(snapshot) = &self.snapshot {
            return Ok(Arc::clone(snapshot));
        }

        let types = backend.fetch_content_types().await?;
        let snapshot = Arc::new(types);
        self.snapshot = Some(Arc::clone(&snapshot));
        self.generation += 1;
        Ok(snapshot)
    }

    /// Drop the snapshot; the next call fetches fresh.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    /// Bumped each time the snapshot is (re)populated.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
