//! Strapi backend gateway: the content-type directory and the generic
//! entry CRUD surface.
//!
//! [`StrapiBackend`] is the seam the dispatcher programs against;
//! [`client::StrapiClient`] is its production implementation and the only
//! code in the crate that issues network calls.

pub mod client;
pub mod content_types;

use serde_json::Value;

use crate::protocol::AdapterError;
use crate::query::QuerySpec;
pub use content_types::{ContentTypeCache, ContentTypeDescriptor};

/// Backend operations, each keyed by a content-type UID. Entry payloads and
/// query values are opaque JSON in both directions.
///
/// The server runs one request at a time on a current-thread runtime, so
/// implementations need no `Send` bounds and no interior locking.
#[allow(async_fn_in_trait)]
pub trait StrapiBackend {
    /// Fetch all content-type descriptors, internal namespaces already
    /// filtered out.
    async fn fetch_content_types(&self) -> Result<Vec<ContentTypeDescriptor>, AdapterError>;

    /// List entries of a collection. Returns the backend's page shape
    /// `{ "data": [...], "meta": {...} }` unmodified.
    async fn list_entries(
        &self,
        uid: &str,
        query: Option<&QuerySpec>,
    ) -> Result<Value, AdapterError>;

    /// Fetch one entry, unwrapped from the backend's `data` envelope.
    async fn get_entry(&self, uid: &str, id: &str) -> Result<Value, AdapterError>;

    /// Create an entry from an opaque payload; returns the created record.
    async fn create_entry(&self, uid: &str, data: &Value) -> Result<Value, AdapterError>;

    /// Update an entry from an opaque payload; returns the updated record.
    async fn update_entry(&self, uid: &str, id: &str, data: &Value)
        -> Result<Value, AdapterError>;

    /// Delete an entry. The backend returns no content.
    async fn delete_entry(&self, uid: &str, id: &str) -> Result<(), AdapterError>;

    /// Upload one binary asset. Returns the first uploaded asset record —
    /// the upload endpoint answers with an array, and multi-file upload is
    /// out of scope.
    async fn upload_media(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        file_type: &str,
    ) -> Result<Value, AdapterError>;
}

/// REST path segment for a content-type UID.
///
/// The UID is a two-part identifier `namespace.collection`
/// (e.g. `api::article.article`); the collection segment names the REST
/// path verbatim.
pub fn collection_from_uid(uid: &str) -> &str {
    match uid.rsplit_once('.') {
        Some((_, collection)) if !collection.is_empty() => collection,
        _ => uid,
    }
}
