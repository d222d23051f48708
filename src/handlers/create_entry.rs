use crate::protocol::{CreateEntryParams, ToolResult};
use crate::strapi::StrapiBackend;

/// Handle a `create_entry` tool call. The payload is opaque; the gateway
/// wraps it in the backend's `{ "data": ... }` envelope on the wire.
pub async fn handle<B: StrapiBackend>(params: CreateEntryParams, backend: &B) -> ToolResult {
    match backend.create_entry(&params.content_type, &params.data).await {
        Ok(record) => ToolResult::text(
            serde_json::to_string_pretty(&record).expect("entry record must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}
