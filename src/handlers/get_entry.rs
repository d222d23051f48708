use crate::protocol::{GetEntryParams, ToolResult};
use crate::strapi::StrapiBackend;

/// Handle a `get_entry` tool call.
pub async fn handle<B: StrapiBackend>(params: GetEntryParams, backend: &B) -> ToolResult {
    match backend.get_entry(&params.content_type, &params.id).await {
        Ok(record) => ToolResult::text(
            serde_json::to_string_pretty(&record).expect("entry record must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}
