use crate::protocol::{ToolResult, UpdateEntryParams};
use crate::strapi::StrapiBackend;

/// Handle an `update_entry` tool call.
pub async fn handle<B: StrapiBackend>(params: UpdateEntryParams, backend: &B) -> ToolResult {
    match backend
        .update_entry(&params.content_type, &params.id, &params.data)
        .await
    {
        Ok(record) => ToolResult::text(
            serde_json::to_string_pretty(&record).expect("entry record must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}
