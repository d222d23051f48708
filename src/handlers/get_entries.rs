use crate::protocol::{GetEntriesParams, ToolResult};
use crate::strapi::StrapiBackend;

/// Handle a `get_entries` tool call.
///
/// Returns the backend's page shape `{ data, meta }` as formatted JSON.
pub async fn handle<B: StrapiBackend>(params: GetEntriesParams, backend: &B) -> ToolResult {
    let query = if params.query.is_empty() {
        None
    } else {
        Some(&params.query)
    };

    match backend.list_entries(&params.content_type, query).await {
        Ok(page) => ToolResult::text(
            serde_json::to_string_pretty(&page).expect("entry page must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}
