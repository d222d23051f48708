use crate::protocol::ToolResult;
use crate::server::ServerState;
use crate::strapi::StrapiBackend;

/// Handle a `list_content_types` tool call.
///
/// Served from the process-wide cache; only the first call within a
/// process issues a backend fetch.
pub async fn handle<B: StrapiBackend>(state: &mut ServerState<B>) -> ToolResult {
    match state.content_types.get_or_fetch(&state.backend).await {
        Ok(types) => ToolResult::text(
            serde_json::to_string_pretty(&*types)
                .expect("content-type descriptors must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}
