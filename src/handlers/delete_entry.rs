use crate::protocol::{DeleteEntryParams, ToolResult};
use crate::strapi::StrapiBackend;

/// Handle a `delete_entry` tool call.
///
/// The backend returns no body on delete, so the result is a confirmation
/// string rather than JSON.
pub async fn handle<B: StrapiBackend>(params: DeleteEntryParams, backend: &B) -> ToolResult {
    match backend.delete_entry(&params.content_type, &params.id).await {
        Ok(()) => ToolResult::text(format!(
            "Deleted entry {} from {}",
            params.id, params.content_type
        )),
        Err(err) => err.into(),
    }
}
