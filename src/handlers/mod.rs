pub mod create_entry;
pub mod delete_entry;
pub mod get_entries;
pub mod get_entry;
pub mod list_content_types;
pub mod resources;
pub mod update_entry;
pub mod upload_media;

use serde::de::DeserializeOwned;

use crate::protocol::{
    AdapterError, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ReadResourceParams,
    ToolCallParams, ToolResult,
};
use crate::server::ServerState;
use crate::strapi::StrapiBackend;

/// The closed set of named operations. One handler per variant; the match
/// in [`dispatch_tool_call`] is exhaustive, so adding a variant without a
/// handler fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    ListContentTypes,
    GetEntries,
    GetEntry,
    CreateEntry,
    UpdateEntry,
    DeleteEntry,
    UploadMedia,
}

impl ToolKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list_content_types" => Some(Self::ListContentTypes),
            "get_entries" => Some(Self::GetEntries),
            "get_entry" => Some(Self::GetEntry),
            "create_entry" => Some(Self::CreateEntry),
            "update_entry" => Some(Self::UpdateEntry),
            "delete_entry" => Some(Self::DeleteEntry),
            "upload_media" => Some(Self::UploadMedia),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ListContentTypes => "list_content_types",
            Self::GetEntries => "get_entries",
            Self::GetEntry => "get_entry",
            Self::CreateEntry => "create_entry",
            Self::UpdateEntry => "update_entry",
            Self::DeleteEntry => "delete_entry",
            Self::UploadMedia => "upload_media",
        }
    }
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch<B: StrapiBackend>(
    req: &JsonRpcRequest,
    state: &mut ServerState<B>,
) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": "mcp-strapi-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), tool_listing())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, state).await;
            let result_json = serde_json::to_value(&tool_result)
                .expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        // Resource-read failures propagate as hard protocol faults, unlike
        // tool failures, which render as error tool-results above.
        "resources/list" => Some(match resources::list(state).await {
            Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
            Err(err) => JsonRpcResponse::error(req.id.clone(), err.into()),
        }),

        "resources/read" => {
            let params: ReadResourceParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid resources/read params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for resources/read"),
                    ));
                }
            };

            Some(match resources::read(&params.uri, state).await {
                Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
                Err(err) => JsonRpcResponse::error(req.id.clone(), err.into()),
            })
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Deserialize a tool's arguments, mapping absence and shape mismatches to
/// `InvalidParams` so they never reach the backend.
fn tool_args<T: DeserializeOwned>(
    tool: &str,
    arguments: Option<&serde_json::Value>,
) -> Result<T, AdapterError> {
    let value = arguments.ok_or_else(|| {
        AdapterError::InvalidParams(format!("missing arguments for {tool}"))
    })?;
    serde_json::from_value(value.clone())
        .map_err(|e| AdapterError::InvalidParams(format!("invalid arguments for {tool}: {e}")))
}

async fn dispatch_tool_call<B: StrapiBackend>(
    params: &ToolCallParams,
    state: &mut ServerState<B>,
) -> ToolResult {
    let Some(kind) = ToolKind::from_name(&params.name) else {
        return ToolResult::error(format!("Unknown tool: {}", params.name));
    };

    let args = params.arguments.as_ref();
    match kind {
        ToolKind::ListContentTypes => list_content_types::handle(state).await,
        ToolKind::GetEntries => match tool_args(kind.name(), args) {
            Ok(p) => get_entries::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
        ToolKind::GetEntry => match tool_args(kind.name(), args) {
            Ok(p) => get_entry::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
        ToolKind::CreateEntry => match tool_args(kind.name(), args) {
            Ok(p) => create_entry::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
        ToolKind::UpdateEntry => match tool_args(kind.name(), args) {
            Ok(p) => update_entry::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
        ToolKind::DeleteEntry => match tool_args(kind.name(), args) {
            Ok(p) => delete_entry::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
        ToolKind::UploadMedia => match tool_args(kind.name(), args) {
            Ok(p) => upload_media::handle(p, &state.backend).await,
            Err(e) => e.into(),
        },
    }
}

/// The `tools/list` payload. Argument schemas are descriptive: enforcement
/// is the typed deserialization in [`tool_args`], not a schema validator.
fn tool_listing() -> serde_json::Value {
    serde_json::json!({
        "tools": [
            {
                "name": "list_content_types",
                "description": "List all content types available in the Strapi instance",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "get_entries",
                "description": "List entries of a content type, with optional filters, pagination, sort, and relation population",
                "inputSchema": {
                    "type": "object",
                    "required": ["contentType"],
                    "properties": {
                        "contentType": {
                            "type": "string",
                            "description": "Content type UID, e.g. api::article.article"
                        },
                        "filters": {
                            "type": "object",
                            "description": "Strapi filter object, passed through unmodified"
                        },
                        "pagination": {
                            "type": "object",
                            "properties": {
                                "page": { "type": "integer", "minimum": 1 },
                                "pageSize": { "type": "integer", "minimum": 1 }
                            }
                        },
                        "sort": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Sort tokens of the form field:direction, e.g. title:asc"
                        },
                        "populate": {
                            "description": "Relations to include: a field name, a list of field names, or a Strapi populate object"
                        }
                    }
                }
            },
            {
                "name": "get_entry",
                "description": "Fetch a single entry by id",
                "inputSchema": {
                    "type": "object",
                    "required": ["contentType", "id"],
                    "properties": {
                        "contentType": { "type": "string" },
                        "id": { "type": "string" }
                    }
                }
            },
            {
                "name": "create_entry",
                "description": "Create a new entry; data is passed to Strapi unmodified",
                "inputSchema": {
                    "type": "object",
                    "required": ["contentType", "data"],
                    "properties": {
                        "contentType": { "type": "string" },
                        "data": { "type": "object" }
                    }
                }
            },
            {
                "name": "update_entry",
                "description": "Update an existing entry; data is passed to Strapi unmodified",
                "inputSchema": {
                    "type": "object",
                    "required": ["contentType", "id", "data"],
                    "properties": {
                        "contentType": { "type": "string" },
                        "id": { "type": "string" },
                        "data": { "type": "object" }
                    }
                }
            },
            {
                "name": "delete_entry",
                "description": "Delete an entry by id",
                "inputSchema": {
                    "type": "object",
                    "required": ["contentType", "id"],
                    "properties": {
                        "contentType": { "type": "string" },
                        "id": { "type": "string" }
                    }
                }
            },
            {
                "name": "upload_media",
                "description": "Upload a media file to the Strapi media library",
                "inputSchema": {
                    "type": "object",
                    "required": ["fileData", "fileName", "fileType"],
                    "properties": {
                        "fileData": {
                            "type": "string",
                            "description": "Base64 file content, with or without a data:<mime>;base64, prefix"
                        },
                        "fileName": { "type": "string" },
                        "fileType": {
                            "type": "string",
                            "description": "MIME type, e.g. image/jpeg"
                        }
                    }
                }
            }
        ]
    })
}
