use serde::{Deserialize, Serialize};

use crate::query::QuerySpec;

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Arguments for the `get_entries` tool. Every query axis is optional;
/// absent axes leave the backend unconstrained.
#[derive(Debug, Clone, Deserialize)]
pub struct GetEntriesParams {
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(flatten)]
    pub query: QuerySpec,
}

/// Arguments for the `get_entry` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetEntryParams {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub id: String,
}

/// Arguments for the `create_entry` tool. `data` is the entry payload,
/// passed through to the backend without inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryParams {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub data: serde_json::Value,
}

/// Arguments for the `update_entry` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEntryParams {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub id: String,
    pub data: serde_json::Value,
}

/// Arguments for the `delete_entry` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEntryParams {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub id: String,
}

/// Arguments for the `upload_media` tool. `file_data` is base64, with or
/// without a `data:<mime>;base64,` prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadMediaParams {
    #[serde(rename = "fileData")]
    pub file_data: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
}
