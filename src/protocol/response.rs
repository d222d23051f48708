use serde::{Deserialize, Serialize};

use super::request::RpcId;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self { code: -32700, message: "Parse error".into(), data: None }
    }

    pub fn invalid_request() -> Self {
        Self { code: -32600, message: "Invalid Request".into(), data: None }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self { code: -32600, message: detail.into(), data: None }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: -32602, message: detail.into(), data: None }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Adapter domain errors
// ---------------------------------------------------------------------------

/// Every failure the translation layer can surface. Each variant carries
/// the underlying cause's message; no failure is wrapped more than once.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdapterError {
    #[error("Invalid resource address: {0}")]
    InvalidAddress(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("Strapi request failed: {0}")]
    BackendUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Wire form of an [`AdapterError`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidAddress,
    InvalidQuery,
    InvalidParams,
    BackendUnavailable,
    NotFound,
    ValidationFailed,
}

impl ErrorCode {
    /// Map to the corresponding JSON-RPC 2.0 error code.
    ///
    /// Local validation failures → -32602 (Invalid params)
    /// Backend-side failures     → -32603 (Internal error)
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::InvalidAddress | Self::InvalidQuery | Self::InvalidParams => -32602,
            Self::BackendUnavailable | Self::NotFound | Self::ValidationFailed => -32603,
        }
    }
}

impl AdapterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidAddress(_) => ErrorCode::InvalidAddress,
            Self::InvalidQuery(_) => ErrorCode::InvalidQuery,
            Self::InvalidParams(_) => ErrorCode::InvalidParams,
            Self::BackendUnavailable(_) => ErrorCode::BackendUnavailable,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Structured error payload carried in JSON-RPC `data` and in the text of
/// tool error results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&AdapterError> for ErrorPayload {
    fn from(err: &AdapterError) -> Self {
        Self {
            error: ErrorBody {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

/// Convert an adapter error into a JSON-RPC error.
///
/// The JSON-RPC `code` is derived from the error kind.
/// The JSON-RPC `message` is the human-readable message.
/// The structured payload is carried in `data` for structured clients.
impl From<AdapterError> for JsonRpcError {
    fn from(err: AdapterError) -> Self {
        let payload = ErrorPayload::from(&err);
        Self {
            code: err.code().json_rpc_code(),
            message: err.to_string(),
            data: Some(
                serde_json::to_value(&payload)
                    .expect("ErrorPayload must serialize to JSON Value"),
            ),
        }
    }
}

/// Convert an adapter error into a tool result with `isError: true`.
///
/// The text content is the JSON-serialized [`ErrorPayload`], preserving
/// the structured error for clients that inspect tool output.
impl From<AdapterError> for ToolResult {
    fn from(err: AdapterError) -> Self {
        let payload = ErrorPayload::from(&err);
        let json =
            serde_json::to_string(&payload).expect("ErrorPayload must serialize to JSON string");
        Self::error(format!("{json}\n"))
    }
}
