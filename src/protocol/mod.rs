pub mod request;
pub mod response;

pub use request::{
    CreateEntryParams, DeleteEntryParams, GetEntriesParams, GetEntryParams, JsonRpcRequest,
    ReadResourceParams, RpcId, ToolCallParams, UpdateEntryParams, UploadMediaParams,
};
pub use response::{
    AdapterError, ErrorCode, ErrorPayload, JsonRpcError, JsonRpcResponse, ToolResult,
    ToolResultContent,
};
