//! Shared test support: a recording backend double and dispatch helpers.

#![allow(dead_code)]

use std::cell::RefCell;

use serde_json::{json, Value};

use mcp_strapi_server::handlers;
use mcp_strapi_server::protocol::{AdapterError, JsonRpcRequest, JsonRpcResponse, RpcId};
use mcp_strapi_server::query::QuerySpec;
use mcp_strapi_server::server::ServerState;
use mcp_strapi_server::strapi::{ContentTypeDescriptor, StrapiBackend};

/// One recorded gateway call, with the arguments the dispatcher passed down.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchContentTypes,
    ListEntries {
        uid: String,
        query: Option<QuerySpec>,
    },
    GetEntry {
        uid: String,
        id: String,
    },
    CreateEntry {
        uid: String,
        data: Value,
    },
    UpdateEntry {
        uid: String,
        id: String,
        data: Value,
    },
    DeleteEntry {
        uid: String,
        id: String,
    },
    UploadMedia {
        bytes: Vec<u8>,
        file_name: String,
        file_type: String,
    },
}

/// Backend double: records every call, answers with canned payloads, and
/// fails every operation when `fail_with` is set.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub fail_with: Option<AdapterError>,
}

impl RecordingBackend {
    pub fn failing(err: AdapterError) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: Call) -> Result<(), AdapterError> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn article_descriptor() -> ContentTypeDescriptor {
    ContentTypeDescriptor {
        uid: "api::article.article".to_string(),
        collection_name: "article".to_string(),
        display_name: "Article".to_string(),
        description: "Blog articles".to_string(),
    }
}

pub fn page_descriptor() -> ContentTypeDescriptor {
    ContentTypeDescriptor {
        uid: "api::page.page".to_string(),
        collection_name: "page".to_string(),
        display_name: "Page".to_string(),
        description: String::new(),
    }
}

pub fn sample_record() -> Value {
    json!({
        "id": 1,
        "attributes": {
            "title": "Hello world",
            "body": "First post"
        }
    })
}

impl StrapiBackend for RecordingBackend {
    async fn fetch_content_types(&self) -> Result<Vec<ContentTypeDescriptor>, AdapterError> {
        self.record(Call::FetchContentTypes)?;
        Ok(vec![article_descriptor(), page_descriptor()])
    }

    async fn list_entries(
        &self,
        uid: &str,
        query: Option<&QuerySpec>,
    ) -> Result<Value, AdapterError> {
        self.record(Call::ListEntries {
            uid: uid.to_string(),
            query: query.cloned(),
        })?;
        Ok(json!({
            "data": [sample_record()],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 1 } }
        }))
    }

    async fn get_entry(&self, uid: &str, id: &str) -> Result<Value, AdapterError> {
        self.record(Call::GetEntry {
            uid: uid.to_string(),
            id: id.to_string(),
        })?;
        Ok(sample_record())
    }

    async fn create_entry(&self, uid: &str, data: &Value) -> Result<Value, AdapterError> {
        self.record(Call::CreateEntry {
            uid: uid.to_string(),
            data: data.clone(),
        })?;
        Ok(sample_record())
    }

    async fn update_entry(
        &self,
        uid: &str,
        id: &str,
        data: &Value,
    ) -> Result<Value, AdapterError> {
        self.record(Call::UpdateEntry {
            uid: uid.to_string(),
            id: id.to_string(),
            data: data.clone(),
        })?;
        Ok(sample_record())
    }

    async fn delete_entry(&self, uid: &str, id: &str) -> Result<(), AdapterError> {
        self.record(Call::DeleteEntry {
            uid: uid.to_string(),
            id: id.to_string(),
        })
    }

    async fn upload_media(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        file_type: &str,
    ) -> Result<Value, AdapterError> {
        self.record(Call::UploadMedia {
            bytes,
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
        })?;
        Ok(json!({
            "id": 1,
            "name": file_name,
            "mime": file_type,
            "url": "/uploads/upload_1.bin"
        }))
    }
}

pub fn test_state() -> ServerState<RecordingBackend> {
    ServerState::new(RecordingBackend::default())
}

/// Dispatch a request through the full JSON-RPC path.
pub async fn dispatch_request(
    state: &mut ServerState<RecordingBackend>,
    method: &str,
    params: Option<Value>,
) -> JsonRpcResponse {
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Number(1)),
        method: method.into(),
        params,
    };
    handlers::dispatch(&req, state)
        .await
        .expect("request expects a response")
}

/// Call a tool via `tools/call` and return the tool result JSON.
pub async fn call_tool(
    state: &mut ServerState<RecordingBackend>,
    name: &str,
    arguments: Option<Value>,
) -> Value {
    let params = match arguments {
        Some(args) => json!({ "name": name, "arguments": args }),
        None => json!({ "name": name }),
    };
    let response = dispatch_request(state, "tools/call", Some(params)).await;
    response.result.expect("tools/call returns a result")
}

/// Text of the first content block in a tool result.
pub fn result_text(tool_result: &Value) -> &str {
    tool_result["content"][0]["text"]
        .as_str()
        .expect("tool result has text content")
}

/// Parse the structured error payload out of an error tool result.
pub fn error_code(tool_result: &Value) -> String {
    assert_eq!(
        tool_result["isError"].as_bool(),
        Some(true),
        "expected an error tool result, got: {tool_result}"
    );
    let payload: Value =
        serde_json::from_str(result_text(tool_result)).expect("error text is JSON");
    payload["error"]["code"]
        .as_str()
        .expect("error payload has a code")
        .to_string()
}
