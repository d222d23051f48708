//! Production [`StrapiBackend`] backed by reqwest.
//!
//! Every failure surfaces once, immediately: no retry policy, no timeout
//! beyond the transport default.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::content_types::descriptors_from_listing;
use super::{collection_from_uid, ContentTypeDescriptor, StrapiBackend};
use crate::config::ServerConfig;
use crate::protocol::AdapterError;
use crate::query::QuerySpec;

/// Bearer-authenticated HTTP client for one Strapi instance.
pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    dev_mode: bool,
}

impl StrapiClient {
    pub fn new(config: &ServerConfig) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            http,
            base_url: config.strapi_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            dev_mode: config.dev_mode,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.endpoint(path)).bearer_auth(&self.api_token)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        write: bool,
        what: &str,
    ) -> Result<reqwest::Response, AdapterError> {
        let response = request.send().await.map_err(|e| {
            eprintln!("Backend request failed ({what}): {e}");
            AdapterError::BackendUnavailable(format!("{what}: {e}"))
        })?;
        check_status(response, write, what).await
    }
}

/// Map a non-2xx response onto the adapter's error kinds: 404 is `NotFound`,
/// any other 4xx on a write is `ValidationFailed`, everything else is
/// `BackendUnavailable`. The response body rides along in the message.
async fn check_status(
    response: reqwest::Response,
    write: bool,
    what: &str,
) -> Result<reqwest::Response, AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = if body.is_empty() {
        format!("{what}: backend returned {status}")
    } else {
        format!("{what}: backend returned {status}: {body}")
    };

    if status == StatusCode::NOT_FOUND {
        Err(AdapterError::NotFound(detail))
    } else if write && status.is_client_error() {
        Err(AdapterError::ValidationFailed(detail))
    } else {
        Err(AdapterError::BackendUnavailable(detail))
    }
}

async fn read_json(response: reqwest::Response, what: &str) -> Result<Value, AdapterError> {
    response
        .json()
        .await
        .map_err(|e| AdapterError::BackendUnavailable(format!("{what}: malformed response: {e}")))
}

/// Strip the backend's `{ "data": ... }` response envelope so callers work
/// only with unwrapped record payloads.
fn unwrap_record(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(record) => record,
            None => Value::Object(map),
        },
        other => other,
    }
}

impl StrapiBackend for StrapiClient {
    async fn fetch_content_types(&self) -> Result<Vec<ContentTypeDescriptor>, AdapterError> {
        // The content-type-builder API is only reachable on development
        // instances; its response nests metadata differently from the
        // content-manager API (handled in descriptors_from_listing).
        let path = if self.dev_mode {
            "content-type-builder/content-types"
        } else {
            "api/content-types"
        };

        let what = "listing content types";
        let response = self.send(self.get(path), false, what).await?;
        let body = read_json(response, what).await?;
        descriptors_from_listing(&body)
    }

    async fn list_entries(
        &self,
        uid: &str,
        query: Option<&QuerySpec>,
    ) -> Result<Value, AdapterError> {
        let collection = collection_from_uid(uid);
        let what = format!("listing entries of {uid}");

        let mut request = self.get(&format!("api/{collection}"));
        if let Some(query) = query {
            let pairs = query.to_query_pairs();
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
        }

        let response = self.send(request, false, &what).await?;
        // The page shape { data, meta } is the operation's result; keep it.
        read_json(response, &what).await
    }

    async fn get_entry(&self, uid: &str, id: &str) -> Result<Value, AdapterError> {
        let collection = collection_from_uid(uid);
        let what = format!("fetching entry {id} of {uid}");

        let request = self.get(&format!("api/{collection}/{id}"));
        let response = self.send(request, false, &what).await?;
        Ok(unwrap_record(read_json(response, &what).await?))
    }

    async fn create_entry(&self, uid: &str, data: &Value) -> Result<Value, AdapterError> {
        let collection = collection_from_uid(uid);
        let what = format!("creating entry in {uid}");

        let request = self
            .http
            .post(self.endpoint(&format!("api/{collection}")))
            .bearer_auth(&self.api_token)
            .json(&json!({ "data": data }));
        let response = self.send(request, true, &what).await?;
        Ok(unwrap_record(read_json(response, &what).await?))
    }

    async fn update_entry(
        &self,
        uid: &str,
        id: &str,
        data: &Value,
    ) -> Result<Value, AdapterError> {
        let collection = collection_from_uid(uid);
        let what = format!("updating entry {id} of {uid}");

        let request = self
            .http
            .put(self.endpoint(&format!("api/{collection}/{id}")))
            .bearer_auth(&self.api_token)
            .json(&json!({ "data": data }));
        let response = self.send(request, true, &what).await?;
        Ok(unwrap_record(read_json(response, &what).await?))
    }

    async fn delete_entry(&self, uid: &str, id: &str) -> Result<(), AdapterError> {
        let collection = collection_from_uid(uid);
        let what = format!("deleting entry {id} of {uid}");

        let request = self
            .http
            .delete(self.endpoint(&format!("api/{collection}/{id}")))
            .bearer_auth(&self.api_token);
        self.send(request, false, &what).await?;
        Ok(())
    }

    async fn upload_media(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        file_type: &str,
    ) -> Result<Value, AdapterError> {
        let what = format!("uploading {file_name}");

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(file_type)
            .map_err(|e| {
                AdapterError::InvalidParams(format!("fileType is not a valid MIME type: {e}"))
            })?;
        let form = Form::new().part("files", part);

        let request = self
            .http
            .post(self.endpoint("api/upload"))
            .bearer_auth(&self.api_token)
            .multipart(form);
        let response = self.send(request, true, &what).await?;
        let body = read_json(response, &what).await?;

        // The upload endpoint answers with an array of asset records; only
        // the first is returned. Multi-file upload is out of scope.
        match body {
            Value::Array(mut records) if !records.is_empty() => Ok(records.remove(0)),
            Value::Array(_) => Err(AdapterError::BackendUnavailable(format!(
                "{what}: upload returned no asset records"
            ))),
            _ => Err(AdapterError::BackendUnavailable(format!(
                "{what}: upload response was not an array of asset records"
            ))),
        }
    }
}
