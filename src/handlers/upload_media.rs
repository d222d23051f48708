use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::protocol::{AdapterError, ToolResult, UploadMediaParams};
use crate::strapi::StrapiBackend;

/// Handle an `upload_media` tool call.
///
/// Decoding happens before the gateway is touched, so a bad payload never
/// reaches the network.
pub async fn handle<B: StrapiBackend>(params: UploadMediaParams, backend: &B) -> ToolResult {
    let bytes = match decode_file_data(&params.file_data) {
        Ok(bytes) => bytes,
        Err(err) => return err.into(),
    };

    match backend
        .upload_media(bytes, &params.file_name, &params.file_type)
        .await
    {
        Ok(asset) => ToolResult::text(
            serde_json::to_string_pretty(&asset).expect("asset record must serialize to JSON"),
        ),
        Err(err) => err.into(),
    }
}

/// Base64-decode `fileData`, stripping an optional `data:<mime>;base64,`
/// prefix first.
pub fn decode_file_data(raw: &str) -> Result<Vec<u8>, AdapterError> {
    let encoded = match raw.split_once("base64,") {
        Some((head, rest)) if head.starts_with("data:") => rest,
        _ => raw,
    };

    STANDARD
        .decode(encoded)
        .map_err(|e| AdapterError::InvalidParams(format!("fileData is not valid base64: {e}")))
}
