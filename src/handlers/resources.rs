//! The protocol's two resource-read paths: enumerate addressable resources
//! and read one resource by address.

use serde_json::{json, Value};

use crate::protocol::AdapterError;
use crate::resource::{format_address, parse_address};
use crate::server::ServerState;
use crate::strapi::StrapiBackend;

/// Handle `resources/list`: one resource per content-type descriptor,
/// named from directory metadata.
pub async fn list<B: StrapiBackend>(
    state: &mut ServerState<B>,
) -> Result<Value, AdapterError> {
    let types = state.content_types.get_or_fetch(&state.backend).await?;

    let resources: Vec<Value> = types
        .iter()
        .map(|ct| {
            json!({
                "uri": format_address(&ct.uid, None),
                "mimeType": "application/json",
                "name": ct.display_name,
                "description": ct.description,
            })
        })
        .collect();

    Ok(json!({ "resources": resources }))
}

/// Handle `resources/read`: parse the address, then route to get-or-list.
///
/// An address with an entry id reads that single record; any embedded
/// query is ignored (single-record reads are not filterable). Without an
/// id, the collection is listed with the address-embedded query.
pub async fn read<B: StrapiBackend>(
    uri: &str,
    state: &mut ServerState<B>,
) -> Result<Value, AdapterError> {
    let address = parse_address(uri)?;

    let payload = match &address.entry_id {
        Some(id) => {
            state
                .backend
                .get_entry(&address.content_type_uid, id)
                .await?
        }
        None => {
            state
                .backend
                .list_entries(&address.content_type_uid, address.query.as_ref())
                .await?
        }
    };

    let text =
        serde_json::to_string_pretty(&payload).expect("resource payload must serialize to JSON");

    Ok(json!({
        "contents": [
            {
                "uri": uri,
                "mimeType": "application/json",
                "text": text,
            }
        ]
    }))
}
