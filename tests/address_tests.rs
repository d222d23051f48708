//! Resource address grammar and embedded-query decoding.

use serde_json::{json, Value};

use mcp_strapi_server::protocol::AdapterError;
use mcp_strapi_server::resource::{format_address, parse_address};

// ---------------------------------------------------------------------------
// Grammar round-trips
// ---------------------------------------------------------------------------

#[test]
fn format_then_parse_round_trips_uid() {
    let uids = [
        "api::article.article",
        "api::landing-page.landing-page",
        "api::site_config.site_config",
    ];

    for uid in uids {
        let address = format_address(uid, None);
        let parsed = parse_address(&address).unwrap();
        assert_eq!(parsed.content_type_uid, uid);
        assert_eq!(parsed.entry_id, None);
        assert_eq!(parsed.query, None);
    }
}

#[test]
fn format_then_parse_round_trips_entry_id() {
    let address = format_address("api::article.article", Some("42"));
    assert_eq!(address, "strapi://content-type/api::article.article/42");

    let parsed = parse_address(&address).unwrap();
    assert_eq!(parsed.content_type_uid, "api::article.article");
    assert_eq!(parsed.entry_id.as_deref(), Some("42"));
}

#[test]
fn malformed_addresses_are_rejected_locally() {
    let bad = [
        "",
        "strapi://content-type/",
        "strapi://content-types/api::article.article",
        "http://content-type/api::article.article",
        "strapi://content-type/api::article.article/",
        "strapi://content-type/api::article.article/1/2",
    ];

    for raw in bad {
        let err = parse_address(raw).unwrap_err();
        assert!(
            matches!(err, AdapterError::InvalidAddress(_)),
            "expected InvalidAddress for {raw:?}, got {err:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Embedded query decoding
// ---------------------------------------------------------------------------

#[test]
fn query_preserves_only_present_keys() {
    let parsed = parse_address("strapi://content-type/api::article.article?page=2").unwrap();
    let query = parsed.query.unwrap();

    let pagination = query.pagination.unwrap();
    assert_eq!(pagination.page, Some(2));
    assert_eq!(pagination.page_size, None, "absent key must stay absent");
    assert_eq!(query.filters, None);
    assert_eq!(query.sort, None);
    assert_eq!(query.populate, None);
}

#[test]
fn page_size_alone_yields_pagination() {
    let parsed =
        parse_address("strapi://content-type/api::article.article?pageSize=10").unwrap();
    let pagination = parsed.query.unwrap().pagination.unwrap();
    assert_eq!(pagination.page, None);
    assert_eq!(pagination.page_size, Some(10));
}

#[test]
fn non_integer_page_is_invalid_query() {
    let err =
        parse_address("strapi://content-type/api::article.article?page=two").unwrap_err();
    assert!(matches!(err, AdapterError::InvalidQuery(_)));
}

#[test]
fn sort_splits_into_ordered_tokens() {
    let parsed = parse_address(
        "strapi://content-type/api::article.article?sort=title:asc,createdAt:desc",
    )
    .unwrap();
    assert_eq!(
        parsed.query.unwrap().sort.unwrap(),
        vec!["title:asc".to_string(), "createdAt:desc".to_string()]
    );
}

#[test]
fn populate_csv_and_json_list_parse_alike() {
    let csv = parse_address(
        "strapi://content-type/api::article.article?populate=author,categories",
    )
    .unwrap();
    assert_eq!(
        csv.query.unwrap().populate.unwrap(),
        json!(["author", "categories"])
    );

    // %5B%22author%22%5D is the JSON list ["author"]
    let from_json =
        parse_address("strapi://content-type/api::article.article?populate=%5B%22author%22%5D")
            .unwrap();
    let from_csv =
        parse_address("strapi://content-type/api::article.article?populate=author").unwrap();
    assert_eq!(
        from_json.query.unwrap().populate.unwrap(),
        json!(["author"])
    );
    assert_eq!(
        from_csv.query.unwrap().populate.unwrap(),
        json!(["author"])
    );
}

#[test]
fn populate_structured_map_passes_through() {
    // %7B%22author%22%3A%7B%22fields%22%3A%5B%22name%22%5D%7D%7D
    // is {"author":{"fields":["name"]}}
    let parsed = parse_address(
        "strapi://content-type/api::article.article?populate=%7B%22author%22%3A%7B%22fields%22%3A%5B%22name%22%5D%7D%7D",
    )
    .unwrap();
    assert_eq!(
        parsed.query.unwrap().populate.unwrap(),
        json!({ "author": { "fields": ["name"] } })
    );
}

#[test]
fn filters_must_be_valid_json() {
    let err = parse_address(
        "strapi://content-type/api::article.article?filters=%7Bnot-json",
    )
    .unwrap_err();
    assert!(matches!(err, AdapterError::InvalidQuery(_)));
}

#[test]
fn filters_pass_through_unreshaped() {
    // {"title":{"$contains":"hello"}}
    let parsed = parse_address(
        "strapi://content-type/api::article.article?filters=%7B%22title%22%3A%7B%22%24contains%22%3A%22hello%22%7D%7D",
    )
    .unwrap();

    let filters = parsed.query.unwrap().filters.unwrap();
    let expected: Value = json!({ "title": { "$contains": "hello" } });
    assert_eq!(filters, expected);
    assert_eq!(
        serde_json::to_string(&filters).unwrap(),
        serde_json::to_string(&expected).unwrap()
    );
}

#[test]
fn unrecognized_keys_are_ignored() {
    let parsed =
        parse_address("strapi://content-type/api::article.article?locale=en&foo=bar").unwrap();
    assert_eq!(parsed.query, None);
}

#[test]
fn parser_records_query_alongside_entry_id() {
    // The read path ignores it; the parser stays total.
    let parsed =
        parse_address("strapi://content-type/api::article.article/5?page=2").unwrap();
    assert_eq!(parsed.entry_id.as_deref(), Some("5"));
    assert!(parsed.query.is_some());
}
