use dynamic_linq::{Filter, LinqConfig, LinqError, QueryBuilder, encode_filter_value};
use serde_json::json;

mod common;
use common::{BASE, filter_descriptors, init_tracing, query_param};

#[test]
fn test_raw_where_expression() {
    let url = QueryBuilder::new("/api/users").filter("Age gt 21").build();
    assert_eq!(url, "/api/users?$where=Age%20gt%2021");

    let url = QueryBuilder::new("/api/users?tenant=1").filter("Age gt 21").build();
    assert_eq!(url, "/api/users?tenant=1&$where=Age%20gt%2021");
}

#[test]
fn test_json_filter_value() {
    let fragment = encode_filter_value(BASE, &json!({"sw_name": "Al", "page": 3}));
    let descriptors = filter_descriptors(&format!("{BASE}{fragment}"));
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0]["operation"], json!("StartsWith"));

    assert_eq!(encode_filter_value(BASE, &json!(12)), "");
    assert_eq!(encode_filter_value(BASE, &json!(null)), "");
    assert_eq!(encode_filter_value(BASE, &json!("")), "");
}

#[test]
fn test_full_build_from_params() {
    init_tracing();
    let params = vec![
        ("swl_lastName", "Mc"),
        ("search_city_country", "Wel"),
        ("$orderBy", "lastName"),
        ("$orderByDesc", "address.zip"),
        ("page", "3"),
        ("pageSize", "20"),
    ];
    let url = QueryBuilder::from_params(BASE, &params, &LinqConfig::default())
        .unwrap()
        .build();

    assert_eq!(filter_descriptors(&url).len(), 3);
    assert_eq!(
        query_param(&url, "$orderby").as_deref(),
        Some("LastName, Address/zip desc")
    );
    assert_eq!(query_param(&url, "$skip").as_deref(), Some("40"));
    assert_eq!(query_param(&url, "$top").as_deref(), Some("20"));
    assert_eq!(query_param(&url, "$count").as_deref(), Some("true"));
    assert_eq!(url.matches('?').count(), 1);
}

#[test]
fn test_top_and_skip_without_pages() {
    let params = vec![("$top", "5"), ("$skip", "15")];
    let url = QueryBuilder::from_params("/api/orders", &params, &LinqConfig::default())
        .unwrap()
        .build();
    assert_eq!(url, "/api/orders?$top=5&$skip=15");
}

#[test]
fn test_invalid_page_size_is_an_error() {
    let params = vec![("page", "1"), ("pageSize", "-5")];
    let err = QueryBuilder::from_params(BASE, &params, &LinqConfig::default()).unwrap_err();
    match err {
        LinqError::InvalidNumber { key, value } => {
            assert_eq!(key, "pageSize");
            assert_eq!(value, "-5");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_config_renames_paging_keys() {
    let config = LinqConfig::from_json_str(
        r#"{"page_key": "p", "page_size_key": "size", "paging_keys": ["p", "size"]}"#,
    )
    .unwrap();
    let params = vec![("p", "2"), ("size", "5"), ("page", "9")];
    let url = QueryBuilder::from_params("/api", &params, &config).unwrap().build();

    // "page" is an ordinary filter under this configuration
    let descriptors = filter_descriptors(&format!("https://h{url}"));
    assert_eq!(descriptors[0]["property"], json!("page"));
    assert!(url.ends_with("&$skip=5&$top=5&$count=true"));
}

#[test]
fn test_renamed_control_keys_are_not_filters() {
    let config = LinqConfig::from_json_str(
        r#"{"order_by_key": "sort", "top_key": "limit", "page_key": "p", "page_size_key": "size"}"#,
    )
    .unwrap();

    let params = vec![("sort", "lastName"), ("limit", "5")];
    let url = QueryBuilder::from_params("/api", &params, &config).unwrap().build();
    assert_eq!(url, "/api?$orderby=LastName&$top=5");

    let params = vec![("status", "open"), ("p", "2"), ("size", "5")];
    let url = QueryBuilder::from_params("/api", &params, &config).unwrap().build();
    let descriptors = filter_descriptors(&format!("https://h{url}"));
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0]["property"], json!("status"));
    assert!(url.ends_with("&$skip=5&$top=5&$count=true"));
}

#[test]
fn test_default_controls_survive_a_custom_reserved_prefix() {
    let config = LinqConfig::default().with_reserved_prefix('@');
    let params = vec![("$top", "3"), ("@meta", "x")];
    let url = QueryBuilder::from_params("/api", &params, &config).unwrap().build();
    assert_eq!(url, "/api?$top=3");
}

#[test]
fn test_filter_accepts_collected_params() {
    let filter: Filter = [("ne_status", "closed")].into_iter().collect();
    let url = QueryBuilder::new(BASE).filter(filter).top(1).build();
    assert_eq!(filter_descriptors(&url)[0]["operation"], json!("Ne"));
    assert_eq!(query_param(&url, "$top").as_deref(), Some("1"));
}
