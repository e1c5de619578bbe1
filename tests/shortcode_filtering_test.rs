use dynamic_linq::filtering::{Filter, SHORTCODES, encode_filter};
use serde_json::json;

mod common;
use common::{BASE, filter_descriptors, init_tracing};

fn encode(params: &[(&str, &str)]) -> String {
    init_tracing();
    format!("{BASE}{}", encode_filter(BASE, &Filter::params(params.iter().copied())))
}

#[test]
fn test_every_shortcode_round_trips_through_the_url() {
    for code in SHORTCODES {
        let key = format!("{}name", code.prefix);
        let url = encode(&[(key.as_str(), "Jo")]);
        let descriptors = filter_descriptors(&url);

        assert_eq!(descriptors.len(), 1, "{key}");
        assert_eq!(descriptors[0]["property"], json!("name"), "{key}");
        assert_eq!(descriptors[0]["operation"], json!(code.operation.as_str()), "{key}");
        assert_eq!(
            descriptors[0]["transform"],
            code.transform.map_or(json!(null), |t| json!(t.as_str())),
            "{key}"
        );
        assert_eq!(descriptors[0]["value"], json!("Jo"), "{key}");
        assert_eq!(descriptors[0]["sql"], json!(null), "{key}");
    }
}

#[test]
fn test_eql_is_not_plain_equality() {
    let descriptors = filter_descriptors(&encode(&[("eql_name", "Smith")]));
    assert_eq!(
        descriptors,
        vec![json!({
            "property": "name",
            "operation": "Eq",
            "transform": "Lower",
            "value": "Smith",
            "sql": null
        })]
    );
}

#[test]
fn test_unknown_key_falls_back_to_equality() {
    let descriptors = filter_descriptors(&encode(&[("status", "active")]));
    assert_eq!(
        descriptors,
        vec![json!({
            "property": "status",
            "operation": "Eq",
            "transform": null,
            "value": "active",
            "sql": null
        })]
    );
}

#[test]
fn test_paging_and_reserved_keys_produce_nothing() {
    for key in ["page", "pageSize", "$orderBy", "$select"] {
        assert_eq!(encode_filter(BASE, &Filter::params([(key, "1")])), "", "{key}");
    }
}

#[test]
fn test_mixed_parameters_keep_input_order() {
    let url = encode(&[
        ("gt_age", "21"),
        ("page", "1"),
        ("cl_email", "example.com"),
        ("$top", "5"),
        ("country", "NZ"),
    ]);
    let properties: Vec<_> = filter_descriptors(&url)
        .iter()
        .map(|d| d["property"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(properties, vec!["age", "email", "country"]);
}

#[test]
fn test_encoded_values_are_decoded_before_encoding_again() {
    let url = encode(&[("c_title", "rock%20%26%20roll")]);
    let descriptors = filter_descriptors(&url);
    assert_eq!(descriptors[0]["value"], json!("rock & roll"));
    // a literal '&' inside the payload must not split the query string
    let (_, payload) = url.split_once("?$filter=").unwrap();
    assert!(!payload.contains('&'));
}

#[test]
fn test_join_character_follows_endpoint() {
    let filter = Filter::params([("status", "active")]);
    assert!(encode_filter("/api/users", &filter).starts_with('?'));
    assert!(encode_filter("/api/users?tenant=7", &filter).starts_with('&'));
}
