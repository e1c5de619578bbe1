use serde_json::Value;
use url::Url;

pub const BASE: &str = "https://api.example.com/api/users";

/// Decoded value of query parameter `name`, if present
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let parsed = Url::parse(url).expect("Built URL should parse");
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// The `$filter` descriptor array of a built URL
pub fn filter_descriptors(url: &str) -> Vec<Value> {
    let payload = query_param(url, "$filter").expect("URL should carry $filter");
    serde_json::from_str(&payload).expect("$filter should be a JSON array")
}

/// Route library events to the test output; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
