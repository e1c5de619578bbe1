use crate::filtering::{encode_component, proper_case};
use crate::query::append_param;

/// Normalise a sort property for the backend: dotted paths become
/// `/`-separated (`customer.name` -> `customer/name`) and the first character
/// is upper-cased.
#[must_use]
pub fn normalize_property(property: &str) -> String {
    proper_case(&property.replace('.', "/"))
}

/// `$orderby` fragment sorting ascending by `property`.
#[must_use]
pub fn order_by(endpoint: &str, property: &str) -> String {
    let property = normalize_property(property);
    append_param(endpoint, &format!("$orderby={}", encode_component(&property)))
}

/// Descending sort by `property`.
///
/// When `order_by` already emitted an `$orderby` clause the result extends it
/// (`%2C%20Name%20desc`) instead of opening a new one.
#[must_use]
pub fn order_by_desc(endpoint: &str, order_by: Option<&str>, property: &str) -> String {
    let clause = format!("{} desc", normalize_property(property));
    if order_by.is_some() {
        encode_component(&format!(", {clause}"))
    } else {
        append_param(endpoint, &format!("$orderby={}", encode_component(&clause)))
    }
}
