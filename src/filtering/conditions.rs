use super::descriptor::{Descriptor, Operation};
use super::search::{SearchMode, expand_search};
use super::shortcodes::resolve_prefix;
use crate::config::LinqConfig;

/// Percent-decode a parameter value; malformed UTF-8 is replaced, never rejected.
#[must_use]
pub fn decode_value(raw: &str) -> String {
    url_escape::decode(raw).into_owned()
}

/// Build the descriptors for one parameter.
///
/// A search key fans out into several descriptors. Reserved keys, paging keys
/// and the configured ordering/paging control names produce none. Everything
/// else produces exactly one.
#[must_use]
pub fn descriptors_for_key(key: &str, raw_value: &str, config: &LinqConfig) -> Vec<Descriptor> {
    if key.is_empty() {
        tracing::debug!("Skipping parameter with empty key");
        return Vec::new();
    }

    if config.is_named_control(key) {
        tracing::debug!(key = %key, "Skipping ordering or paging control");
        return Vec::new();
    }

    let value = decode_value(raw_value);

    if let Some(prefix) = resolve_prefix(key) {
        let descriptor = Descriptor::field(prefix.property(key), prefix.operation, prefix.transform, value);
        tracing::trace!(key = %key, operation = %descriptor.operation, "Resolved shortcode");
        return vec![descriptor];
    }

    if let Some((mode, fields)) = SearchMode::detect(key) {
        return expand_search(mode, fields, &value);
    }

    if config.is_control_key(key) {
        tracing::debug!(key = %key, "Skipping reserved or paging parameter");
        return Vec::new();
    }

    tracing::trace!(key = %key, "No shortcode, using implicit equality");
    vec![Descriptor::field(key, Operation::Eq, None, value)]
}

/// Build the ordered descriptor sequence for a whole parameter mapping.
///
/// Output order follows the iteration order of `params`.
pub fn build_descriptors<I, K, V>(params: I, config: &LinqConfig) -> Vec<Descriptor>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .flat_map(|(key, value)| descriptors_for_key(key.as_ref(), value.as_ref(), config))
        .collect()
}
