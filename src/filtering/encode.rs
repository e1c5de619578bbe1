use serde_json::Value;

use super::conditions::build_descriptors;
use super::descriptor::Descriptor;
use crate::config::LinqConfig;
use crate::errors::LinqError;
use crate::query::append_param;

/// The filter argument of a query build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nothing to filter on
    #[default]
    None,
    /// Ordered shortcode parameters, encoded as `$filter`
    Params(Vec<(String, String)>),
    /// Raw backend expression, encoded as `$where` without parsing
    Where(String),
}

impl Filter {
    pub fn params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Params(params.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Raw expression; an empty string is no filter at all
    pub fn raw(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        if expression.is_empty() {
            Self::None
        } else {
            Self::Where(expression)
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<&str> for Filter {
    fn from(expression: &str) -> Self {
        Self::raw(expression)
    }
}

impl From<String> for Filter {
    fn from(expression: String) -> Self {
        Self::raw(expression)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::params(iter)
    }
}

impl From<&Value> for Filter {
    /// Objects become parameters, non-empty strings raw expressions; any
    /// other shape is no filter.
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::Params(
                map.iter()
                    .filter_map(|(key, value)| param_text(key, value).map(|text| (key.clone(), text)))
                    .collect(),
            ),
            Value::String(expression) => Self::raw(expression.as_str()),
            Value::Null => Self::None,
            other => {
                tracing::warn!(shape = %shape_name(other), "Unsupported filter shape, ignoring");
                Self::None
            }
        }
    }
}

impl From<Value> for Filter {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text form of a parameter value. Arrays join with commas; null and nested
/// objects carry no filter value.
fn param_text(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| param_text(key, item))
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Null => {
            tracing::debug!(key = %key, "Skipping null parameter");
            None
        }
        Value::Object(_) => {
            tracing::warn!(key = %key, "Skipping nested object parameter");
            None
        }
    }
}

/// Serialize descriptors into the `$filter` JSON array.
///
/// # Errors
///
/// Returns [`LinqError::Serialization`] if `serde_json` rejects the payload.
pub fn filter_payload(descriptors: &[Descriptor]) -> Result<String, LinqError> {
    Ok(serde_json::to_string(descriptors)?)
}

/// Percent-encode with the same reserved set as JavaScript's `encodeURIComponent`.
#[must_use]
pub fn encode_component(text: &str) -> String {
    url_escape::encode_component(text).into_owned()
}

/// Encode `filter` as a fragment to append to `endpoint` using the default
/// configuration.
///
/// Returns `?$filter=...`, `&$where=...` and so on, or an empty string when
/// there is nothing to filter on.
#[must_use]
pub fn encode_filter(endpoint: &str, filter: &Filter) -> String {
    encode_filter_with(endpoint, filter, &LinqConfig::default())
}

#[must_use]
pub fn encode_filter_with(endpoint: &str, filter: &Filter, config: &LinqConfig) -> String {
    match filter {
        Filter::None => String::new(),
        Filter::Where(expression) if expression.is_empty() => String::new(),
        Filter::Where(expression) => {
            append_param(endpoint, &format!("$where={}", encode_component(expression)))
        }
        Filter::Params(params) => {
            let descriptors = build_descriptors(params.iter().map(|(k, v)| (k, v)), config);
            if descriptors.is_empty() {
                return String::new();
            }
            match filter_payload(&descriptors) {
                Ok(payload) => {
                    append_param(endpoint, &format!("$filter={}", encode_component(&payload)))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize filter descriptors");
                    String::new()
                }
            }
        }
    }
}

/// Encode a filter argument of arbitrary JSON shape.
#[must_use]
pub fn encode_filter_value(endpoint: &str, filter: &Value) -> String {
    encode_filter(endpoint, &Filter::from(filter))
}
