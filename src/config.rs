//! Encoder configuration.
//!
//! The defaults match the conventions of a Dynamic LINQ backend: `$`-prefixed
//! keys are reserved for the wire protocol and `page`/`pageSize` drive paging.
//! Override them when a router or form uses different parameter names.
//!
//! ```rust,ignore
//! let config = LinqConfig::from_json_str(r#"{"page_size_key": "per_page"}"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::LinqError;

const DEFAULT_RESERVED_PREFIX: char = '$';
const DEFAULT_PAGE_KEY: &str = "page";
const DEFAULT_PAGE_SIZE_KEY: &str = "pageSize";

/// Parameter names and reserved keys recognised by the encoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinqConfig {
    /// Keys starting with this character never become filter descriptors
    pub reserved_prefix: char,
    /// Keys (case-insensitive) that control paging and are never filters
    pub paging_keys: Vec<String>,
    /// Key holding the 1-based page number
    pub page_key: String,
    /// Key holding the page size
    pub page_size_key: String,
    /// Key holding the ascending sort property
    pub order_by_key: String,
    /// Key holding the descending sort property
    pub order_by_desc_key: String,
    /// Key holding an explicit `$top`
    pub top_key: String,
    /// Key holding an explicit `$skip`
    pub skip_key: String,
}

impl Default for LinqConfig {
    fn default() -> Self {
        Self {
            reserved_prefix: DEFAULT_RESERVED_PREFIX,
            paging_keys: vec![DEFAULT_PAGE_KEY.to_string(), DEFAULT_PAGE_SIZE_KEY.to_string()],
            page_key: DEFAULT_PAGE_KEY.to_string(),
            page_size_key: DEFAULT_PAGE_SIZE_KEY.to_string(),
            order_by_key: "$orderBy".to_string(),
            order_by_desc_key: "$orderByDesc".to_string(),
            top_key: "$top".to_string(),
            skip_key: "$skip".to_string(),
        }
    }
}

impl LinqConfig {
    /// Load a configuration from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LinqError::Serialization`] for malformed JSON and
    /// [`LinqError::Config`] when a key name is empty.
    pub fn from_json_str(json: &str) -> Result<Self, LinqError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured key name is usable.
    ///
    /// # Errors
    ///
    /// Returns [`LinqError::Config`] naming the first empty setting.
    pub fn validate(&self) -> Result<(), LinqError> {
        let named = [
            ("page_key", &self.page_key),
            ("page_size_key", &self.page_size_key),
            ("order_by_key", &self.order_by_key),
            ("order_by_desc_key", &self.order_by_desc_key),
            ("top_key", &self.top_key),
            ("skip_key", &self.skip_key),
        ];
        for (name, value) in named {
            if value.is_empty() {
                return Err(LinqError::config(format!("{name} must not be empty")));
            }
        }
        if self.paging_keys.iter().any(String::is_empty) {
            return Err(LinqError::config("paging_keys must not contain empty entries"));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_reserved_prefix(mut self, prefix: char) -> Self {
        self.reserved_prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_paging_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paging_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// True for wire-protocol keys such as `$orderBy`
    #[must_use]
    pub fn is_reserved(&self, key: &str) -> bool {
        key.starts_with(self.reserved_prefix)
    }

    /// True for paging controls, compared case-insensitively
    #[must_use]
    pub fn is_paging_key(&self, key: &str) -> bool {
        self.paging_keys
            .iter()
            .any(|paging| paging.eq_ignore_ascii_case(key))
    }

    /// True for the exact names the query builder consumes as ordering or
    /// paging controls
    #[must_use]
    pub fn is_named_control(&self, key: &str) -> bool {
        [
            &self.page_key,
            &self.page_size_key,
            &self.order_by_key,
            &self.order_by_desc_key,
            &self.top_key,
            &self.skip_key,
        ]
        .into_iter()
        .any(|control| control == key)
    }

    /// True for any key that must never become a filter descriptor
    #[must_use]
    pub fn is_control_key(&self, key: &str) -> bool {
        self.is_named_control(key) || self.is_reserved(key) || self.is_paging_key(key)
    }
}
