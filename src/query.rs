//! Composing a full request URL from an endpoint and query fragments.
//!
//! Every fragment picks its join character against the URL built so far:
//! `?` for the first parameter, `&` after that.

use crate::config::LinqConfig;
use crate::errors::LinqError;
use crate::filtering::{Filter, encode_filter_with};
use crate::pagination::{self, Pagination, find_number};
use crate::sort;

/// `&` if `endpoint` already carries a query string, `?` otherwise
#[must_use]
pub fn join_char(endpoint: &str) -> char {
    if endpoint.contains('?') { '&' } else { '?' }
}

/// Prefix `param` with the join character for `endpoint`
pub(crate) fn append_param(endpoint: &str, param: &str) -> String {
    let mut fragment = String::with_capacity(param.len() + 1);
    fragment.push(join_char(endpoint));
    fragment.push_str(param);
    fragment
}

/// Builds `endpoint?$filter=...&$orderby=...&$top=...` step by step.
///
/// ```rust,ignore
/// let url = QueryBuilder::new("/api/users")
///     .filter(Filter::params([("swl_name", "jo")]))
///     .order_by("lastName")
///     .paginate(2, 25)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    url: String,
    order_by: Option<String>,
    config: LinqConfig,
}

impl QueryBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            url: endpoint.into(),
            order_by: None,
            config: LinqConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LinqConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        let filter = filter.into();
        if filter.is_none() {
            return self;
        }
        let fragment = encode_filter_with(&self.url, &filter, &self.config);
        self.url.push_str(&fragment);
        self
    }

    #[must_use]
    pub fn order_by(mut self, property: &str) -> Self {
        let fragment = sort::order_by(&self.url, property);
        self.url.push_str(&fragment);
        self.order_by = Some(property.to_string());
        self
    }

    /// Descending sort; extends the `$orderby` clause when one is already open.
    #[must_use]
    pub fn order_by_desc(mut self, property: &str) -> Self {
        let fragment = sort::order_by_desc(&self.url, self.order_by.as_deref(), property);
        self.url.push_str(&fragment);
        if self.order_by.is_none() {
            self.order_by = Some(property.to_string());
        }
        self
    }

    #[must_use]
    pub fn top(mut self, n: u64) -> Self {
        let fragment = pagination::top(&self.url, n);
        self.url.push_str(&fragment);
        self
    }

    #[must_use]
    pub fn skip(mut self, n: u64) -> Self {
        let fragment = pagination::skip(&self.url, n);
        self.url.push_str(&fragment);
        self
    }

    #[must_use]
    pub fn paginate(mut self, page: u64, page_size: u64) -> Self {
        let fragment = Pagination { page, page_size }.fragment(&self.url);
        self.url.push_str(&fragment);
        self
    }

    /// Drive a whole build from one ordered parameter mapping.
    ///
    /// Every parameter is offered to the filter (reserved and paging keys are
    /// dropped there). The configured `$orderBy`, `$orderByDesc`, `$top` and
    /// `$skip` keys add ordering and explicit paging; `page` + `pageSize` add
    /// counted paging and take precedence over `$top`/`$skip`.
    ///
    /// # Errors
    ///
    /// Returns [`LinqError::InvalidNumber`] when a paging value is not an
    /// unsigned integer.
    pub fn from_params<K, V>(
        endpoint: impl Into<String>,
        params: &[(K, V)],
        config: &LinqConfig,
    ) -> Result<Self, LinqError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pagination = Pagination::from_params(params, config)?;
        let top = find_number(params, &config.top_key)?;
        let skip = find_number(params, &config.skip_key)?;

        let filter = Filter::params(
            params
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        );
        let mut builder = Self::new(endpoint).with_config(config.clone()).filter(filter);

        if let Some(property) = find_text(params, &config.order_by_key) {
            builder = builder.order_by(property);
        }
        if let Some(property) = find_text(params, &config.order_by_desc_key) {
            builder = builder.order_by_desc(property);
        }

        if let Some(Pagination { page, page_size }) = pagination {
            builder = builder.paginate(page, page_size);
        } else {
            if let Some(n) = top {
                builder = builder.top(n);
            }
            if let Some(n) = skip {
                builder = builder.skip(n);
            }
        }

        tracing::debug!(url = %builder.url, "Built query");
        Ok(builder)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn build(self) -> String {
        self.url
    }
}

/// Value of the last occurrence of `key`
pub(crate) fn find_last<'p, K, V>(params: &'p [(K, V)], key: &str) -> Option<&'p str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .rev()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
}

/// Last value of `key`, unless it is empty
fn find_text<'p, K, V>(params: &'p [(K, V)], key: &str) -> Option<&'p str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    find_last(params, key).filter(|v| !v.is_empty())
}
