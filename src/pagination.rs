use crate::config::LinqConfig;
use crate::errors::LinqError;
use crate::query::{append_param, find_last};

/// `$top=n` fragment
#[must_use]
pub fn top(endpoint: &str, n: u64) -> String {
    append_param(endpoint, &format!("$top={n}"))
}

/// `$skip=n` fragment
#[must_use]
pub fn skip(endpoint: &str, n: u64) -> String {
    append_param(endpoint, &format!("$skip={n}"))
}

/// Page-based paging with a total count.
///
/// `page` is 1-based; page 0 is treated as the first page. Returns an empty
/// string unless both values are present.
#[must_use]
pub fn paginate(endpoint: &str, page: Option<u64>, page_size: Option<u64>) -> String {
    let (Some(page), Some(page_size)) = (page, page_size) else {
        return String::new();
    };
    Pagination { page, page_size }.fragment(endpoint)
}

/// A 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    /// Number of rows before this page
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    #[must_use]
    pub fn fragment(&self, endpoint: &str) -> String {
        let offset = self.offset();
        let size = self.page_size;
        let encoded = if offset > 0 {
            format!("$skip={offset}&$top={size}&$count=true")
        } else {
            format!("$top={size}&$count=true")
        };
        append_param(endpoint, &encoded)
    }

    /// Read the page and page size from string parameters.
    ///
    /// Returns `Ok(None)` unless both keys are present; the last occurrence of
    /// a repeated key wins.
    ///
    /// # Errors
    ///
    /// Returns [`LinqError::InvalidNumber`] if either value is not an unsigned
    /// integer.
    pub fn from_params<K, V>(params: &[(K, V)], config: &LinqConfig) -> Result<Option<Self>, LinqError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let page = find_number(params, &config.page_key)?;
        let page_size = find_number(params, &config.page_size_key)?;
        Ok(match (page, page_size) {
            (Some(page), Some(page_size)) => Some(Self { page, page_size }),
            _ => None,
        })
    }
}

/// Last value of `key` in `params`, parsed as `u64`.
pub(crate) fn find_number<K, V>(params: &[(K, V)], key: &str) -> Result<Option<u64>, LinqError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let Some(raw) = find_last(params, key) else {
        return Ok(None);
    };
    raw.trim().parse::<u64>().map(Some).map_err(|_| {
        tracing::warn!(key = %key, value = %raw, "Paging parameter is not a number");
        LinqError::invalid_number(key, raw)
    })
}
