//! Client-side query encoding for Dynamic LINQ backends.
//!
//! Turns a flat, ordered mapping of query parameters into `$filter`, `$where`,
//! `$orderby`, `$top`, `$skip` and `$count` query-string fragments. See
//! [`filtering`] for the shortcode grammar.

pub mod config;
pub mod errors;
pub mod filtering;
pub mod pagination;
pub mod query;
pub mod sort;

pub use config::LinqConfig;
pub use errors::LinqError;
pub use filtering::{Descriptor, Filter, Operation, Transform, encode_filter, encode_filter_value};
pub use pagination::{Pagination, paginate, skip, top};
pub use query::{QueryBuilder, join_char};
pub use sort::{order_by, order_by_desc};
