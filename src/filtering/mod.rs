//! # Shortcode Filtering
//!
//! Translates query parameter shortcodes into the `$filter` descriptor array a
//! Dynamic LINQ backend deserializes, or passes raw expressions through as
//! `$where`.
//!
//! ## Shortcodes
//!
//! | Prefix | Operation | Transform variants |
//! |--------|-----------|--------------------|
//! | `sw_`  | `StartsWith` | `swl_` lower, `swu_` upper, `swt_` trim |
//! | `c_`   | `Contains`   | `cl_`, `cu_`, `ct_` |
//! | `ew_`  | `EndsWith`   | `ewl_`, `ewu_`, `ewt_` |
//! | `eq_`  | `Eq`         | `eql_`, `equ_`, `eqt_` |
//! | `ne_`  | `Ne`         | `nel_`, `neu_`, `net_` |
//! | `gt_`, `ge_`, `lt_`, `le_` | `Gt`, `Ge`, `Lt`, `Le` | none |
//!
//! Any other key filters by equality on a property of the same name, except
//! `$`-prefixed keys and the paging keys `page`/`pageSize`.
//!
//! ## Multi-field search
//!
//! `search_first_last=Smith` expands into one raw fragment per field, ORed
//! together by the backend:
//!
//! ```rust,ignore
//! // [{"operation":"Sql",     "sql":"First.ToLower().Contains(@0)", "value":"smith", ...},
//! //  {"operation":"SqlUnion","sql":"Last.ToLower().Contains(@0)",  "value":"smith", ...}]
//! ```
//!
//! `searchsw_` does the same with `StartsWith`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dynamic_linq::filtering::{Filter, encode_filter};
//!
//! let filter = Filter::params([("swl_name", "jo"), ("gt_age", "21")]);
//! let url = format!("/api/users{}", encode_filter("/api/users", &filter));
//! // /api/users?$filter=%5B%7B%22property%22...
//! ```

pub mod conditions;
pub mod descriptor;
pub mod encode;
pub mod search;
pub mod shortcodes;

pub use conditions::{build_descriptors, decode_value, descriptors_for_key};
pub use descriptor::{Descriptor, Operation, Transform};
pub use encode::{
    Filter, encode_component, encode_filter, encode_filter_value, encode_filter_with,
    filter_payload,
};
pub use search::{SearchMode, expand_search, proper_case};
pub use shortcodes::{PrefixMatch, SHORTCODES, Shortcode, resolve_prefix};
