//! Value stringification, percent encoding and the query-string codec.
//!
//! These are the leaves the URL parser and serializer are built on:
//! - Rendering loosely-typed query values as strings
//! - `encodeURIComponent`-style percent encoding and strict decoding
//! - Converting between query strings and ordered mappings

pub mod percent;
pub mod query;
pub mod stringify;

// Re-export main functionality
pub use percent::{decode_component, encode_component};
pub use query::{
    merge_query, query_to_string, query_to_string_with_policy, render_string_query,
    string_to_query, stringify_query,
};
pub use stringify::{any_to_str, format_number};
