//! routeurl - manual URL decomposition and reassembly
//!
//! This crate splits URL strings into the parts routing code usually needs
//! (protocol, host, path, search, hash and a decoded query mapping) and puts
//! them back together, optionally merging in extra query parameters.
//!
//! Parsing is a handful of explicit delimiter searches rather than a full URL
//! grammar. It never rejects input for being an unusual shape; host-less
//! input is resolved against an ambient location instead.
//!
//! # Quick Start
//!
//! ```
//! use routeurl::{string_to_url, url_to_string, query_to_string, QueryMap, QueryValue};
//!
//! // Decompose a URL
//! let url = string_to_url("https://a.b:1/p?x=1&y=2#f", None)?;
//! assert_eq!(url.host, "a.b:1");
//! assert_eq!(url.query_value("y"), Some("2"));
//!
//! // Rebuild it with a changed parameter
//! let mut overlay = QueryMap::new();
//! overlay.insert("x".to_string(), QueryValue::from(9));
//! assert_eq!(url_to_string(&url, Some(&overlay)), "https://a.b:1/p?x=9&y=2#f");
//!
//! // Render a standalone query string
//! assert_eq!(query_to_string(&overlay, "?"), "?x=9");
//! # Ok::<(), routeurl::RouteUrlError>(())
//! ```
//!
//! # RouteUrl Layout
//!
//! | Field      | Example                       | Notes                       |
//! |------------|-------------------------------|-----------------------------|
//! | url        | `https://a.b:1/p?x=1#f`       | canonical full URL          |
//! | domain     | `https://a.b:1`               | `protocol://host`           |
//! | protocol   | `https`                       | no `://`                    |
//! | host       | `a.b:1`                       | includes the port           |
//! | path       | `/p`                          | always starts with `/`      |
//! | search     | `x=1`                         | no leading `?`              |
//! | hash       | `f`                           | no leading `#`              |
//! | query      | `{x: "1"}`                    | decoded `search`            |
//!
//! # Host Detection
//!
//! The text between `://` and the first `/` is a host only if it contains a
//! `.`. Anything else, including every input without a `://`, is treated as a
//! path and resolved against the ambient location, which defaults to `https://localhost` and can be replaced through
//! [`UrlCodec`] or [`RouteConfig`].
//!
//! # Error Handling
//!
//! Only query decoding can fail: a malformed `%` escape or a value that does
//! not decode to UTF-8 surfaces as [`RouteUrlError`]. Configuration loading
//! uses the same error type.

// Re-export main parsing and serialization functions
pub use crate::url::{string_to_url, url_to_string, UrlCodec};

// Re-export the query codec
pub use crate::core::{
    any_to_str, decode_component, encode_component, format_number, merge_query,
    query_to_string, query_to_string_with_policy, render_string_query, string_to_query,
    stringify_query,
};

// Re-export scanner steps and the ambient location
pub use crate::url::{split_host, split_scheme, split_search_and_hash};
pub use crate::url::{Location, LocationProvider, StaticLocation};

// Re-export public types
pub use crate::config::RouteConfig;
pub use crate::error::RouteUrlError;
pub use crate::types::{ErrorValue, OmitPolicy, QueryMap, QueryValue, RouteUrl, StringQuery};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;
