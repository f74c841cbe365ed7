//! Core data structures for URL decomposition and query mappings.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::stringify::any_to_str;

/// Query mapping with loosely-typed values, keyed in insertion order.
pub type QueryMap = IndexMap<String, QueryValue>;

/// Query mapping whose values are already strings. This is the form a parsed
/// URL carries.
pub type StringQuery = IndexMap<String, String>;

/// An error-like value that can be placed in a query mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    /// Human readable message.
    pub message: String,
    /// Captured trace, preferred over the message when rendering.
    pub stack: Option<String>,
}

impl ErrorValue {
    /// Capture an error and its source chain. The chain becomes the stack.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let message = err.to_string();
        let mut frames = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            frames.push(format!("caused by: {cause}"));
            source = cause.source();
        }

        let stack = if frames.is_empty() {
            None
        } else {
            Some(format!("{message}\n{}", frames.join("\n")))
        };

        Self { message, stack }
    }
}

/// A single value in a [`QueryMap`].
///
/// `Undefined` is the "absent" value: whether it shows up in rendered output
/// is decided by [`OmitPolicy`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Structured value, rendered as compact JSON.
    Json(serde_json::Value),
    Error(ErrorValue),
}

impl QueryValue {
    /// Whether this value is dropped from output under [`OmitPolicy::Unset`].
    ///
    /// A JSON `null` or `false` counts the same as its native variant.
    pub fn is_unset(&self) -> bool {
        matches!(
            self,
            QueryValue::Undefined
                | QueryValue::Null
                | QueryValue::Bool(false)
                | QueryValue::Json(serde_json::Value::Null | serde_json::Value::Bool(false))
        )
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&any_to_str(self))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for QueryValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => QueryValue::Null,
            serde_json::Value::Bool(b) => QueryValue::Bool(b),
            serde_json::Value::String(s) => QueryValue::Str(s),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => QueryValue::Number(f),
                None => QueryValue::Json(serde_json::Value::Number(n)),
            },
            other => QueryValue::Json(other),
        }
    }
}

impl From<ErrorValue> for QueryValue {
    fn from(value: ErrorValue) -> Self {
        QueryValue::Error(value)
    }
}

/// Which values [`crate::query_to_string`] leaves out of its output.
///
/// The historical exclusion check (`v !== undefined || v !== false || v !== null`)
/// is always true, so it never excluded anything. `KeepAll` reproduces that
/// literally; `Unset` applies the exclusion the check was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmitPolicy {
    /// Drop `undefined`, `null` and `false` values.
    #[default]
    Unset,
    /// Render every value, producing `key=undefined`, `key=null`, `key=false`.
    KeepAll,
}

impl OmitPolicy {
    /// Whether `value` should be rendered under this policy.
    pub fn keeps(self, value: &QueryValue) -> bool {
        match self {
            OmitPolicy::Unset => !value.is_unset(),
            OmitPolicy::KeepAll => true,
        }
    }
}

/// A URL decomposed into its structural parts.
///
/// Produced once by the parser and treated as an immutable snapshot: to change
/// the query, call [`crate::url_to_string`] or [`RouteUrl::with_query`] with a
/// delta mapping instead of editing fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteUrl {
    /// Full canonical URL.
    pub url: String,
    /// `protocol://host`
    pub domain: String,
    /// Decoded query parameters.
    pub query: StringQuery,
    /// Scheme without `://` (e.g. "https")
    pub protocol: String,
    /// Authority including port (e.g. "a.b:8080")
    pub host: String,
    /// Path, always starting with `/`
    pub path: String,
    /// Query string without the leading `?`
    pub search: String,
    /// Fragment without the leading `#`
    pub hash: String,
}

impl RouteUrl {
    /// Join the parts back into a URL string, leaving out empty search and hash.
    pub(crate) fn assemble(domain: &str, path: &str, search: &str, hash: &str) -> String {
        let mut url = String::with_capacity(domain.len() + path.len() + search.len() + hash.len() + 2);
        url.push_str(domain);
        url.push_str(path);
        if !search.is_empty() {
            url.push('?');
            url.push_str(search);
        }
        if !hash.is_empty() {
            url.push('#');
            url.push_str(hash);
        }
        url
    }

    /// Check if the URL carries a query string.
    pub fn has_query(&self) -> bool {
        !self.search.is_empty()
    }

    /// Check if the URL carries a fragment.
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Look up a decoded query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Non-empty path segments, still percent-encoded.
    pub fn path_segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// A copy of this URL with the fragment removed.
    pub fn without_hash(&self) -> RouteUrl {
        RouteUrl {
            url: Self::assemble(&self.domain, &self.path, &self.search, ""),
            hash: String::new(),
            ..self.clone()
        }
    }
}
