//! Conversion between query strings and ordered mappings.

use crate::core::percent::{decode_component, encode_component};
use crate::core::stringify::any_to_str;
use crate::error::RouteUrlError;
use crate::types::{OmitPolicy, QueryMap, QueryValue, StringQuery};

/// Split `key=value&...` into a mapping, decoding values.
///
/// Empty segments are always skipped. Segments with an empty key are skipped
/// only when `skip_empty_keys` is set; the URL parser keeps them.
pub(crate) fn parse_pairs(query: &str, skip_empty_keys: bool) -> Result<StringQuery, RouteUrlError> {
    let mut params = StringQuery::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        if skip_empty_keys && key.is_empty() {
            continue;
        }
        params.insert(key.to_string(), decode_component(value)?);
    }

    tracing::trace!(count = params.len(), "parsed query pairs");
    Ok(params)
}

/// Parse a query string, or the query part of a URL, into a mapping.
///
/// Everything up to and including the first `?` is dropped when a `?` is
/// present, as is anything from the first `#` on. Values are percent-decoded;
/// keys are taken verbatim and entries with an empty key are skipped.
///
/// # Examples
///
/// ```
/// use routeurl::string_to_query;
///
/// let params = string_to_query("/search?q=rust%20lang&page=2#top").unwrap();
/// assert_eq!(params.get("q"), Some(&"rust lang".to_string()));
/// assert_eq!(params.get("page"), Some(&"2".to_string()));
///
/// let bare = string_to_query("a=1&b=2").unwrap();
/// assert_eq!(bare.len(), 2);
/// ```
pub fn string_to_query(raw: &str) -> Result<StringQuery, RouteUrlError> {
    let query = raw.split_once('?').map_or(raw, |(_, after)| after);
    let query = query.split_once('#').map_or(query, |(before, _)| before);
    parse_pairs(query, true)
}

/// Stringify the values a policy keeps, dropping empty keys.
pub fn stringify_query(query: &QueryMap, policy: OmitPolicy) -> StringQuery {
    query
        .iter()
        .filter(|(key, value)| !key.is_empty() && policy.keeps(value))
        .map(|(key, value)| (key.clone(), any_to_str(value)))
        .collect()
}

/// Render an already-stringified mapping as `prefix + key=value&...`.
///
/// Values are percent-encoded, keys are written as-is. Returns an empty string
/// when nothing is rendered so the prefix never dangles.
pub fn render_string_query(query: &StringQuery, prefix: &str) -> String {
    let segments: Vec<String> = query
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect();

    if segments.is_empty() {
        String::new()
    } else {
        format!("{}{}", prefix, segments.join("&"))
    }
}

/// Render a query mapping under an explicit [`OmitPolicy`].
///
/// # Examples
///
/// ```
/// use routeurl::{query_to_string_with_policy, OmitPolicy, QueryMap, QueryValue};
///
/// let mut query = QueryMap::new();
/// query.insert("a".to_string(), QueryValue::from(1));
/// query.insert("c".to_string(), QueryValue::Undefined);
///
/// assert_eq!(query_to_string_with_policy(&query, "?", OmitPolicy::Unset), "?a=1");
/// assert_eq!(
///     query_to_string_with_policy(&query, "?", OmitPolicy::KeepAll),
///     "?a=1&c=undefined"
/// );
/// ```
pub fn query_to_string_with_policy(query: &QueryMap, prefix: &str, policy: OmitPolicy) -> String {
    render_string_query(&stringify_query(query, policy), prefix)
}

/// Render a query mapping with the default policy, which omits `undefined`,
/// `null` and `false`.
///
/// Pass `"?"` for a standalone query string or `""` when embedding into a
/// larger string.
///
/// # Examples
///
/// ```
/// use routeurl::{query_to_string, QueryMap, QueryValue};
///
/// let mut query = QueryMap::new();
/// query.insert("a".to_string(), QueryValue::from(1));
/// query.insert("b".to_string(), QueryValue::from("two"));
/// assert_eq!(query_to_string(&query, "?"), "?a=1&b=two");
/// assert_eq!(query_to_string(&QueryMap::new(), "?"), "");
/// ```
pub fn query_to_string(query: &QueryMap, prefix: &str) -> String {
    query_to_string_with_policy(query, prefix, OmitPolicy::default())
}

/// Overlay `overlay` onto `base`. Overlay values win on key collision; base
/// keys keep their position and new keys are appended.
pub fn merge_query(base: &StringQuery, overlay: &QueryMap) -> QueryMap {
    let mut merged: QueryMap = base
        .iter()
        .map(|(key, value)| (key.clone(), QueryValue::Str(value.clone())))
        .collect();

    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }

    merged
}
