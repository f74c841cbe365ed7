//! Reassembly of [`RouteUrl`] parts into URL strings.

use crate::core::query::{merge_query, query_to_string_with_policy, render_string_query, stringify_query};
use crate::types::{OmitPolicy, QueryMap, RouteUrl};

/// Serialize with an explicit policy for the overlay.
pub(crate) fn serialize_with(url: &RouteUrl, overlay: Option<&QueryMap>, policy: OmitPolicy) -> String {
    let mut out = format!("{}{}", url.domain, url.path);

    match overlay {
        Some(overlay) => {
            let merged = merge_query(&url.query, overlay);
            out.push_str(&query_to_string_with_policy(&merged, "?", policy));
        }
        None => out.push_str(&render_string_query(&url.query, "?")),
    }

    if !url.hash.is_empty() {
        out.push('#');
        out.push_str(&url.hash);
    }

    out
}

/// Build a fresh snapshot with `overlay` merged into the query.
pub(crate) fn overlay_with(url: &RouteUrl, overlay: &QueryMap, policy: OmitPolicy) -> RouteUrl {
    let query = stringify_query(&merge_query(&url.query, overlay), policy);
    let search = render_string_query(&query, "");

    RouteUrl {
        url: RouteUrl::assemble(&url.domain, &url.path, &search, &url.hash),
        query,
        search,
        ..url.clone()
    }
}

/// Reassemble a URL string from its parts, optionally overlaying query
/// parameters.
///
/// Only `domain`, `path`, `query` and `hash` are read; `protocol` and `host`
/// are trusted to already be folded into `domain`, and `search` is rebuilt
/// from `query`.
///
/// # Examples
///
/// ```
/// use routeurl::{string_to_url, url_to_string, QueryMap, QueryValue};
///
/// let url = string_to_url("https://a.b/p?x=1#f", None).unwrap();
/// assert_eq!(url_to_string(&url, None), "https://a.b/p?x=1#f");
///
/// let mut overlay = QueryMap::new();
/// overlay.insert("x".to_string(), QueryValue::from("9"));
/// assert_eq!(url_to_string(&url, Some(&overlay)), "https://a.b/p?x=9#f");
/// ```
pub fn url_to_string(url: &RouteUrl, overlay: Option<&QueryMap>) -> String {
    serialize_with(url, overlay, OmitPolicy::default())
}

impl RouteUrl {
    /// A new snapshot with `overlay` merged into the query, rendered with the
    /// default [`OmitPolicy`]. An `undefined` overlay value removes the key.
    pub fn with_query(&self, overlay: &QueryMap) -> RouteUrl {
        overlay_with(self, overlay, OmitPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QueryValue, StringQuery};

    fn route(query: &[(&str, &str)], hash: &str) -> RouteUrl {
        let query: StringQuery = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let search = render_string_query(&query, "");
        RouteUrl {
            url: RouteUrl::assemble("https://a.b", "/p", &search, hash),
            domain: "https://a.b".to_string(),
            query,
            protocol: "https".to_string(),
            host: "a.b".to_string(),
            path: "/p".to_string(),
            search,
            hash: hash.to_string(),
        }
    }

    #[test]
    fn test_serialize_without_overlay() {
        assert_eq!(url_to_string(&route(&[], ""), None), "https://a.b/p");
        assert_eq!(url_to_string(&route(&[("x", "1")], ""), None), "https://a.b/p?x=1");
        assert_eq!(url_to_string(&route(&[], "top"), None), "https://a.b/p#top");
        assert_eq!(
            url_to_string(&route(&[("q", "a b")], "top"), None),
            "https://a.b/p?q=a%20b#top"
        );
    }

    #[test]
    fn test_serialize_overlay_precedence() {
        let url = route(&[("x", "1")], "");
        let mut overlay = QueryMap::new();
        overlay.insert("x".to_string(), QueryValue::from("9"));

        assert_eq!(url_to_string(&url, Some(&overlay)), "https://a.b/p?x=9");
    }

    #[test]
    fn test_serialize_overlay_policy() {
        let url = route(&[("x", "1")], "f");
        let mut overlay = QueryMap::new();
        overlay.insert("x".to_string(), QueryValue::Null);
        overlay.insert("y".to_string(), QueryValue::Bool(false));

        assert_eq!(serialize_with(&url, Some(&overlay), OmitPolicy::Unset), "https://a.b/p#f");
        assert_eq!(
            serialize_with(&url, Some(&overlay), OmitPolicy::KeepAll),
            "https://a.b/p?x=null&y=false#f"
        );
    }

    #[test]
    fn test_serialize_trusts_domain() {
        let mut url = route(&[], "");
        url.protocol = "ftp".to_string();
        url.host = "ignored.test".to_string();
        assert_eq!(url_to_string(&url, None), "https://a.b/p");
    }

    #[test]
    fn test_with_query() {
        let url = route(&[("x", "1"), ("y", "2")], "f");
        let mut overlay = QueryMap::new();
        overlay.insert("y".to_string(), QueryValue::Undefined);
        overlay.insert("page".to_string(), QueryValue::from(3));

        let updated = url.with_query(&overlay);
        assert_eq!(updated.search, "x=1&page=3");
        assert_eq!(updated.query_value("page"), Some("3"));
        assert_eq!(updated.query_value("y"), None);
        assert_eq!(updated.url, "https://a.b/p?x=1&page=3#f");
        assert_eq!(updated.domain, url.domain);

        // The original snapshot is untouched
        assert_eq!(url.search, "x=1&y=2");
    }
}
