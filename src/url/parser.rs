//! Decomposition of URL strings into [`RouteUrl`] parts.
//!
//! Each delimiter search is its own step so it can be exercised in isolation:
//! search and hash first, then the scheme, then the host/path boundary.

use crate::core::query::{merge_query, parse_pairs, render_string_query, stringify_query};
use crate::error::RouteUrlError;
use crate::types::{OmitPolicy, QueryMap, RouteUrl};
use crate::url::codec::UrlCodec;
use crate::url::location::LocationProvider;

/// Protocol used when the input has an empty scheme (`://host/...`).
const FALLBACK_SCHEME: &str = "https";

/// Split a URL into `(before_query, search, hash)`.
///
/// The first `?` starts the search and the first `#` after it starts the
/// hash. A `#` that comes before any `?` starts the hash directly, and the
/// search is empty.
///
/// # Examples
///
/// ```
/// use routeurl::split_search_and_hash;
///
/// assert_eq!(split_search_and_hash("/p?x=1#f"), ("/p", "x=1", "f"));
/// assert_eq!(split_search_and_hash("/p#f"), ("/p", "", "f"));
/// assert_eq!(split_search_and_hash("/p"), ("/p", "", ""));
/// ```
pub fn split_search_and_hash(input: &str) -> (&str, &str, &str) {
    let query_at = input.find('?');
    let hash_at = input.find('#');

    match (query_at, hash_at) {
        (Some(q), h) if h.map_or(true, |h| q < h) => {
            let after = &input[q + 1..];
            let (search, hash) = after.split_once('#').unwrap_or((after, ""));
            (&input[..q], search, hash)
        }
        (_, Some(h)) => (&input[..h], "", &input[h + 1..]),
        _ => (input, "", ""),
    }
}

/// Split a scheme off the part of a URL before its query.
///
/// Returns `(Some(protocol), remainder)` when `://` is present, with an empty
/// scheme read as `https`, and `(None, input)` otherwise.
///
/// # Examples
///
/// ```
/// use routeurl::split_scheme;
///
/// assert_eq!(split_scheme("http://a.b/p"), (Some("http"), "a.b/p"));
/// assert_eq!(split_scheme("://a.b/p"), (Some("https"), "a.b/p"));
/// assert_eq!(split_scheme("/p"), (None, "/p"));
/// ```
pub fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match input.find("://") {
        Some(at) => {
            let scheme = &input[..at];
            let scheme = if scheme.is_empty() { FALLBACK_SCHEME } else { scheme };
            (Some(scheme), &input[at + 3..])
        }
        None => (None, input),
    }
}

/// Split `host[:port]/path` into `(host, path)`.
///
/// The host is whatever precedes the first `/`, but only if a `.` appears
/// before that slash; otherwise the whole input is a path and the host is
/// empty. Input with a dot and no slash at all is a bare host when it followed
/// a scheme, and a path otherwise.
///
/// # Examples
///
/// ```
/// use routeurl::split_host;
///
/// assert_eq!(split_host("a.b:1/p", true), ("a.b:1", "/p"));
/// assert_eq!(split_host("a/b.c", false), ("", "a/b.c"));
/// assert_eq!(split_host("a.b", true), ("a.b", ""));
/// assert_eq!(split_host("file.html", false), ("", "file.html"));
/// ```
pub fn split_host(remainder: &str, after_scheme: bool) -> (&str, &str) {
    let mut seen_dot = false;

    for (i, c) in remainder.char_indices() {
        match c {
            '.' => seen_dot = true,
            '/' if seen_dot => return (&remainder[..i], &remainder[i..]),
            '/' => return ("", remainder),
            _ => {}
        }
    }

    if seen_dot && after_scheme {
        (remainder, "")
    } else {
        ("", remainder)
    }
}

/// Parse a URL string with an explicit policy and location provider.
pub(crate) fn parse_with(
    input: &str,
    overlay: Option<&QueryMap>,
    policy: OmitPolicy,
    location: &dyn LocationProvider,
) -> Result<RouteUrl, RouteUrlError> {
    let (pre_query, raw_search, hash) = split_search_and_hash(input);

    let mut query = parse_pairs(raw_search, false)?;
    let mut search = raw_search.to_string();
    if let Some(overlay) = overlay {
        query = stringify_query(&merge_query(&query, overlay), policy);
        search = render_string_query(&query, "");
        tracing::debug!(overlay = overlay.len(), search = %search, "merged query overlay");
    }

    let (scheme, remainder) = split_scheme(pre_query);
    let (host, path) = split_host(remainder, scheme.is_some());
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let (protocol, host) = match (scheme, host) {
        (Some(scheme), host) if !host.is_empty() => (scheme.to_string(), host.to_string()),
        _ => {
            let ambient = location.location();
            tracing::debug!(
                input,
                protocol = %ambient.protocol,
                host = %ambient.host,
                "no host in URL, resolving against ambient location"
            );
            (ambient.protocol, ambient.host)
        }
    };

    let domain = format!("{protocol}://{host}");
    let url = RouteUrl::assemble(&domain, &path, &search, hash);
    tracing::trace!(url = %url, "parsed URL");

    Ok(RouteUrl {
        url,
        domain,
        query,
        protocol,
        host,
        path,
        search,
        hash: hash.to_string(),
    })
}

/// Parse a URL string into its parts, optionally overlaying query parameters.
///
/// Host-less input resolves against the default ambient location
/// (`https://localhost`); use [`UrlCodec`] to supply a different one. The
/// overlay wins on key collision and is rendered with the default
/// [`OmitPolicy`].
///
/// # Examples
///
/// ```
/// use routeurl::string_to_url;
///
/// let url = string_to_url("https://a.b:1/p?x=1&y=2#f", None).unwrap();
/// assert_eq!(url.protocol, "https");
/// assert_eq!(url.host, "a.b:1");
/// assert_eq!(url.path, "/p");
/// assert_eq!(url.search, "x=1&y=2");
/// assert_eq!(url.hash, "f");
/// assert_eq!(url.domain, "https://a.b:1");
/// assert_eq!(url.url, "https://a.b:1/p?x=1&y=2#f");
/// ```
pub fn string_to_url(input: &str, overlay: Option<&QueryMap>) -> Result<RouteUrl, RouteUrlError> {
    UrlCodec::default().parse(input, overlay)
}
