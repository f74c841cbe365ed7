//! Tests for URL decomposition and reassembly.

use routeurl::*;

#[test]
fn test_decomposition_example() {
    let url = string_to_url("https://a.b:1/p?x=1&y=2#f", None).unwrap();

    let mut query = StringQuery::new();
    query.insert("x".to_string(), "1".to_string());
    query.insert("y".to_string(), "2".to_string());

    let expected = RouteUrl {
        url: "https://a.b:1/p?x=1&y=2#f".to_string(),
        domain: "https://a.b:1".to_string(),
        query,
        protocol: "https".to_string(),
        host: "a.b:1".to_string(),
        path: "/p".to_string(),
        search: "x=1&y=2".to_string(),
        hash: "f".to_string(),
    };
    assert_eq!(url, expected);
}

#[test]
fn test_round_trip_absolute_urls() {
    let test_urls = vec![
        "https://example.com/",
        "http://api.example.com/v1/users",
        "https://api.example.com:8443/search?q=rust&page=2",
        "https://docs.rs/serde/latest#examples",
        "ftp://files.example.org/pub/file.tar.gz?mirror=eu#sha",
        "https://a.b/p?q=a%20b",
    ];

    for input in test_urls {
        let url = string_to_url(input, None).unwrap();
        assert_eq!(url.url, input, "Round trip failed for: {}", input);
    }
}

#[test]
fn test_serialize_is_idempotent() {
    let test_urls = vec![
        "https://a.b:1/p?x=1&y=2#f",
        "/only/path?tab=settings",
        "https://a.b/p?q=caf%C3%A9#top",
        "cdn.example.com/img.png",
        "",
    ];

    for input in test_urls {
        let url = string_to_url(input, None).unwrap();
        assert_eq!(url_to_string(&url, None), url.url, "Idempotence failed for: {:?}", input);
    }
}

#[test]
fn test_url_invariants() {
    let test_urls = vec![
        "https://a.b/p?x=1#f",
        "relative/path",
        "/abs?x#y",
        "#only-hash",
        "?only=query",
        "https://a.b",
        "://a.b/x",
    ];

    for input in test_urls {
        let url = string_to_url(input, None).unwrap();
        assert!(url.path.starts_with('/'), "Path must start with '/': {:?}", input);
        assert!(!url.host.contains("://"), "Host must not carry a scheme: {:?}", input);
        assert!(!url.host.starts_with('/'), "Host must not start with '/': {:?}", input);
        assert_eq!(url.domain, format!("{}://{}", url.protocol, url.host));

        let mut rebuilt = format!("{}{}", url.domain, url.path);
        if !url.search.is_empty() {
            rebuilt.push('?');
            rebuilt.push_str(&url.search);
        }
        if !url.hash.is_empty() {
            rebuilt.push('#');
            rebuilt.push_str(&url.hash);
        }
        assert_eq!(url.url, rebuilt, "url invariant failed for: {:?}", input);
    }
}

#[test]
fn test_path_only_resolves_against_location() {
    let url = string_to_url("/only/path", None).unwrap();
    assert_eq!(url.path, "/only/path");
    assert_eq!(url.protocol, "https");
    assert_eq!(url.host, "localhost");
    assert_eq!(url.domain, "https://localhost");

    let codec = UrlCodec::new(StaticLocation::new("http", "app.test:8080"));
    let url = codec.parse("/only/path#frag", None).unwrap();
    assert_eq!(url.url, "http://app.test:8080/only/path#frag");
    assert_eq!(url.hash, "frag");
}

#[test]
fn test_scheme_less_host_resolves_against_location() {
    let url = string_to_url("cdn.example.com/img.png", None).unwrap();
    assert_eq!(url.protocol, "https");
    assert_eq!(url.host, "localhost");
    assert_eq!(url.path, "/img.png");
    assert_eq!(url.url, "https://localhost/img.png");

    let codec = UrlCodec::new(StaticLocation::new("http", "app.test"));
    let url = codec.parse("cdn.example.com/img.png?v=2", None).unwrap();
    assert_eq!(url.url, "http://app.test/img.png?v=2");
}

#[test]
fn test_hash_before_query_starts_the_hash() {
    let url = string_to_url("https://a.b/p#f?x=1", None).unwrap();
    assert_eq!(url.path, "/p");
    assert_eq!(url.search, "");
    assert!(url.query.is_empty());
    assert_eq!(url.hash, "f?x=1");
    assert_eq!(url.url, "https://a.b/p#f?x=1");
}

#[test]
fn test_dynamic_location_provider() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let codec = UrlCodec::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Location::new("https", "live.test")
    });

    // An absolute URL never consults the provider
    codec.parse("https://a.b/p", None).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let url = codec.parse("/p", None).unwrap();
    assert_eq!(url.url, "https://live.test/p");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_overlay_on_parse() {
    let mut overlay = QueryMap::new();
    overlay.insert("z".to_string(), QueryValue::from(3));

    let url = string_to_url("https://a.b/p", Some(&overlay)).unwrap();
    assert_eq!(url.search, "z=3");
    assert!(url.url.ends_with("?z=3"));
    assert_eq!(url.query_value("z"), Some("3"));
}

#[test]
fn test_overlay_precedence_on_serialize() {
    let url = string_to_url("https://a.b/p?x=1", None).unwrap();
    assert_eq!(url.query_value("x"), Some("1"));

    let mut overlay = QueryMap::new();
    overlay.insert("x".to_string(), QueryValue::from("9"));

    let rebuilt = url_to_string(&url, Some(&overlay));
    assert_eq!(rebuilt, "https://a.b/p?x=9");
    assert!(rebuilt.contains("x=9"));
    assert!(!rebuilt.contains("x=1"));
}

#[test]
fn test_overlay_values_are_encoded() {
    let mut overlay = QueryMap::new();
    overlay.insert("q".to_string(), QueryValue::from("a&b=c"));
    overlay.insert("filter".to_string(), QueryValue::Json(serde_json::json!({"k": "v"})));

    let url = string_to_url("https://a.b/search", Some(&overlay)).unwrap();
    assert_eq!(url.search, "q=a%26b%3Dc&filter=%7B%22k%22%3A%22v%22%7D");
    assert_eq!(url.query_value("q"), Some("a&b=c"));
    assert_eq!(url.query_value("filter"), Some(r#"{"k":"v"}"#));

    // Decoding the rendered search gives back the stored query
    assert_eq!(string_to_query(&url.search).unwrap(), url.query);
}

#[test]
fn test_malformed_query_is_an_error() {
    let result = string_to_url("https://a.b/p?x=100%", None);
    assert!(matches!(result, Err(RouteUrlError::MalformedEscape { .. })));

    let result = string_to_url("https://a.b/p?x=%C3%28", None);
    assert!(matches!(result, Err(RouteUrlError::InvalidUtf8(_))));
}

#[test]
fn test_structurally_odd_input_never_fails() {
    let odd_inputs = vec!["", "?", "#", "://", "///", "a", ".", "..", "?&&&", "#?#?"];

    for input in odd_inputs {
        let url = string_to_url(input, None);
        assert!(url.is_ok(), "Parsing should not fail for: {:?}", input);
    }
}
