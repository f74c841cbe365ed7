//! Percent encoding for query keys and values.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::RouteUrlError;

/// Bytes left as-is by `encodeURIComponent`: alphanumerics plus `-_.!~*'()`.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
///
/// # Examples
///
/// ```
/// use routeurl::encode_component;
///
/// assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
/// assert_eq!(encode_component("caf\u{e9}"), "caf%C3%A9");
/// ```
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Percent-decode a query component.
///
/// Unlike [`percent_decode_str`] on its own, a `%` that is not followed by two
/// hex digits is rejected, as is a byte sequence that is not UTF-8. `+` is
/// left alone.
///
/// # Examples
///
/// ```
/// use routeurl::decode_component;
///
/// assert_eq!(decode_component("a%20b").unwrap(), "a b");
/// assert!(decode_component("100%").is_err());
/// ```
pub fn decode_component(input: &str) -> Result<String, RouteUrlError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(RouteUrlError::MalformedEscape {
                    input: input.to_string(),
                    position: i,
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteUrlError::InvalidUtf8(input.to_string()))
}
