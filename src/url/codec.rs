//! A configured parser/serializer pair.

use std::fmt;
use std::sync::Arc;

use crate::config::RouteConfig;
use crate::core::query::{query_to_string_with_policy, string_to_query};
use crate::error::RouteUrlError;
use crate::types::{OmitPolicy, QueryMap, RouteUrl, StringQuery};
use crate::url::location::{Location, LocationProvider, StaticLocation};
use crate::url::parser::parse_with;
use crate::url::serializer::{overlay_with, serialize_with};

/// Parser and serializer bound to an ambient location and an [`OmitPolicy`].
///
/// The free functions ([`crate::string_to_url`], [`crate::url_to_string`],
/// [`crate::query_to_string`]) behave like `UrlCodec::default()`. A codec holds
/// no mutable state and can be shared between threads.
///
/// # Examples
///
/// ```
/// use routeurl::{OmitPolicy, StaticLocation, UrlCodec};
///
/// let codec = UrlCodec::new(StaticLocation::new("http", "intranet.test"))
///     .with_policy(OmitPolicy::KeepAll);
///
/// let url = codec.parse("/dashboard?tab=1", None).unwrap();
/// assert_eq!(url.url, "http://intranet.test/dashboard?tab=1");
/// ```
#[derive(Clone)]
pub struct UrlCodec {
    policy: OmitPolicy,
    location: Arc<dyn LocationProvider>,
}

impl UrlCodec {
    /// Create a codec resolving host-less input against `location`.
    pub fn new(location: impl LocationProvider + 'static) -> Self {
        Self {
            policy: OmitPolicy::default(),
            location: Arc::new(location),
        }
    }

    /// Create a codec from loaded configuration.
    pub fn from_config(config: &RouteConfig) -> Self {
        Self::new(StaticLocation(config.location.clone())).with_policy(config.omit_policy)
    }

    /// Replace the omit policy.
    pub fn with_policy(mut self, policy: OmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OmitPolicy {
        self.policy
    }

    /// The ambient location as currently reported by the provider.
    pub fn location(&self) -> Location {
        self.location.location()
    }

    /// Parse a URL string, optionally overlaying query parameters.
    pub fn parse(&self, input: &str, overlay: Option<&QueryMap>) -> Result<RouteUrl, RouteUrlError> {
        parse_with(input, overlay, self.policy, self.location.as_ref())
    }

    /// Reassemble a URL string, optionally overlaying query parameters.
    pub fn serialize(&self, url: &RouteUrl, overlay: Option<&QueryMap>) -> String {
        serialize_with(url, overlay, self.policy)
    }

    /// A new snapshot of `url` with `overlay` merged into its query.
    pub fn with_query(&self, url: &RouteUrl, overlay: &QueryMap) -> RouteUrl {
        overlay_with(url, overlay, self.policy)
    }

    /// Render a query mapping under this codec's policy.
    pub fn query_to_string(&self, query: &QueryMap, prefix: &str) -> String {
        query_to_string_with_policy(query, prefix, self.policy)
    }

    /// Parse a query string. The policy plays no part in decoding.
    pub fn string_to_query(&self, raw: &str) -> Result<StringQuery, RouteUrlError> {
        string_to_query(raw)
    }
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self::new(StaticLocation::default())
    }
}

impl fmt::Debug for UrlCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlCodec")
            .field("policy", &self.policy)
            .field("location", &self.location.location())
            .finish()
    }
}
