//! The ambient "current location" used to resolve relative input.

use serde::{Deserialize, Serialize};

/// Default protocol for the ambient location.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default host for the ambient location.
pub const DEFAULT_HOST: &str = "localhost";

/// A `(protocol, host)` pair describing where relative URLs resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Scheme without `://`
    pub protocol: String,
    /// Authority including port
    pub host: String,
}

impl Location {
    /// Create a location from its parts.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// `protocol://host`
    pub fn origin(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL, DEFAULT_HOST)
    }
}

/// Source of the ambient location.
///
/// The parser only reads from it, when the input names no host of its own.
/// Embedders backed by a live environment implement this; everything else can
/// use [`StaticLocation`].
pub trait LocationProvider: Send + Sync {
    /// The current `(protocol, host)` pair.
    fn location(&self) -> Location;
}

/// A fixed location, typically taken from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation(pub Location);

impl StaticLocation {
    /// Create a fixed location from its parts.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self(Location::new(protocol, host))
    }
}

impl LocationProvider for StaticLocation {
    fn location(&self) -> Location {
        self.0.clone()
    }
}

impl<F> LocationProvider for F
where
    F: Fn() -> Location + Send + Sync,
{
    fn location(&self) -> Location {
        self()
    }
}
