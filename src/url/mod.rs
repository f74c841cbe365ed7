//! URL decomposition and reassembly.
//!
//! This module contains the URL-level functionality:
//! - The ambient location used to resolve host-less input
//! - Parsing a URL string into a [`crate::RouteUrl`]
//! - Serializing a [`crate::RouteUrl`] back, with optional query overlays
//! - [`UrlCodec`], which bundles a location provider and an omit policy

pub mod codec;
pub mod location;
pub mod parser;
pub mod serializer;

// Re-export main functionality
pub use codec::UrlCodec;
pub use location::{Location, LocationProvider, StaticLocation};
pub use parser::{split_host, split_scheme, split_search_and_hash, string_to_url};
pub use serializer::url_to_string;
