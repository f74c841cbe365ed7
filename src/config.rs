//! Configuration loaded from `config.toml`.
//!
//! ```toml
//! omit_policy = "unset"   # or "keep_all"
//!
//! [location]
//! protocol = "https"
//! host = "app.example.com"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RouteUrlError;
use crate::types::OmitPolicy;
use crate::url::location::Location;

/// Settings for [`crate::UrlCodec`]. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Which query values are left out of rendered output.
    pub omit_policy: OmitPolicy,
    /// Ambient location for URLs that carry no host.
    pub location: Location,
}

impl RouteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self, RouteUrlError> {
        Ok(toml::from_str(data)?)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, RouteUrlError> {
        let data = fs::read_to_string(path).map_err(|err| RouteUrlError::ConfigRead {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let cfg = Self::from_toml_str(&data)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Location of an existing `routeurl/config.toml` under the XDG config dirs.
    pub fn find_config_file() -> Result<Option<PathBuf>, RouteUrlError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("routeurl")
            .map_err(|err| RouteUrlError::ConfigDir(err.to_string()))?;
        Ok(xdg_dirs.find_config_file("config.toml"))
    }

    /// Load the XDG config file if one exists, defaults otherwise.
    pub fn load_or_default() -> Result<Self, RouteUrlError> {
        match Self::find_config_file()? {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
