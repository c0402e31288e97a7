use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE: &str = "onboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to load data from `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct PortalConfig {
    /// Identifier displayed when the portal opens.
    pub start: String,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub map: MapConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            start: "welcome".to_string(),
            log_filter: "warn".to_string(),
            map: MapConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url: String,
    pub max_zoom: u8,
    /// Zoom used when a single branch is shown.
    pub branch_zoom: u8,
    /// Padding in pixels around the bounds when every branch is shown.
    pub fit_padding: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            branch_zoom: 17,
            fit_padding: 20,
        }
    }
}

impl PortalConfig {
    /// Loads `onboard.toml` from `source_path`. A missing file yields the
    /// defaults; an unreadable or malformed one is an error.
    pub fn load<T>(source_path: T) -> Result<PortalConfig, ConfigError>
    where
        T: AsRef<Path>,
    {
        let filename = source_path.as_ref().join(CONFIG_FILE);
        if !filename.exists() {
            debug!(path = %filename.display(), "no config file, using defaults");
            return Ok(PortalConfig::default());
        }

        let contents = std::fs::read_to_string(&filename).map_err(|source| ConfigError::Read {
            path: filename.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: filename,
            source,
        })
    }
}

impl FromStr for PortalConfig {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
