use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    report::DEFAULT_LOOKBACK_HOURS,
};

/// wttr.in report for the caller's IP-derived location, JSON format.
pub const DEFAULT_ENDPOINT: &str = "https://wttr.in/?format=j1";

/// Optional settings read from `config.toml`.
///
/// Example TOML:
/// endpoint = "https://wttr.in/?format=j1"
/// lookback_hours = 2
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL returning wttr.in `j1` JSON.
    pub endpoint: String,

    /// Past hours of today still listed in the tooltip.
    pub lookback_hours: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::config_file_path().as_deref())
    }

    /// Defaults when there is no platform config dir to look in.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no platform config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| WeatherError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let cfg: Config = toml::from_str(&contents).map_err(|source| WeatherError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Path to the config file, if the platform has a config directory.
    pub fn config_file_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wttr-bar", "wttr-bar")?;

        Some(dirs.config_dir().join("config.toml"))
    }

    /// Replace the endpoint when one was given explicitly.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}
