use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a report from being produced.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to reach the weather service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Weather service responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode weather data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Weather data is missing {0}")]
    MissingData(&'static str),

    #[error("Failed to encode widget output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, WeatherError>;
