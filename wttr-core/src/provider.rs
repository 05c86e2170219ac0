use crate::{Config, WttrResponse, error::Result, provider::wttr::WttrProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Source of wttr.in-shaped forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self) -> Result<WttrResponse>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> WttrProvider {
    WttrProvider::new(config.endpoint.clone())
}
