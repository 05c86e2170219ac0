use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::DEFAULT_ENDPOINT,
    error::{Result, WeatherError},
    model::WttrResponse,
};

use super::WeatherProvider;

/// Fetches the `j1` JSON report from wttr.in (or anything serving the same shape).
#[derive(Debug, Clone)]
pub struct WttrProvider {
    endpoint: String,
    http: Client,
}

impl WttrProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for WttrProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<WttrResponse> {
        let res = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Transport)?;
        debug!(%status, bytes = body.len(), "received weather response");

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        WttrResponse::from_json(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
