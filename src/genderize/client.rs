//! Client for the public name→gender inference API.
//!
//! One unauthenticated GET per lookup. No retry, no caching, and the
//! HTTP client's default timeouts.

use reqwest::{Client, Url};

use crate::config::GenderizeConfig;

use super::error::FetchError;
use super::types::{ApiResponse, GenderInference};

#[derive(Clone)]
pub struct GenderizeClient {
    client: Client,
    base_url: String,
}

impl GenderizeClient {
    pub fn new(config: &GenderizeConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    /// Use an existing HTTP client (shared connection pool).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn request_url(&self, name: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.base_url, &[("name", name)])
            .map_err(|e| FetchError::Transport(format!("invalid URL '{}': {}", self.base_url, e)))
    }

    /// Look up the most likely gender for `name`.
    pub async fn fetch_gender(&self, name: &str) -> Result<GenderInference, FetchError> {
        let url = self.request_url(name)?;

        tracing::debug!(url = %url, "Sending gender lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = %status, name = %name, "Gender lookup rejected");
            return Err(FetchError::Unsuccessful {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            FetchError::Transport(format!("Failed to parse response JSON: {}", e))
        })?;

        let inference = parsed.into_inference(name);
        tracing::debug!(
            name = %inference.subject_name,
            gender = ?inference.gender,
            probability = inference.probability,
            count = inference.sample_count,
            "Gender lookup succeeded"
        );
        Ok(inference)
    }
}
