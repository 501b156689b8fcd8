use thiserror::Error;

use crate::models::{ApiStats, RawRanking, RawSurge, TrendDetail};

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Topic not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the trend-analytics backend.
///
/// Thin wrapper around reqwest: one method per endpoint, no retries, no
/// caching. Fault tolerance lives a layer up, where each request in a
/// refresh cycle falls back independently.
pub struct PulseClient {
    client: reqwest::Client,
    base_url: String,
}

impl PulseClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("TrendPulse/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// `GET /stats` — aggregate collection counters.
    pub async fn stats(&self) -> Result<ApiStats> {
        let url = format!("{}/stats", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let stats: ApiStats = response.json().await?;
        Ok(stats)
    }

    /// `GET /rankings?limit=N&lang=..` — top ranked topics, localized.
    pub async fn rankings(&self, lang: &str, limit: u32) -> Result<Vec<RawRanking>> {
        let url = format!("{}/rankings", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string().as_str()), ("lang", lang)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let rankings: Vec<RawRanking> = response.json().await?;
        Ok(rankings)
    }

    /// `GET /surge-trends?limit=N&lang=..` — topics spiking in the recent window.
    pub async fn surge_trends(&self, lang: &str, limit: u32) -> Result<Vec<RawSurge>> {
        let url = format!("{}/surge-trends", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string().as_str()), ("lang", lang)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let surges: Vec<RawSurge> = response.json().await?;
        Ok(surges)
    }

    /// `GET /trends/{topic}/detail?lang=..` — deep analysis for one topic.
    ///
    /// Topics come straight from display data and may contain spaces or
    /// Korean text, so the path segment is percent-encoded.
    pub async fn trend_detail(&self, topic: &str, lang: &str) -> Result<TrendDetail> {
        let encoded_topic = urlencoding::encode(topic);
        let url = format!("{}/trends/{}/detail", self.base_url, encoded_topic);
        let response = self
            .client
            .get(&url)
            .query(&[("lang", lang)])
            .send()
            .await?;

        if response.status() == 404 {
            return Err(ApiError::NotFound(topic.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let detail: TrendDetail = response.json().await?;
        Ok(detail)
    }
}

impl Default for PulseClient {
    fn default() -> Self {
        Self::new()
    }
}
