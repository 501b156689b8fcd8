//! The feed trait abstracting the four backend endpoints.
use crate::i18n::Language;
use crate::models::{ApiStats, RawRanking, RawSurge, TrendDetail};
use crate::Result;
use trendpulse_api::PulseClient;

#[cfg(test)]
use mockall::automock;

/// Trait over the trend endpoints - makes testing easier and keeps the
/// engine and the TUI decoupled from the concrete HTTP client.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TrendFeed: Send + Sync {
    async fn stats(&self) -> Result<ApiStats>;
    async fn rankings(&self, lang: Language, limit: u32) -> Result<Vec<RawRanking>>;
    async fn surges(&self, lang: Language, limit: u32) -> Result<Vec<RawSurge>>;
    async fn detail(&self, topic: &str, lang: Language) -> Result<TrendDetail>;
}

/// Production feed backed by the HTTP client.
pub struct ApiFeed {
    client: PulseClient,
}

impl ApiFeed {
    pub fn new(client: PulseClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TrendFeed for ApiFeed {
    async fn stats(&self) -> Result<ApiStats> {
        self.client
            .stats()
            .await
            .map_err(|e| crate::Error::Api(e.to_string()))
    }

    async fn rankings(&self, lang: Language, limit: u32) -> Result<Vec<RawRanking>> {
        self.client
            .rankings(lang.as_str(), limit)
            .await
            .map_err(|e| crate::Error::Api(e.to_string()))
    }

    async fn surges(&self, lang: Language, limit: u32) -> Result<Vec<RawSurge>> {
        self.client
            .surge_trends(lang.as_str(), limit)
            .await
            .map_err(|e| crate::Error::Api(e.to_string()))
    }

    async fn detail(&self, topic: &str, lang: Language) -> Result<TrendDetail> {
        self.client
            .trend_detail(topic, lang.as_str())
            .await
            .map_err(|e| crate::Error::Api(e.to_string()))
    }
}
