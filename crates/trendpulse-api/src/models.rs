//! Wire types for the trend-analytics API.
//!
//! Everything here is deserialized straight off the backend and treated as
//! read-only. Fields the backend sometimes omits are `Option` or defaulted
//! so a sparse payload never fails the whole response.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One source type bucket, e.g. `{"type": "news", "count": 3}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub count: u64,
}

/// One named source bucket, e.g. `{"name": "hackernews", "count": 12}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceNameCount {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Per-topic source breakdown. The order of `types` is supplied by the
/// backend and is authoritative: the first entry decides the category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceBreakdown {
    #[serde(default)]
    pub types: Vec<SourceTypeCount>,
    #[serde(default)]
    pub names: Vec<SourceNameCount>,
}

/// A ranked topic as returned by `GET /rankings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRanking {
    /// Some backend versions call this `title`.
    #[serde(alias = "title")]
    pub topic: String,
    #[serde(default)]
    pub sources: SourceBreakdown,
    // Interest arrives under one of three names depending on backend
    // version; resolution order is interest_score > mention_count > mentions.
    pub interest_score: Option<u64>,
    pub mention_count: Option<u64>,
    pub mentions: Option<u64>,
    pub trend_direction: Option<String>,
    pub sentiment: Option<String>,
    pub description: Option<String>,
    pub what: Option<String>,
    pub why_now: Option<String>,
    pub context: Option<String>,
    pub score: Option<f64>,
    pub source_diversity: Option<f64>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub timestamp: Option<String>,
}

/// A surging topic as returned by `GET /surge-trends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSurge {
    pub topic: String,
    #[serde(default)]
    pub current_interest: u64,
    #[serde(default)]
    pub interest_change_rate: f64,
    #[serde(default)]
    pub interest_multiplier: f64,
    #[serde(default)]
    pub current_rank: u32,
    #[serde(default)]
    pub previous_rank: u32,
    pub surge_reason: Option<String>,
    #[serde(default)]
    pub sources: SourceBreakdown,
    pub description: Option<String>,
    pub what: Option<String>,
    pub why_now: Option<String>,
    pub context: Option<String>,
}

/// Aggregate collection counters from `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStats {
    #[serde(default)]
    pub total_collected: u64,
    #[serde(default)]
    pub total_analysis: u64,
    #[serde(default)]
    pub total_rankings: u64,
    #[serde(default)]
    pub source_counts: HashMap<String, u64>,
    pub latest_collected: Option<String>,
}

/// Deep-analysis payload from `GET /trends/{topic}/detail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendDetail {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub analysis: DetailAnalysis,
    #[serde(default)]
    pub statistics: DetailStatistics,
    #[serde(default)]
    pub keywords: Vec<KeywordCount>,
    #[serde(default)]
    pub related_items: Vec<RelatedItem>,
    #[serde(default)]
    pub ranking: DetailRanking,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailAnalysis {
    pub description: Option<String>,
    pub what: Option<String>,
    pub why_now: Option<String>,
    pub context: Option<String>,
    pub total_analyses: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailStatistics {
    pub total_items: Option<u64>,
    pub total_mentions: Option<u64>,
    pub total_interest_score: Option<u64>,
    #[serde(default)]
    pub source_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub sentiment_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub top_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    #[serde(default)]
    pub count: u64,
}

/// A collected item (article, post, video) related to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_type: String,
    pub url: Option<String>,
    pub collected_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailRanking {
    pub rank: Option<u32>,
    pub interest_score: Option<u64>,
    pub mention_count: Option<u64>,
    pub trend_direction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_accepts_title_alias() {
        let json = r#"{"title": "AI regulation", "interest_score": 42}"#;
        let ranking: RawRanking = serde_json::from_str(json).unwrap();
        assert_eq!(ranking.topic, "AI regulation");
        assert_eq!(ranking.interest_score, Some(42));
    }

    #[test]
    fn sparse_surge_defaults_numeric_fields() {
        let json = r#"{"topic": "chips"}"#;
        let surge: RawSurge = serde_json::from_str(json).unwrap();
        assert_eq!(surge.current_interest, 0);
        assert_eq!(surge.interest_multiplier, 0.0);
        assert!(surge.sources.types.is_empty());
    }

    #[test]
    fn detail_tolerates_missing_sections() {
        let json = r#"{"topic": "chips", "keywords": [{"keyword": "fab", "count": 7}]}"#;
        let detail: TrendDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.keywords.len(), 1);
        assert!(detail.analysis.what.is_none());
        assert!(detail.ranking.interest_score.is_none());
    }
}
