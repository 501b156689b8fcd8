//! Merging deep-analysis payloads with already-known summary fields.
use std::collections::HashMap;

use crate::models::{DisplayTrend, KeywordCount, RelatedItem, TrendDetail};

/// What the detail panel renders: API detail merged over the summary
/// trend, field by field, so a failed or partial detail fetch still
/// shows whatever the summary already knew. Never blank when any data
/// exists.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    pub topic: String,
    pub description: Option<String>,
    pub what: Option<String>,
    pub why_now: Option<String>,
    pub context: Option<String>,
    pub interest: u64,
    pub mentions: Option<u64>,
    pub keywords: Vec<KeywordCount>,
    pub related_items: Vec<RelatedItem>,
    pub source_distribution: HashMap<String, u64>,
    pub sentiment_distribution: HashMap<String, u64>,
}

impl DetailView {
    /// Merge with API detail taking precedence per logical field.
    ///
    /// Interest resolution: statistics total > ranking interest >
    /// ranking mentions > summary interest > summary mentions > 0.
    pub fn merge(detail: Option<&TrendDetail>, summary: &DisplayTrend) -> Self {
        let Some(detail) = detail else {
            return Self::from_summary(summary);
        };

        Self {
            topic: summary.topic.clone(),
            description: pick(
                detail.analysis.description.as_deref(),
                summary.description.as_deref(),
            ),
            what: pick(detail.analysis.what.as_deref(), summary.what.as_deref()),
            why_now: pick(
                detail.analysis.why_now.as_deref(),
                summary.why_now.as_deref(),
            ),
            context: pick(
                detail.analysis.context.as_deref(),
                summary.context.as_deref(),
            ),
            interest: detail
                .statistics
                .total_interest_score
                .or(detail.ranking.interest_score)
                .or(detail.ranking.mention_count)
                .unwrap_or_else(|| {
                    if summary.interest_score > 0 {
                        summary.interest_score
                    } else {
                        summary.mentions
                    }
                }),
            mentions: detail.statistics.total_mentions.or(detail.ranking.mention_count),
            keywords: if !detail.keywords.is_empty() {
                detail.keywords.clone()
            } else {
                detail.statistics.top_keywords.clone()
            },
            related_items: detail.related_items.clone(),
            source_distribution: detail.statistics.source_distribution.clone(),
            sentiment_distribution: detail.statistics.sentiment_distribution.clone(),
        }
    }

    /// Summary-only fallback for a failed detail fetch.
    fn from_summary(summary: &DisplayTrend) -> Self {
        Self {
            topic: summary.topic.clone(),
            description: summary.description.clone(),
            what: summary.what.clone(),
            why_now: summary.why_now.clone(),
            context: summary.context.clone(),
            interest: summary.interest_score,
            mentions: Some(summary.mentions),
            ..Self::default()
        }
    }
}

/// First non-empty wins; whitespace-only detail text falls through to
/// the summary.
fn pick(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    match primary {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        _ => fallback.map(|s| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Category;

    fn summary() -> DisplayTrend {
        DisplayTrend {
            id: 1,
            keyword: "chips".to_string(),
            topic: "chips".to_string(),
            category: Category::Tech,
            mentions: 500,
            interest_score: 500,
            change: 12,
            sentiment: "neutral".to_string(),
            platform: "github".to_string(),
            timestamp: None,
            sources: Default::default(),
            description: Some("summary description".to_string()),
            what: Some("summary what".to_string()),
            why_now: None,
            context: None,
        }
    }

    fn detail(json: &str) -> TrendDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn detail_text_beats_summary_text() {
        let detail = detail(
            r#"{"topic": "chips", "analysis": {"what": "detail what", "context": "detail context"}}"#,
        );
        let view = DetailView::merge(Some(&detail), &summary());

        assert_eq!(view.what.as_deref(), Some("detail what"));
        assert_eq!(view.context.as_deref(), Some("detail context"));
        // Absent detail fields fall back to the summary
        assert_eq!(view.description.as_deref(), Some("summary description"));
        assert!(view.why_now.is_none());
    }

    #[test]
    fn blank_detail_text_falls_through() {
        let detail = detail(r#"{"topic": "chips", "analysis": {"what": "   "}}"#);
        let view = DetailView::merge(Some(&detail), &summary());
        assert_eq!(view.what.as_deref(), Some("summary what"));
    }

    #[test]
    fn interest_resolution_order() {
        let d = detail(
            r#"{"topic": "x", "statistics": {"total_interest_score": 900},
                "ranking": {"interest_score": 800, "mention_count": 700}}"#,
        );
        assert_eq!(DetailView::merge(Some(&d), &summary()).interest, 900);

        let d = detail(r#"{"topic": "x", "ranking": {"interest_score": 800, "mention_count": 700}}"#);
        assert_eq!(DetailView::merge(Some(&d), &summary()).interest, 800);

        let d = detail(r#"{"topic": "x", "ranking": {"mention_count": 700}}"#);
        assert_eq!(DetailView::merge(Some(&d), &summary()).interest, 700);

        let d = detail(r#"{"topic": "x"}"#);
        assert_eq!(DetailView::merge(Some(&d), &summary()).interest, 500);
    }

    #[test]
    fn no_detail_still_renders_summary_fields() {
        let view = DetailView::merge(None, &summary());
        assert_eq!(view.topic, "chips");
        assert_eq!(view.interest, 500);
        assert_eq!(view.description.as_deref(), Some("summary description"));
        assert!(view.keywords.is_empty());
        assert!(view.related_items.is_empty());
    }

    #[test]
    fn top_keywords_fill_in_when_keywords_list_is_empty() {
        let d = detail(
            r#"{"topic": "x", "statistics": {"top_keywords": [{"keyword": "fab", "count": 3}]}}"#,
        );
        let view = DetailView::merge(Some(&d), &summary());
        assert_eq!(view.keywords.len(), 1);
        assert_eq!(view.keywords[0].keyword, "fab");
    }
}
