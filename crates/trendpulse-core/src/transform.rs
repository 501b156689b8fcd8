//! Raw ranking/surge records to display rows.
//!
//! All derivation is pure given the injected random source: category from
//! the first source type, interest from the first populated count field,
//! and a synthesized change percent when the backend only says which way
//! the trend is moving.
use rand::Rng;
use serde::Serialize;

use crate::i18n::Language;
use crate::models::{DisplayTrend, RawRanking, RawSurge, SourceBreakdown};

/// Coarse topic classification derived from the dominant source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    News,
    Social,
    Tech,
    Entertainment,
    Other,
}

impl Category {
    /// Fixed four-entry mapping; anything else is `Other`.
    pub fn from_source_type(kind: &str) -> Self {
        match kind {
            "news" => Category::News,
            "reddit" => Category::Social,
            "github" => Category::Tech,
            "youtube" => Category::Entertainment,
            _ => Category::Other,
        }
    }

    /// Invariant English name, used for matching and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Social => "Social",
            Category::Tech => "Tech",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Localized display label.
    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.as_str(),
            Language::Ko => match self {
                Category::News => "뉴스",
                Category::Social => "소셜",
                Category::Tech => "기술",
                Category::Entertainment => "엔터테인먼트",
                Category::Other => "기타",
            },
        }
    }
}

fn category_of(sources: &SourceBreakdown) -> Category {
    // Only the first listed type decides; the backend's order is
    // authoritative and never re-sorted here.
    sources
        .types
        .first()
        .map(|t| Category::from_source_type(&t.kind))
        .unwrap_or(Category::Other)
}

fn platform_label(sources: &SourceBreakdown) -> String {
    if sources.types.is_empty() {
        "All".to_string()
    } else {
        sources
            .types
            .iter()
            .map(|t| t.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Synthesize a change percent from the coarse trend direction.
///
/// The backend reports only "up"/"down"/"stable", so this is a randomized
/// placeholder, not a measured metric. The three ranges (and their
/// inclusive/exclusive bounds) match the backend's dashboard exactly:
/// up -> [10, 110), down -> [-50, -1], anything else -> [-10, 10).
pub fn synthesize_change(direction: Option<&str>, rng: &mut impl Rng) -> i32 {
    match direction {
        Some("up") => rng.gen_range(10..110),
        Some("down") => rng.gen_range(-50..=-1),
        _ => rng.gen_range(-10..10),
    }
}

/// Normalize ranked topics into display rows.
///
/// Total over its input: an empty slice yields an empty vec, and the
/// API layer already turns a missing or malformed rankings payload into
/// an empty slice, so nothing here can panic on backend data.
pub fn to_display_trends(rankings: &[RawRanking], rng: &mut impl Rng) -> Vec<DisplayTrend> {
    rankings
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let interest = raw
                .interest_score
                .or(raw.mention_count)
                .or(raw.mentions)
                .unwrap_or(0);

            DisplayTrend {
                id: i + 1,
                keyword: raw.topic.clone(),
                topic: raw.topic.clone(),
                category: category_of(&raw.sources),
                mentions: interest,
                interest_score: interest,
                change: synthesize_change(raw.trend_direction.as_deref(), rng),
                sentiment: raw
                    .sentiment
                    .clone()
                    .unwrap_or_else(|| "neutral".to_string()),
                platform: platform_label(&raw.sources),
                timestamp: raw.timestamp.clone(),
                sources: raw.sources.clone(),
                description: raw.description.clone(),
                what: raw.what.clone(),
                why_now: raw.why_now.clone(),
                context: raw.context.clone(),
            }
        })
        .collect()
}

/// Build a display row from a surge record, for the detail panel.
///
/// Surges carry a real numeric change rate, so nothing is synthesized;
/// sentiment is fixed to "positive" since a surge is by definition a spike.
pub fn surge_to_display_trend(surge: &RawSurge, id: usize) -> DisplayTrend {
    DisplayTrend {
        id,
        keyword: surge.topic.clone(),
        topic: surge.topic.clone(),
        category: category_of(&surge.sources),
        mentions: surge.current_interest,
        interest_score: surge.current_interest,
        change: surge.interest_change_rate.round() as i32,
        sentiment: "positive".to_string(),
        platform: platform_label(&surge.sources),
        timestamp: None,
        sources: surge.sources.clone(),
        description: surge.description.clone(),
        what: surge.what.clone(),
        why_now: surge.why_now.clone(),
        context: surge.context.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceTypeCount;
    use rand::rngs::mock::StepRng;

    fn ranking(topic: &str) -> RawRanking {
        serde_json::from_str(&format!(r#"{{"topic": "{}"}}"#, topic)).unwrap()
    }

    fn with_sources(mut raw: RawRanking, kinds: &[&str]) -> RawRanking {
        raw.sources.types = kinds
            .iter()
            .map(|k| SourceTypeCount {
                kind: k.to_string(),
                count: 1,
            })
            .collect();
        raw
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let mut rng = rand::thread_rng();
        assert!(to_display_trends(&[], &mut rng).is_empty());
    }

    #[test]
    fn category_follows_first_source_type_only() {
        assert_eq!(Category::from_source_type("news"), Category::News);
        assert_eq!(Category::from_source_type("reddit"), Category::Social);
        assert_eq!(Category::from_source_type("github"), Category::Tech);
        assert_eq!(
            Category::from_source_type("youtube"),
            Category::Entertainment
        );
        assert_eq!(Category::from_source_type("podcast"), Category::Other);

        let mut rng = rand::thread_rng();
        let raw = with_sources(ranking("x"), &["reddit", "news"]);
        let trends = to_display_trends(&[raw], &mut rng);
        assert_eq!(trends[0].category, Category::Social);
    }

    #[test]
    fn missing_sources_mean_other_and_all_platform() {
        let mut rng = rand::thread_rng();
        let trends = to_display_trends(&[ranking("x")], &mut rng);
        assert_eq!(trends[0].category, Category::Other);
        assert_eq!(trends[0].platform, "All");
    }

    #[test]
    fn platform_joins_all_types_in_supplied_order() {
        let mut rng = rand::thread_rng();
        let raw = with_sources(ranking("x"), &["news", "reddit", "github"]);
        let trends = to_display_trends(&[raw], &mut rng);
        assert_eq!(trends[0].platform, "news, reddit, github");
    }

    #[test]
    fn interest_resolution_prefers_interest_score() {
        let mut rng = rand::thread_rng();
        let raw: RawRanking = serde_json::from_str(
            r#"{"topic": "x", "interest_score": 3, "mention_count": 2, "mentions": 1}"#,
        )
        .unwrap();
        assert_eq!(to_display_trends(&[raw], &mut rng)[0].mentions, 3);

        let raw: RawRanking =
            serde_json::from_str(r#"{"topic": "x", "mention_count": 2, "mentions": 1}"#).unwrap();
        assert_eq!(to_display_trends(&[raw], &mut rng)[0].mentions, 2);

        let raw: RawRanking = serde_json::from_str(r#"{"topic": "x", "mentions": 1}"#).unwrap();
        assert_eq!(to_display_trends(&[raw], &mut rng)[0].mentions, 1);

        assert_eq!(to_display_trends(&[ranking("x")], &mut rng)[0].mentions, 0);
    }

    #[test]
    fn change_synthesis_ranges_hold_for_many_draws() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let up = synthesize_change(Some("up"), &mut rng);
            assert!((10..110).contains(&up), "up out of range: {}", up);

            let down = synthesize_change(Some("down"), &mut rng);
            assert!((-50..=-1).contains(&down), "down out of range: {}", down);

            let stable = synthesize_change(Some("stable"), &mut rng);
            assert!((-10..10).contains(&stable), "stable out of range: {}", stable);

            let unknown = synthesize_change(None, &mut rng);
            assert!((-10..10).contains(&unknown));
        }
    }

    #[test]
    fn change_synthesis_boundaries_pinned_with_step_rng() {
        // StepRng at zero pins the low bound of each range,
        // StepRng at max pins the high bound
        let mut low = StepRng::new(0, 0);
        assert_eq!(synthesize_change(Some("up"), &mut low), 10);
        assert_eq!(synthesize_change(Some("down"), &mut low), -50);
        assert_eq!(synthesize_change(Some("stable"), &mut low), -10);

        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(synthesize_change(Some("up"), &mut high), 109);
        assert_eq!(synthesize_change(Some("down"), &mut high), -1);
        assert_eq!(synthesize_change(Some("stable"), &mut high), 9);
    }

    #[test]
    fn ids_are_one_based_arrival_order() {
        let mut rng = rand::thread_rng();
        let trends = to_display_trends(&[ranking("a"), ranking("b"), ranking("c")], &mut rng);
        let ids: Vec<usize> = trends.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn sentiment_defaults_to_neutral() {
        let mut rng = rand::thread_rng();
        let trends = to_display_trends(&[ranking("x")], &mut rng);
        assert_eq!(trends[0].sentiment, "neutral");
    }

    #[test]
    fn surge_maps_change_rate_and_positive_sentiment() {
        let surge: RawSurge = serde_json::from_str(
            r#"{
                "topic": "chips",
                "current_interest": 9000,
                "interest_change_rate": 45.7,
                "sources": {"types": [{"type": "github", "count": 2}]}
            }"#,
        )
        .unwrap();

        let trend = surge_to_display_trend(&surge, 1);
        assert_eq!(trend.keyword, "chips");
        assert_eq!(trend.mentions, 9000);
        assert_eq!(trend.change, 46);
        assert_eq!(trend.sentiment, "positive");
        assert_eq!(trend.category, Category::Tech);
    }
}
