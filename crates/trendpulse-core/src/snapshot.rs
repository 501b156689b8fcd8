//! One refresh cycle: three parallel requests with per-request fallback.
use chrono::{DateTime, Local};
use tracing::warn;

use crate::feed::TrendFeed;
use crate::i18n::Language;
use crate::models::{ApiStats, RawRanking, RawSurge};

/// Rankings fetched per cycle.
pub const RANKING_LIMIT: u32 = 10;

/// Surge trends fetched per cycle.
pub const SURGE_LIMIT: u32 = 5;

/// Combined result of one refresh cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub stats: Option<ApiStats>,
    pub rankings: Vec<RawRanking>,
    pub surges: Vec<RawSurge>,
    pub fetched_at: DateTime<Local>,
}

/// Fetch stats, rankings and surges concurrently.
///
/// Each request falls back independently - a failed call yields `None`
/// or an empty vec and a `warn!` log, never an error to the caller. The
/// cycle itself is therefore infallible; anything that still goes wrong
/// (a panic in this function, a dead runtime) is an orchestration-level
/// failure the event loop surfaces as a banner.
pub async fn refresh(feed: &dyn TrendFeed, lang: Language) -> Snapshot {
    let (stats, rankings, surges) = tokio::join!(
        feed.stats(),
        feed.rankings(lang, RANKING_LIMIT),
        feed.surges(lang, SURGE_LIMIT),
    );

    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(e) => {
            warn!("stats request failed, continuing without: {}", e);
            None
        }
    };

    let rankings = match rankings {
        Ok(rankings) => rankings,
        Err(e) => {
            warn!("rankings request failed, showing empty list: {}", e);
            Vec::new()
        }
    };

    let surges = match surges {
        Ok(surges) => surges,
        Err(e) => {
            warn!("surge-trends request failed, showing empty strip: {}", e);
            Vec::new()
        }
    };

    Snapshot {
        stats,
        rankings,
        surges,
        fetched_at: Local::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::MockTrendFeed;
    use crate::Error;

    fn some_stats() -> ApiStats {
        serde_json::from_str(r#"{"total_collected": 10, "total_analysis": 5}"#).unwrap()
    }

    fn some_surge() -> RawSurge {
        serde_json::from_str(r#"{"topic": "chips", "current_interest": 100}"#).unwrap()
    }

    #[tokio::test]
    async fn failed_rankings_fall_back_without_touching_the_rest() {
        let mut feed = MockTrendFeed::new();
        feed.expect_stats().returning(|| Ok(some_stats()));
        feed.expect_rankings()
            .returning(|_, _| Err(Error::Api("boom".into())));
        feed.expect_surges().returning(|_, _| Ok(vec![some_surge()]));

        let snapshot = refresh(&feed, Language::En).await;

        assert!(snapshot.rankings.is_empty());
        assert_eq!(snapshot.stats.unwrap().total_collected, 10);
        assert_eq!(snapshot.surges.len(), 1);
    }

    #[tokio::test]
    async fn failed_stats_become_none() {
        let mut feed = MockTrendFeed::new();
        feed.expect_stats()
            .returning(|| Err(Error::Api("down".into())));
        feed.expect_rankings().returning(|_, _| Ok(vec![]));
        feed.expect_surges().returning(|_, _| Ok(vec![]));

        let snapshot = refresh(&feed, Language::Ko).await;
        assert!(snapshot.stats.is_none());
    }

    #[tokio::test]
    async fn all_three_failing_still_yields_a_snapshot() {
        let mut feed = MockTrendFeed::new();
        feed.expect_stats()
            .returning(|| Err(Error::Api("a".into())));
        feed.expect_rankings()
            .returning(|_, _| Err(Error::Api("b".into())));
        feed.expect_surges()
            .returning(|_, _| Err(Error::Api("c".into())));

        let snapshot = refresh(&feed, Language::En).await;
        assert!(snapshot.stats.is_none());
        assert!(snapshot.rankings.is_empty());
        assert!(snapshot.surges.is_empty());
    }

    #[tokio::test]
    async fn limits_follow_the_contract() {
        let mut feed = MockTrendFeed::new();
        feed.expect_stats().returning(|| Ok(some_stats()));
        feed.expect_rankings()
            .withf(|_, limit| *limit == RANKING_LIMIT)
            .returning(|_, _| Ok(vec![]));
        feed.expect_surges()
            .withf(|_, limit| *limit == SURGE_LIMIT)
            .returning(|_, _| Ok(vec![]));

        refresh(&feed, Language::En).await;
    }
}
