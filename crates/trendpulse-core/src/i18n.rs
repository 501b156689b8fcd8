//! Korean/English string tables.
//!
//! Every user-facing string goes through `Text::tr` (or
//! `Category::label`); the UI never hard-codes copy, so a language toggle
//! is a single enum flip.
use serde::{Deserialize, Serialize};

/// Display language. Defaults to Korean when nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
}

impl Language {
    /// Wire form used in API query parameters and the preference file.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ko
    }
}

/// Keys for localized UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    HeaderTitle,
    HeaderSubtitle,
    LastUpdated,
    StatsTrendCount,
    StatsTotalInterest,
    StatsRefreshCadence,
    StatsCollected,
    StatsAnalyses,
    StatsRankings,
    SurgeHeading,
    SurgeRank,
    ChartHeading,
    ChartNoData,
    FilterCategory,
    FilterKeyword,
    FilterKeywordHint,
    FilterAll,
    ListHeading,
    ColRank,
    ColKeyword,
    ColCategory,
    ColInterest,
    ColChange,
    ColPlatform,
    ColSentiment,
    DetailHeading,
    DetailAnalysis,
    DetailWhat,
    DetailWhyNow,
    DetailContext,
    DetailStatistics,
    DetailInterest,
    DetailSourceDist,
    DetailSentimentDist,
    DetailKeywords,
    DetailRelated,
    DetailLoading,
    DetailError,
    Loading,
    RefreshFailed,
    HelpTitle,
    HelpHint,
}

impl Text {
    pub fn tr(self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.ko(),
            Language::En => self.en(),
        }
    }

    fn ko(self) -> &'static str {
        match self {
            Text::HeaderTitle => "📊 TrendPulse",
            Text::HeaderSubtitle => "실시간 트렌드 대시보드",
            Text::LastUpdated => "마지막 업데이트",
            Text::StatsTrendCount => "트렌드",
            Text::StatsTotalInterest => "총 관심도",
            Text::StatsRefreshCadence => "5초마다 갱신",
            Text::StatsCollected => "수집",
            Text::StatsAnalyses => "분석",
            Text::StatsRankings => "랭킹",
            Text::SurgeHeading => "🔥 급상승 트렌드",
            Text::SurgeRank => "순위",
            Text::ChartHeading => "관심도 추이",
            Text::ChartNoData => "표시할 데이터가 없습니다",
            Text::FilterCategory => "카테고리",
            Text::FilterKeyword => "키워드 필터",
            Text::FilterKeywordHint => "쉼표로 구분 (예: ai, 반도체)",
            Text::FilterAll => "전체",
            Text::ListHeading => "실시간 랭킹",
            Text::ColRank => "순위",
            Text::ColKeyword => "키워드",
            Text::ColCategory => "카테고리",
            Text::ColInterest => "관심도",
            Text::ColChange => "변화",
            Text::ColPlatform => "플랫폼",
            Text::ColSentiment => "감성",
            Text::DetailHeading => "상세 분석",
            Text::DetailAnalysis => "분석",
            Text::DetailWhat => "무슨 일인가",
            Text::DetailWhyNow => "왜 지금인가",
            Text::DetailContext => "배경",
            Text::DetailStatistics => "통계",
            Text::DetailInterest => "관심도",
            Text::DetailSourceDist => "소스 분포",
            Text::DetailSentimentDist => "감성 분포",
            Text::DetailKeywords => "핵심 키워드",
            Text::DetailRelated => "관련 항목",
            Text::DetailLoading => "상세 정보를 불러오는 중...",
            Text::DetailError => "상세 정보를 불러오지 못했습니다",
            Text::Loading => "데이터를 불러오는 중...",
            Text::RefreshFailed => "데이터 갱신에 실패했습니다",
            Text::HelpTitle => "단축키",
            Text::HelpHint => "? 도움말  q 종료",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Text::HeaderTitle => "📊 TrendPulse",
            Text::HeaderSubtitle => "Real-time trend dashboard",
            Text::LastUpdated => "Last updated",
            Text::StatsTrendCount => "Trends",
            Text::StatsTotalInterest => "Total interest",
            Text::StatsRefreshCadence => "Refreshes every 5s",
            Text::StatsCollected => "Collected",
            Text::StatsAnalyses => "Analyses",
            Text::StatsRankings => "Rankings",
            Text::SurgeHeading => "🔥 Surging trends",
            Text::SurgeRank => "Rank",
            Text::ChartHeading => "Interest over time",
            Text::ChartNoData => "No data to display",
            Text::FilterCategory => "Category",
            Text::FilterKeyword => "Keyword filter",
            Text::FilterKeywordHint => "comma-separated (e.g. ai, chips)",
            Text::FilterAll => "All",
            Text::ListHeading => "Live rankings",
            Text::ColRank => "Rank",
            Text::ColKeyword => "Keyword",
            Text::ColCategory => "Category",
            Text::ColInterest => "Interest",
            Text::ColChange => "Change",
            Text::ColPlatform => "Platform",
            Text::ColSentiment => "Sentiment",
            Text::DetailHeading => "Deep analysis",
            Text::DetailAnalysis => "Analysis",
            Text::DetailWhat => "What happened",
            Text::DetailWhyNow => "Why now",
            Text::DetailContext => "Context",
            Text::DetailStatistics => "Statistics",
            Text::DetailInterest => "Interest",
            Text::DetailSourceDist => "Source distribution",
            Text::DetailSentimentDist => "Sentiment distribution",
            Text::DetailKeywords => "Top keywords",
            Text::DetailRelated => "Related items",
            Text::DetailLoading => "Loading detail...",
            Text::DetailError => "Failed to load detail",
            Text::Loading => "Loading data...",
            Text::RefreshFailed => "Failed to refresh data",
            Text::HelpTitle => "Keybindings",
            Text::HelpHint => "? help  q quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_wire_form() {
        assert_eq!(Language::parse("ko"), Some(Language::Ko));
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::Ko.as_str(), "ko");
        assert_eq!(Language::Ko.toggle(), Language::En);
    }

    #[test]
    fn default_language_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn every_text_key_has_both_translations() {
        // Spot-check that the tables diverge where they should
        assert_eq!(Text::FilterAll.tr(Language::En), "All");
        assert_eq!(Text::FilterAll.tr(Language::Ko), "전체");
        assert_ne!(
            Text::Loading.tr(Language::Ko),
            Text::Loading.tr(Language::En)
        );
    }
}
