//! Category and keyword filtering plus the ranking sort.
use crate::i18n::{Language, Text};
use crate::models::DisplayTrend;
use crate::transform::Category;

/// Selected category tab. `All` is the localized sentinel that bypasses
/// category filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self, lang: Language) -> &'static str {
        match self {
            CategoryFilter::All => Text::FilterAll.tr(lang),
            CategoryFilter::Only(category) => category.label(lang),
        }
    }
}

/// Split a comma-separated keyword filter into lower-cased tokens,
/// dropping empties so trailing commas and stray spaces are harmless.
fn tokens(keyword_filter: &str) -> Vec<String> {
    keyword_filter
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// The text a keyword token is matched against: the trend's own keyword,
/// topic and localized category label, lower-cased.
fn searchable_text(trend: &DisplayTrend, lang: Language) -> String {
    format!(
        "{} {} {}",
        trend.keyword,
        trend.topic,
        trend.category.label(lang)
    )
    .to_lowercase()
}

/// Apply category and keyword filters, then sort by interest descending.
///
/// Keyword tokens are OR-combined case-insensitive substrings; an empty
/// filter string passes everything. The sort is Rust's stable `sort_by`,
/// so ties keep their arrival order.
pub fn filter_trends(
    trends: &[DisplayTrend],
    category: CategoryFilter,
    keyword_filter: &str,
    lang: Language,
) -> Vec<DisplayTrend> {
    let tokens = tokens(keyword_filter);

    let mut visible: Vec<DisplayTrend> = trends
        .iter()
        .filter(|trend| match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => trend.category == wanted,
        })
        .filter(|trend| {
            if tokens.is_empty() {
                return true;
            }
            let haystack = searchable_text(trend, lang);
            tokens.iter().any(|token| haystack.contains(token))
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    visible
}

/// Category tabs for the current trend list: the `All` sentinel first,
/// then the distinct categories present, in first-seen order.
pub fn category_filters(trends: &[DisplayTrend]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for trend in trends {
        let filter = CategoryFilter::Only(trend.category);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(keyword: &str, category: Category, mentions: u64) -> DisplayTrend {
        DisplayTrend {
            id: 1,
            keyword: keyword.to_string(),
            topic: keyword.to_string(),
            category,
            mentions,
            interest_score: mentions,
            change: 0,
            sentiment: "neutral".to_string(),
            platform: "All".to_string(),
            timestamp: None,
            sources: Default::default(),
            description: None,
            what: None,
            why_now: None,
            context: None,
        }
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let trends = vec![
            trend("headline", Category::News, 10),
            trend("rustc", Category::Tech, 10),
        ];

        let visible = filter_trends(
            &trends,
            CategoryFilter::Only(Category::Tech),
            "",
            Language::En,
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].keyword, "rustc");

        let all = filter_trends(&trends, CategoryFilter::All, "", Language::En);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn keyword_tokens_are_or_combined_case_insensitive_substrings() {
        let trends = vec![trend("AI regulation", Category::News, 10)];

        let visible = filter_trends(&trends, CategoryFilter::All, "ai, chip", Language::En);
        assert_eq!(visible.len(), 1);

        let none = filter_trends(&trends, CategoryFilter::All, "chip, gpu", Language::En);
        assert!(none.is_empty());
    }

    #[test]
    fn empty_filter_string_passes_everything() {
        let trends = vec![
            trend("a", Category::News, 1),
            trend("b", Category::Tech, 2),
        ];
        assert_eq!(
            filter_trends(&trends, CategoryFilter::All, "", Language::En).len(),
            2
        );
        assert_eq!(
            filter_trends(&trends, CategoryFilter::All, " , ,", Language::En).len(),
            2
        );
    }

    #[test]
    fn keyword_matches_localized_category_label() {
        let trends = vec![trend("something", Category::Tech, 10)];
        let visible = filter_trends(&trends, CategoryFilter::All, "tech", Language::En);
        assert_eq!(visible.len(), 1);

        let visible_ko = filter_trends(&trends, CategoryFilter::All, "기술", Language::Ko);
        assert_eq!(visible_ko.len(), 1);
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let mut trends = vec![
            trend("fifty", Category::News, 50),
            trend("two-hundred", Category::News, 200),
            trend("ten", Category::News, 10),
        ];
        let sorted = filter_trends(&trends, CategoryFilter::All, "", Language::En);
        let mentions: Vec<u64> = sorted.iter().map(|t| t.mentions).collect();
        assert_eq!(mentions, vec![200, 50, 10]);

        // Ties keep arrival order
        trends.push(trend("fifty-b", Category::News, 50));
        let sorted = filter_trends(&trends, CategoryFilter::All, "", Language::En);
        assert_eq!(sorted[1].keyword, "fifty");
        assert_eq!(sorted[2].keyword, "fifty-b");
    }

    #[test]
    fn category_tabs_are_all_then_first_seen_order() {
        let trends = vec![
            trend("a", Category::Tech, 1),
            trend("b", Category::News, 1),
            trend("c", Category::Tech, 1),
        ];
        let filters = category_filters(&trends);
        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::Tech),
                CategoryFilter::Only(Category::News),
            ]
        );
    }
}
