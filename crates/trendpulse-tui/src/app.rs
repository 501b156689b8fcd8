// TUI application state and event handling
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use tracing::debug;

use trendpulse_core::detail::DetailView;
use trendpulse_core::filter::{category_filters, filter_trends, CategoryFilter};
use trendpulse_core::i18n::{Language, Text};
use trendpulse_core::models::{DisplayTrend, TrendDetail};
use trendpulse_core::snapshot::Snapshot;
use trendpulse_core::theme::Theme;
use trendpulse_core::transform::{surge_to_display_trend, to_display_trends};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating the dashboard
    Filtering, // Typing in the keyword filter
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Trends,
    Surges,
}

/// Detail panel lifecycle. `Loading` renders a localized placeholder;
/// `Loaded` with an error renders the summary-only fallback plus an
/// inline error line.
#[derive(Debug, Clone)]
pub enum DetailState {
    Hidden,
    Loading,
    Loaded {
        view: DetailView,
        error: Option<String>,
    },
}

/// Everything the event loop reacts to, funneled through one channel.
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Snapshot(Snapshot),
    RefreshFailed(String),
    Detail {
        topic: String,
        result: Result<TrendDetail, String>,
    },
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub language: Language,
    pub theme: Theme,
    pub dark_mode: bool,

    pub snapshot: Option<Snapshot>,
    pub trends: Vec<DisplayTrend>,
    pub visible: Vec<DisplayTrend>,

    pub categories: Vec<CategoryFilter>,
    pub category_index: usize,
    pub keyword_input: String,

    pub list_state: ListState,
    pub surge_index: usize,

    /// Topic whose detail panel is (or is being) shown. Detail responses
    /// are checked against this before committing - a stale response for
    /// a previously selected topic is discarded.
    pub selected_topic: Option<String>,
    pub detail_summary: Option<DisplayTrend>,
    pub detail: DetailState,
    pub related_index: usize,

    pub error_message: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
    pub refresh_in_flight: bool,
    pub show_help: bool,
}

impl App {
    pub fn new(language: Language, dark_mode: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            focus: Focus::Trends,
            language,
            theme: Theme::for_dark_mode(dark_mode),
            dark_mode,
            snapshot: None,
            trends: Vec::new(),
            visible: Vec::new(),
            categories: vec![CategoryFilter::All],
            category_index: 0,
            keyword_input: String::new(),
            list_state,
            surge_index: 0,
            selected_topic: None,
            detail_summary: None,
            detail: DetailState::Hidden,
            related_index: 0,
            error_message: None,
            last_updated: None,
            refresh_in_flight: false,
            show_help: false,
        }
    }

    /// True until the first snapshot lands; the UI shows a loading line
    /// instead of an empty dashboard.
    pub fn is_first_load(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn current_category(&self) -> CategoryFilter {
        self.categories
            .get(self.category_index)
            .copied()
            .unwrap_or(CategoryFilter::All)
    }

    /// Install a fresh snapshot: re-derive display rows, rebuild the
    /// category tabs, re-apply filters. Clears any previous banner.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let selected_category = self.current_category();

        let mut rng = rand::thread_rng();
        self.trends = to_display_trends(&snapshot.rankings, &mut rng);
        self.categories = category_filters(&self.trends);
        self.category_index = self
            .categories
            .iter()
            .position(|c| *c == selected_category)
            .unwrap_or(0);

        self.last_updated = Some(snapshot.fetched_at);
        self.snapshot = Some(snapshot);
        self.error_message = None;
        self.refresh_in_flight = false;
        self.apply_filters();
    }

    /// Orchestration-level failure: show the banner, keep the previous
    /// snapshot on screen.
    pub fn refresh_failed(&mut self, message: String) {
        self.error_message = Some(format!(
            "{}: {}",
            Text::RefreshFailed.tr(self.language),
            message
        ));
        self.refresh_in_flight = false;
    }

    pub fn apply_filters(&mut self) {
        self.visible = filter_trends(
            &self.trends,
            self.current_category(),
            &self.keyword_input,
            self.language,
        );

        let selected = self.list_state.selected().unwrap_or(0);
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state
                .select(Some(selected.min(self.visible.len() - 1)));
        }
    }

    pub fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index = (self.category_index + 1) % self.categories.len();
            self.apply_filters();
        }
    }

    pub fn previous_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index =
                (self.category_index + self.categories.len() - 1) % self.categories.len();
            self.apply_filters();
        }
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Trends => {
                if self.visible.is_empty() {
                    return;
                }
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state
                    .select(Some((i + 1).min(self.visible.len() - 1)));
            }
            Focus::Surges => {
                let count = self.surge_count();
                if count > 0 {
                    self.surge_index = (self.surge_index + 1).min(count - 1);
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            Focus::Trends => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(i.saturating_sub(1)));
            }
            Focus::Surges => {
                self.surge_index = self.surge_index.saturating_sub(1);
            }
        }
    }

    pub fn toggle_surge_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Trends if self.surge_count() > 0 => Focus::Surges,
            _ => Focus::Trends,
        };
        self.surge_index = self.surge_index.min(self.surge_count().saturating_sub(1));
    }

    fn surge_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.surges.len())
    }

    pub fn selected_trend(&self) -> Option<&DisplayTrend> {
        self.visible.get(self.list_state.selected()?)
    }

    /// Open the detail panel for the current selection (trend list or
    /// surge strip). Returns the topic to fetch.
    pub fn open_detail(&mut self) -> Option<String> {
        let summary = match self.focus {
            Focus::Trends => self.selected_trend()?.clone(),
            Focus::Surges => {
                let surge = self.snapshot.as_ref()?.surges.get(self.surge_index)?;
                surge_to_display_trend(surge, self.surge_index + 1)
            }
        };

        let topic = summary.topic.clone();
        self.selected_topic = Some(topic.clone());
        self.detail_summary = Some(summary);
        self.detail = DetailState::Loading;
        self.related_index = 0;
        Some(topic)
    }

    /// Commit a detail response, unless it is stale.
    ///
    /// The guard: the response carries the topic it was fetched for, and
    /// it only lands if that topic is still the selected one. Switching
    /// topics does not cancel the old request, so a late response for a
    /// previous topic must be dropped here.
    pub fn commit_detail(&mut self, topic: String, result: Result<TrendDetail, String>) {
        if self.selected_topic.as_deref() != Some(topic.as_str()) {
            debug!("discarding stale detail response for {:?}", topic);
            return;
        }

        let Some(summary) = &self.detail_summary else {
            return;
        };

        self.detail = match result {
            Ok(detail) => DetailState::Loaded {
                view: DetailView::merge(Some(&detail), summary),
                error: None,
            },
            Err(message) => DetailState::Loaded {
                view: DetailView::merge(None, summary),
                error: Some(message),
            },
        };
    }

    pub fn close_detail(&mut self) {
        self.selected_topic = None;
        self.detail_summary = None;
        self.detail = DetailState::Hidden;
    }

    pub fn detail_open(&self) -> bool {
        !matches!(self.detail, DetailState::Hidden)
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.apply_filters();
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.theme = Theme::for_dark_mode(dark);
    }

    /// URL of the currently selected related item, if any.
    pub fn selected_related_url(&self) -> Option<&str> {
        if let DetailState::Loaded { view, .. } = &self.detail {
            view.related_items
                .get(self.related_index)
                .and_then(|item| item.url.as_deref())
        } else {
            None
        }
    }

    pub fn next_related(&mut self) {
        if let DetailState::Loaded { view, .. } = &self.detail {
            if !view.related_items.is_empty() {
                self.related_index = (self.related_index + 1).min(view.related_items.len() - 1);
            }
        }
    }

    pub fn previous_related(&mut self) {
        self.related_index = self.related_index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use trendpulse_core::models::{RawRanking, TrendDetail};

    fn ranking(topic: &str, interest: u64) -> RawRanking {
        serde_json::from_str(&format!(
            r#"{{"topic": "{}", "interest_score": {}}}"#,
            topic, interest
        ))
        .unwrap()
    }

    fn snapshot(rankings: Vec<RawRanking>) -> Snapshot {
        Snapshot {
            stats: None,
            rankings,
            surges: Vec::new(),
            fetched_at: Local::now(),
        }
    }

    fn app_with_trends() -> App {
        let mut app = App::new(Language::En, false);
        app.apply_snapshot(snapshot(vec![ranking("alpha", 100), ranking("beta", 50)]));
        app
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let mut app = app_with_trends();

        // Open detail for "alpha" (sorted first by interest), then switch to "beta"
        app.list_state.select(Some(0));
        let first = app.open_detail().unwrap();
        assert_eq!(first, "alpha");

        app.list_state.select(Some(1));
        let second = app.open_detail().unwrap();
        assert_eq!(second, "beta");

        // The late response for "alpha" must not land
        app.commit_detail("alpha".to_string(), Ok(TrendDetail::default()));
        assert!(
            matches!(app.detail, DetailState::Loading),
            "stale response should leave the panel loading"
        );

        // The current topic's response lands normally
        app.commit_detail("beta".to_string(), Ok(TrendDetail::default()));
        assert!(matches!(app.detail, DetailState::Loaded { .. }));
    }

    #[test]
    fn failed_detail_falls_back_to_summary_fields() {
        let mut app = app_with_trends();
        app.list_state.select(Some(0));
        let topic = app.open_detail().unwrap();

        app.commit_detail(topic, Err("connection refused".to_string()));

        match &app.detail {
            DetailState::Loaded { view, error } => {
                assert_eq!(view.topic, "alpha");
                assert_eq!(view.interest, 100);
                assert_eq!(error.as_deref(), Some("connection refused"));
            }
            other => panic!("expected loaded fallback, got {:?}", other),
        }
    }

    #[test]
    fn snapshot_keeps_selected_category_when_still_present() {
        let mut app = App::new(Language::En, false);

        let mut newsish = ranking("headline", 10);
        newsish.sources.types.push(
            serde_json::from_str(r#"{"type": "news", "count": 1}"#).unwrap(),
        );
        app.apply_snapshot(snapshot(vec![newsish.clone(), ranking("other", 5)]));

        app.next_category(); // move off All onto News
        assert_ne!(app.current_category(), CategoryFilter::All);
        let selected = app.current_category();

        app.apply_snapshot(snapshot(vec![newsish, ranking("other2", 6)]));
        assert_eq!(app.current_category(), selected);
    }

    #[test]
    fn refresh_failure_keeps_previous_data_and_sets_banner() {
        let mut app = app_with_trends();
        assert_eq!(app.visible.len(), 2);

        app.refresh_failed("task died".to_string());
        assert!(app.error_message.as_deref().unwrap().contains("task died"));
        assert_eq!(app.visible.len(), 2, "previous snapshot stays displayed");
    }

    #[test]
    fn keyword_input_narrows_visible_trends() {
        let mut app = app_with_trends();
        app.keyword_input = "alp".to_string();
        app.apply_filters();
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].keyword, "alpha");

        app.keyword_input.clear();
        app.apply_filters();
        assert_eq!(app.visible.len(), 2);
    }
}
