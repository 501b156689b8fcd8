// Terminal UI implementation using ratatui
// The pretty face of TrendPulse

pub mod app;
pub mod detail_ui;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{App, AppEvent, DetailState, Focus, InputMode};
pub use runner::run_tui;
