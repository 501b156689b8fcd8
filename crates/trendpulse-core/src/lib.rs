// Core business logic lives here - the brain of the operation
pub mod chart;
pub mod config;
pub mod detail;
pub mod error;
pub mod feed;
pub mod filter;
pub mod format;
pub mod i18n;
pub mod models;
pub mod prefs;
pub mod snapshot;
pub mod theme;
pub mod transform;

pub use config::Config;
pub use error::Error;
pub use feed::{ApiFeed, TrendFeed};
pub use i18n::{Language, Text};
pub use models::DisplayTrend;
pub use prefs::PrefStore;
pub use snapshot::Snapshot;
pub use theme::Theme;
pub use transform::Category;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
