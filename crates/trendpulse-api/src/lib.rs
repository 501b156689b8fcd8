// HTTP client for the trend-analytics backend
pub mod client;
pub mod models;

// Re-export common types
pub use client::{ApiError, PulseClient, Result};
pub use models::{ApiStats, RawRanking, RawSurge, SourceBreakdown, TrendDetail};
