//! Display-side data model.
//!
//! The raw wire types live in `trendpulse-api` and are re-exported here so
//! the rest of the crate has one import path for both halves.
use serde::Serialize;

pub use trendpulse_api::models::{
    ApiStats, DetailAnalysis, DetailRanking, DetailStatistics, KeywordCount, RawRanking, RawSurge,
    RelatedItem, SourceBreakdown, SourceNameCount, SourceTypeCount, TrendDetail,
};

use crate::transform::Category;

/// A ranked topic normalized for display.
///
/// Derived from `RawRanking` (or `RawSurge`) by the transformer and
/// recomputed from scratch on every refresh - never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTrend {
    /// 1-based position within the fetch that produced this row. Only
    /// stable inside one refresh cycle; not an identifier across cycles.
    pub id: usize,
    pub keyword: String,
    pub topic: String,
    pub category: Category,
    pub mentions: u64,
    pub interest_score: u64,
    /// Signed percent. Synthesized from the coarse trend direction when
    /// the backend sends no numeric change (see `transform`).
    pub change: i32,
    pub sentiment: String,
    /// Comma-joined source types in supplied order, or "All" when the
    /// breakdown is empty.
    pub platform: String,
    pub timestamp: Option<String>,
    pub sources: SourceBreakdown,
    // Analytical passthrough for the detail panel fallback
    pub description: Option<String>,
    pub what: Option<String>,
    pub why_now: Option<String>,
    pub context: Option<String>,
}
