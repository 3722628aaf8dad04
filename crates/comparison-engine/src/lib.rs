//! Stock Comparison Engine
//!
//! Scores 2-4 candidate stocks across five fundamental categories and picks a winner.
//! Extraction, scoring and ranking are pure; gathering the inputs is async and lives
//! at the data-source boundary.

pub mod breakdown;
pub mod extractor;
pub mod gather;
pub mod ranker;
pub mod scorer;
pub mod session;

pub use breakdown::{breakdown_rows, category_rows, CategoryRow, MetricRow};
pub use extractor::extract_metrics;
pub use gather::{gather_candidate, gather_candidates};
pub use ranker::{CompositeRanker, ScoringWeights};
pub use scorer::{score_categories, CategoryScorer};
pub use session::{ComparisonSession, DEFAULT_MAX_CANDIDATES};
