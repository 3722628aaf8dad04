use async_trait::async_trait;
use crate::{ComparisonError, FinancialRatios, FinancialScore, KeyMetrics, PriceTargetConsensus};

/// Data-access boundary for gathering the four metric sources of a candidate.
///
/// Series are returned most-recent-first, as delivered upstream.
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn financial_ratios(&self, symbol: &str) -> Result<Vec<FinancialRatios>, ComparisonError>;

    async fn key_metrics(&self, symbol: &str) -> Result<Vec<KeyMetrics>, ComparisonError>;

    async fn financial_score(&self, symbol: &str) -> Result<Option<FinancialScore>, ComparisonError>;

    async fn price_target_consensus(
        &self,
        symbol: &str,
    ) -> Result<Option<PriceTargetConsensus>, ComparisonError>;
}
