//! Collects the four metric sources for each candidate before scoring.
//!
//! Fetches run concurrently. A failed fetch degrades to an absent source, the same way
//! missing upstream data is treated by the scorer.

use comparison_core::{Candidate, CandidateWithMetrics, MetricSource};
use futures_util::future::join_all;

/// Fetch every metric source for one candidate
pub async fn gather_candidate<S>(source: &S, candidate: Candidate) -> CandidateWithMetrics
where
    S: MetricSource + ?Sized,
{
    let symbol = candidate.symbol.as_str();
    let (ratios, key_metrics, financial_score, price_target) = tokio::join!(
        source.financial_ratios(symbol),
        source.key_metrics(symbol),
        source.financial_score(symbol),
        source.price_target_consensus(symbol),
    );

    let ratios = ratios.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch financial ratios for {}: {}", symbol, e);
        Vec::new()
    });
    let key_metrics = key_metrics.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch key metrics for {}: {}", symbol, e);
        Vec::new()
    });
    let financial_score = financial_score.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch financial score for {}: {}", symbol, e);
        None
    });
    let price_target = price_target.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch price target consensus for {}: {}", symbol, e);
        None
    });

    CandidateWithMetrics {
        candidate,
        ratios,
        key_metrics,
        financial_score,
        price_target,
    }
}

/// Fetch every candidate concurrently, preserving input order
pub async fn gather_candidates<S>(source: &S, candidates: Vec<Candidate>) -> Vec<CandidateWithMetrics>
where
    S: MetricSource + ?Sized,
{
    tracing::info!("Gathering metrics for {} candidates", candidates.len());
    join_all(candidates.into_iter().map(|c| gather_candidate(source, c))).await
}
