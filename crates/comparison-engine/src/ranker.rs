//! Composite Ranking Module
//!
//! Combines the five category scores with fixed weights and picks the winner.

use comparison_core::{
    CandidateWithMetrics, Category, CategoryScores, ComparisonError, CompositeResult,
    RankingOutcome,
};
use serde::{Deserialize, Serialize};

use crate::extractor::extract_metrics;
use crate::scorer::CategoryScorer;
use crate::session::ComparisonSession;

/// Minimum number of candidates for a meaningful ranking
pub const MIN_CANDIDATES: usize = 2;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights for the category scores (must sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for cheap P/E, P/B and P/S multiples
    pub valuation: f64,
    /// Weight for return on equity and assets
    pub growth: f64,
    /// Weight for margins, returns and dividend yield
    pub profitability: f64,
    /// Weight for leverage, liquidity and the solvency score
    pub financial_health: f64,
    /// Weight for upside to the analyst consensus target
    pub analyst_sentiment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            valuation: Category::Valuation.default_weight(),
            growth: Category::Growth.default_weight(),
            profitability: Category::Profitability.default_weight(),
            financial_health: Category::FinancialHealth.default_weight(),
            analyst_sentiment: Category::AnalystSentiment.default_weight(),
        }
    }
}

impl ScoringWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Valuation => self.valuation,
            Category::Growth => self.growth,
            Category::Profitability => self.profitability,
            Category::FinancialHealth => self.financial_health,
            Category::AnalystSentiment => self.analyst_sentiment,
        }
    }

    pub fn validate(&self) -> Result<(), ComparisonError> {
        for category in Category::ALL {
            let w = self.get(category);
            if !w.is_finite() || w < 0.0 {
                return Err(ComparisonError::InvalidWeights(format!(
                    "{} weight must be a non-negative number, got {}",
                    category.label(),
                    w
                )));
            }
        }

        let sum: f64 = Category::ALL.iter().map(|c| self.get(*c)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ComparisonError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.6}",
                sum
            )));
        }
        Ok(())
    }

    pub fn composite(&self, scores: &CategoryScores) -> f64 {
        Category::ALL
            .iter()
            .map(|c| scores.get(*c) * self.get(*c))
            .sum()
    }
}

/// Ranks a set of candidates by weighted composite score
pub struct CompositeRanker {
    weights: ScoringWeights,
    scorer: CategoryScorer,
}

impl Default for CompositeRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeRanker {
    /// Create a ranker with the default weights
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            scorer: CategoryScorer::new(),
        }
    }

    /// Create a ranker with custom weights
    pub fn with_weights(weights: ScoringWeights) -> Result<Self, ComparisonError> {
        weights.validate()?;
        Ok(Self {
            weights,
            scorer: CategoryScorer::new(),
        })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate
    pub fn score_candidate(&self, input: &CandidateWithMetrics) -> CompositeResult {
        let metrics = extract_metrics(input);
        let scores = self.scorer.score(&metrics, input.candidate.price);
        let composite = self.weights.composite(&scores);

        tracing::debug!(
            "{}: valuation {:.2}, growth {:.2}, profitability {:.2}, health {:.2}, analyst {:.2} -> {:.2}",
            input.candidate.symbol,
            scores.valuation,
            scores.growth,
            scores.profitability,
            scores.financial_health,
            scores.analyst_sentiment,
            composite
        );

        CompositeResult {
            candidate: input.candidate.clone(),
            metrics,
            scores,
            composite,
        }
    }

    /// Score every candidate and select the winner.
    ///
    /// Results keep input order. The best is only replaced on a strictly greater
    /// composite, so the earliest of equal top scores wins.
    pub fn rank(&self, candidates: &[CandidateWithMetrics]) -> Result<RankingOutcome, ComparisonError> {
        if candidates.len() < MIN_CANDIDATES {
            return Err(ComparisonError::InsufficientCandidates {
                found: candidates.len(),
            });
        }

        let results: Vec<CompositeResult> =
            candidates.iter().map(|c| self.score_candidate(c)).collect();

        let mut winner_index = 0;
        for (i, result) in results.iter().enumerate().skip(1) {
            if result.composite > results[winner_index].composite {
                winner_index = i;
            }
        }

        tracing::info!(
            "Ranked {} candidates, winner {} with {:.2}",
            results.len(),
            results[winner_index].candidate.symbol,
            results[winner_index].composite
        );

        RankingOutcome::new(winner_index, results)
    }

    /// Rank the candidates held by a session and hand the session back with the outcome
    pub fn rank_session(
        &self,
        mut session: ComparisonSession,
    ) -> Result<ComparisonSession, ComparisonError> {
        let outcome = self.rank(session.candidates())?;
        session.set_outcome(outcome);
        Ok(session)
    }
}
