//! Comparison Session
//!
//! Caller-owned state for one comparison: the selected candidates and the last outcome.
//! Any edit to the candidate set drops the outcome so a stale winner is never shown.

use comparison_core::{CandidateWithMetrics, ComparisonError, RankingOutcome};
use serde::{Deserialize, Serialize};

/// Maximum number of stocks compared side by side
pub const DEFAULT_MAX_CANDIDATES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSession {
    max_candidates: usize,
    candidates: Vec<CandidateWithMetrics>,
    last_outcome: Option<RankingOutcome>,
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CANDIDATES)
    }

    pub fn with_capacity(max_candidates: usize) -> Self {
        Self {
            max_candidates,
            candidates: Vec::new(),
            last_outcome: None,
        }
    }

    pub fn candidates(&self) -> &[CandidateWithMetrics] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.max_candidates
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn add(&mut self, candidate: CandidateWithMetrics) -> Result<(), ComparisonError> {
        if self.contains(candidate.symbol()) {
            return Err(ComparisonError::DuplicateCandidate(
                candidate.symbol().to_string(),
            ));
        }
        if self.is_full() {
            return Err(ComparisonError::TooManyCandidates {
                max: self.max_candidates,
            });
        }
        self.candidates.push(candidate);
        self.last_outcome = None;
        Ok(())
    }

    pub fn remove(&mut self, symbol: &str) -> Result<CandidateWithMetrics, ComparisonError> {
        let idx = self
            .position(symbol)
            .ok_or_else(|| ComparisonError::UnknownCandidate(symbol.to_string()))?;
        self.last_outcome = None;
        Ok(self.candidates.remove(idx))
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.last_outcome = None;
    }

    pub fn last_outcome(&self) -> Option<&RankingOutcome> {
        self.last_outcome.as_ref()
    }

    pub(crate) fn set_outcome(&mut self, outcome: RankingOutcome) {
        self.last_outcome = Some(outcome);
    }
}
