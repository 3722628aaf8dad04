use anyhow::{Context, Result};
use comparison_engine::{ScoringWeights, DEFAULT_MAX_CANDIDATES};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    // Category weights (must sum to 1.0)
    pub weights: ScoringWeights,

    // Session
    pub max_candidates: usize, // 4
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .with_context(|| format!("Invalid value for {}", key))
}

impl CompareConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = ScoringWeights::default();
        let config = Self {
            weights: ScoringWeights {
                valuation: env_or("COMPARE_WEIGHT_VALUATION", defaults.valuation)?,
                growth: env_or("COMPARE_WEIGHT_GROWTH", defaults.growth)?,
                profitability: env_or("COMPARE_WEIGHT_PROFITABILITY", defaults.profitability)?,
                financial_health: env_or("COMPARE_WEIGHT_HEALTH", defaults.financial_health)?,
                analyst_sentiment: env_or("COMPARE_WEIGHT_ANALYST", defaults.analyst_sentiment)?,
            },
            max_candidates: env_or("COMPARE_MAX_CANDIDATES", DEFAULT_MAX_CANDIDATES)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.max_candidates < 2 {
            anyhow::bail!(
                "COMPARE_MAX_CANDIDATES must be at least 2, got {}",
                self.max_candidates
            );
        }
        Ok(())
    }
}
