//! Category scoring
//!
//! Each metric is turned into a bounded addend and the addends of a category are summed.
//! Clamping is applied per addend, so a category can reach the sum of its metric caps.
//! Absent, non-finite and malformed values add nothing.

use comparison_core::{CategoryScores, MetricBundle};

const VALUATION_CAP: f64 = 25.0;
const GROWTH_CAP: f64 = 10.0;
const PROFITABILITY_RETURN_CAP: f64 = 15.0;
const DIVIDEND_CAP: f64 = 10.0;
const HEALTH_CAP: f64 = 10.0;
const ANALYST_CAP: f64 = 10.0;

/// Highest value on the solvency scale
const SOLVENCY_SCALE_MAX: f64 = 9.0;

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn positive(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v > 0.0)
}

fn capped(points: f64, cap: f64) -> f64 {
    points.clamp(0.0, cap)
}

/// Converts a [`MetricBundle`] into the five category sub-scores.
pub struct CategoryScorer;

impl CategoryScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, metrics: &MetricBundle, price: f64) -> CategoryScores {
        CategoryScores {
            valuation: self.valuation(metrics),
            growth: self.growth(metrics),
            profitability: self.profitability(metrics),
            financial_health: self.financial_health(metrics),
            analyst_sentiment: self.analyst_sentiment(metrics, price),
        }
    }

    /// Cheaper multiples score higher. Non-positive multiples are skipped.
    pub fn valuation(&self, metrics: &MetricBundle) -> f64 {
        let mut score = 0.0;
        if let Some(pe) = positive(metrics.pe_ratio) {
            score += capped(100.0 / pe, VALUATION_CAP);
        }
        if let Some(pb) = positive(metrics.pb_ratio) {
            score += capped(10.0 / pb, VALUATION_CAP);
        }
        if let Some(ps) = positive(metrics.ps_ratio) {
            score += capped(5.0 / ps, VALUATION_CAP);
        }
        score
    }

    /// ROE and ROA are fractions (0.15 = 15%)
    pub fn growth(&self, metrics: &MetricBundle) -> f64 {
        let mut score = 0.0;
        if let Some(roe) = finite(metrics.roe) {
            score += capped(roe * 10.0, GROWTH_CAP);
        }
        if let Some(roa) = finite(metrics.roa) {
            score += capped(roa * 10.0, GROWTH_CAP);
        }
        score
    }

    pub fn profitability(&self, metrics: &MetricBundle) -> f64 {
        let mut score = 0.0;
        if let Some(margin) = finite(metrics.net_profit_margin) {
            score += capped(margin * 100.0, PROFITABILITY_RETURN_CAP);
        }
        if let Some(roe) = finite(metrics.roe) {
            score += capped(roe * 25.0, PROFITABILITY_RETURN_CAP);
        }
        if let Some(roa) = finite(metrics.roa) {
            score += capped(roa * 25.0, PROFITABILITY_RETURN_CAP);
        }
        if let Some(dividend_yield) = finite(metrics.dividend_yield) {
            score += capped(dividend_yield * 100.0, DIVIDEND_CAP);
        }
        score
    }

    /// A negative debt-to-equity means negative equity and is skipped rather than
    /// rewarded as low leverage.
    pub fn financial_health(&self, metrics: &MetricBundle) -> f64 {
        let mut score = 0.0;
        if let Some(d2e) = finite(metrics.debt_to_equity).filter(|d| *d >= 0.0) {
            score += capped(20.0 / (d2e + 1.0), HEALTH_CAP);
        }
        if let Some(current_ratio) = finite(metrics.current_ratio) {
            score += capped(current_ratio / 2.0, HEALTH_CAP);
        }
        if let Some(solvency) = metrics.solvency_score {
            score += capped(f64::from(solvency) / SOLVENCY_SCALE_MAX * 10.0, HEALTH_CAP);
        }
        score
    }

    /// Upside to the consensus target, in percent
    pub fn analyst_sentiment(&self, metrics: &MetricBundle, price: f64) -> f64 {
        match (finite(metrics.target_price), positive(Some(price))) {
            (Some(target), Some(price)) => capped((target - price) / price * 100.0, ANALYST_CAP),
            _ => 0.0,
        }
    }
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a bundle with the default scorer
pub fn score_categories(metrics: &MetricBundle, price: f64) -> CategoryScores {
    CategoryScorer::new().score(metrics, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use comparison_core::Category;

    fn full_bundle() -> MetricBundle {
        MetricBundle {
            pe_ratio: Some(10.0),
            pb_ratio: Some(1.0),
            ps_ratio: Some(1.0),
            roe: Some(0.20),
            roa: Some(0.10),
            net_profit_margin: Some(0.25),
            dividend_yield: Some(0.03),
            debt_to_equity: Some(0.5),
            current_ratio: Some(2.0),
            solvency_score: Some(8),
            target_price: Some(120.0),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_full_bundle_scores() {
        let scores = score_categories(&full_bundle(), 100.0);

        assert!(approx(scores.valuation, 25.0));
        // 0.20*10 + 0.10*10
        assert!(approx(scores.growth, 3.0));
        // 15 (capped from 25) + 5 + 2.5 + 3
        assert!(approx(scores.profitability, 25.5));
        // 20/1.5 capped to 10, 1.0, 8/9*10
        assert!(approx(scores.financial_health, 10.0 + 1.0 + 80.0 / 9.0));
        assert!(approx(scores.analyst_sentiment, 10.0));
    }

    #[test]
    fn test_empty_bundle_scores_zero() {
        let scores = score_categories(&MetricBundle::default(), 50.0);
        assert_eq!(scores, CategoryScores::default());
    }

    #[test]
    fn test_non_positive_multiples_are_skipped() {
        let bundle = MetricBundle {
            pe_ratio: Some(0.0),
            pb_ratio: Some(-3.0),
            ps_ratio: Some(2.0),
            ..Default::default()
        };
        assert!(approx(CategoryScorer::new().valuation(&bundle), 2.5));
    }

    #[test]
    fn test_negative_debt_to_equity_contributes_nothing() {
        let scorer = CategoryScorer::new();
        let base = MetricBundle {
            current_ratio: Some(3.0),
            solvency_score: Some(6),
            ..Default::default()
        };
        let with_negative = MetricBundle {
            debt_to_equity: Some(-0.5),
            ..base.clone()
        };
        assert!(approx(scorer.financial_health(&with_negative), scorer.financial_health(&base)));

        let at_pole = MetricBundle {
            debt_to_equity: Some(-1.0),
            ..base.clone()
        };
        assert!(approx(scorer.financial_health(&at_pole), scorer.financial_health(&base)));
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let bundle = MetricBundle {
            pe_ratio: Some(f64::NAN),
            roe: Some(f64::INFINITY),
            net_profit_margin: Some(f64::NAN),
            target_price: Some(f64::NAN),
            ..Default::default()
        };
        let scores = score_categories(&bundle, 10.0);
        assert_eq!(scores, CategoryScores::default());
    }

    #[test]
    fn test_analyst_sentiment_requires_positive_price() {
        let scorer = CategoryScorer::new();
        let bundle = MetricBundle {
            target_price: Some(105.0),
            ..Default::default()
        };
        assert!(approx(scorer.analyst_sentiment(&bundle, 100.0), 5.0));
        assert_eq!(scorer.analyst_sentiment(&bundle, 0.0), 0.0);
        // Target below price floors at zero
        assert_eq!(scorer.analyst_sentiment(&bundle, 150.0), 0.0);
    }

    #[test]
    fn test_negative_returns_floor_at_zero() {
        let bundle = MetricBundle {
            roe: Some(-0.4),
            roa: Some(0.05),
            ..Default::default()
        };
        let scorer = CategoryScorer::new();
        assert!(approx(scorer.growth(&bundle), 0.5));
        assert!(approx(scorer.profitability(&bundle), 1.25));
    }

    #[test]
    fn test_category_scores_within_bounds() {
        let extremes = [-1e12, -5.0, -0.5, 0.0, 1e-9, 0.01, 0.5, 1.0, 3.0, 50.0, 1e12];
        let scorer = CategoryScorer::new();
        for &v in &extremes {
            let bundle = MetricBundle {
                pe_ratio: Some(v),
                pb_ratio: Some(v),
                ps_ratio: Some(v),
                roe: Some(v),
                roa: Some(v),
                net_profit_margin: Some(v),
                dividend_yield: Some(v),
                debt_to_equity: Some(v),
                current_ratio: Some(v),
                solvency_score: Some(v.clamp(-100.0, 100.0) as i32),
                target_price: Some(v),
            };
            let scores = scorer.score(&bundle, 10.0);
            for category in Category::ALL {
                let s = scores.get(category);
                assert!(s >= 0.0 && s <= category.max_score(), "{:?} = {} for {}", category, s, v);
            }
        }
    }

    #[test]
    fn test_lower_pe_never_scores_lower() {
        let scorer = CategoryScorer::new();
        let mut previous = 0.0;
        for pe in [80.0, 40.0, 20.0, 10.0, 4.0, 2.0] {
            let bundle = MetricBundle {
                pe_ratio: Some(pe),
                ..Default::default()
            };
            let score = scorer.valuation(&bundle);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_higher_roe_never_scores_lower() {
        let scorer = CategoryScorer::new();
        let mut previous_growth = 0.0;
        let mut previous_profitability = 0.0;
        for roe in [-0.2, 0.0, 0.05, 0.3, 0.8, 2.0] {
            let bundle = MetricBundle {
                roe: Some(roe),
                roa: Some(0.04),
                ..Default::default()
            };
            let growth = scorer.growth(&bundle);
            let profitability = scorer.profitability(&bundle);
            assert!(growth >= previous_growth);
            assert!(profitability >= previous_profitability);
            previous_growth = growth;
            previous_profitability = profitability;
        }
    }

    #[test]
    fn test_removing_a_metric_subtracts_only_its_contribution() {
        let scorer = CategoryScorer::new();
        let full = full_bundle();
        let without_yield = MetricBundle {
            dividend_yield: None,
            ..full.clone()
        };
        let diff = scorer.profitability(&full) - scorer.profitability(&without_yield);
        assert!(approx(diff, 3.0));

        let without_current_ratio = MetricBundle {
            current_ratio: None,
            ..full.clone()
        };
        let diff = scorer.financial_health(&full) - scorer.financial_health(&without_current_ratio);
        assert!(approx(diff, 1.0));
    }
}
