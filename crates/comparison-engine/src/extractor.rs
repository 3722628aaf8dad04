//! Picks the scored fields out of a candidate's raw metric sources.

use comparison_core::{CandidateWithMetrics, MetricBundle};

/// Flatten the latest ratio and key-metric records plus the solvency and price-target
/// records into a [`MetricBundle`].
///
/// Series are most-recent-first, so the first element is the latest. Values pass through
/// unchanged; an empty series leaves all of its fields absent.
pub fn extract_metrics(input: &CandidateWithMetrics) -> MetricBundle {
    let ratios = input.ratios.first();
    let key_metrics = input.key_metrics.first();

    MetricBundle {
        pe_ratio: ratios.and_then(|r| r.pe_ratio),
        pb_ratio: ratios.and_then(|r| r.pb_ratio),
        ps_ratio: ratios.and_then(|r| r.ps_ratio),
        roe: key_metrics.and_then(|k| k.roe),
        roa: key_metrics.and_then(|k| k.roa),
        net_profit_margin: ratios.and_then(|r| r.net_profit_margin),
        dividend_yield: ratios.and_then(|r| r.dividend_yield),
        debt_to_equity: ratios.and_then(|r| r.debt_to_equity),
        current_ratio: ratios.and_then(|r| r.current_ratio),
        solvency_score: input.financial_score.as_ref().and_then(|s| s.piotroski_score),
        target_price: input.price_target.as_ref().and_then(|t| t.target_consensus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comparison_core::{
        Candidate, FinancialRatios, FinancialScore, KeyMetrics, PriceTargetConsensus,
    };

    fn ratios(pe: f64) -> FinancialRatios {
        FinancialRatios {
            pe_ratio: Some(pe),
            ..Default::default()
        }
    }

    #[test]
    fn test_takes_first_record_of_each_series() {
        let mut input = CandidateWithMetrics::bare(Candidate::new("AAPL", "Apple Inc", 190.0));
        input.ratios = vec![ratios(28.0), ratios(31.0)];
        input.key_metrics = vec![
            KeyMetrics { roe: Some(1.5), roa: Some(0.3), ..Default::default() },
            KeyMetrics { roe: Some(0.9), roa: None, ..Default::default() },
        ];

        let bundle = extract_metrics(&input);
        assert_eq!(bundle.pe_ratio, Some(28.0));
        assert_eq!(bundle.roe, Some(1.5));
        assert_eq!(bundle.roa, Some(0.3));
    }

    #[test]
    fn test_missing_sources_yield_empty_bundle() {
        let input = CandidateWithMetrics::bare(Candidate::new("XYZ", "Xyz Corp", 10.0));
        assert_eq!(extract_metrics(&input), MetricBundle::default());
    }

    #[test]
    fn test_values_pass_through_unvalidated() {
        let mut input = CandidateWithMetrics::bare(Candidate::new("NEG", "Negative Co", 5.0));
        input.ratios = vec![FinancialRatios {
            pe_ratio: Some(-12.0),
            debt_to_equity: Some(-0.5),
            ..Default::default()
        }];
        input.financial_score = Some(FinancialScore { piotroski_score: Some(7), altman_z_score: None });
        input.price_target = Some(PriceTargetConsensus {
            target_consensus: Some(6.5),
            ..Default::default()
        });

        let bundle = extract_metrics(&input);
        assert_eq!(bundle.pe_ratio, Some(-12.0));
        assert_eq!(bundle.debt_to_equity, Some(-0.5));
        assert_eq!(bundle.solvency_score, Some(7));
        assert_eq!(bundle.target_price, Some(6.5));
    }
}
