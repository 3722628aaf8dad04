//! Per-metric and per-category rows for rendering a comparison table.

use comparison_core::{Category, CompositeResult, Direction, Metric};
use serde::{Deserialize, Serialize};

/// One metric across every candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: String,
    /// Raw values in candidate order, absent values stay absent
    pub values: Vec<Option<f64>>,
    /// Index of the candidate with the best eligible value. The analyst target row is
    /// judged by upside to the current price rather than the raw target.
    pub best: Option<usize>,
}

/// One category across every candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: Category,
    pub label: String,
    pub max_score: f64,
    pub scores: Vec<f64>,
}

fn eligible(metric: Metric, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    match metric {
        Metric::DebtToEquity => value >= 0.0,
        _ if metric.direction() == Direction::LowerIsBetter => value > 0.0,
        _ => true,
    }
}

/// Value a row is judged by: upside in percent for the analyst target, the raw value otherwise
fn comparable_value(metric: Metric, result: &CompositeResult) -> Option<f64> {
    let value = result.metrics.value(metric)?;
    match metric {
        Metric::TargetPrice => {
            let price = result.candidate.price;
            if price.is_finite() && price > 0.0 {
                Some((value - price) / price * 100.0)
            } else {
                None
            }
        }
        _ => Some(value),
    }
}

fn best_index(metric: Metric, results: &[CompositeResult]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, result) in results.iter().enumerate() {
        let Some(v) = comparable_value(metric, result).filter(|v| eligible(metric, *v)) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, current)) => match metric.direction() {
                Direction::LowerIsBetter => v < current,
                Direction::HigherIsBetter => v > current,
            },
        };
        if better {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Build one row per scored metric
pub fn breakdown_rows(results: &[CompositeResult]) -> Vec<MetricRow> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let values: Vec<Option<f64>> = results.iter().map(|r| r.metrics.value(metric)).collect();
            MetricRow {
                metric,
                label: metric.label().to_string(),
                best: best_index(metric, results),
                values,
            }
        })
        .collect()
}

/// Build one row per category, for progress-bar style views
pub fn category_rows(results: &[CompositeResult]) -> Vec<CategoryRow> {
    Category::ALL
        .iter()
        .map(|&category| CategoryRow {
            category,
            label: category.label().to_string(),
            max_score: category.max_score(),
            scores: results.iter().map(|r| r.scores.get(category)).collect(),
        })
        .collect()
}
