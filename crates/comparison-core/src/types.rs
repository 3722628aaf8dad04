use serde::{Deserialize, Serialize};

use crate::ComparisonError;

/// A stock taking part in a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl Candidate {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            beta: None,
            market_cap: None,
        }
    }
}

/// One period of the provider's financial-ratio series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialRatios {
    pub date: Option<String>,
    #[serde(alias = "priceEarningsRatio")]
    pub pe_ratio: Option<f64>,
    #[serde(alias = "priceToBookRatio")]
    pub pb_ratio: Option<f64>,
    #[serde(alias = "priceToSalesRatio")]
    pub ps_ratio: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub dividend_yield: Option<f64>,
    #[serde(alias = "debtEquityRatio")]
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
}

/// One period of the provider's key-metrics series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyMetrics {
    pub date: Option<String>,
    #[serde(alias = "returnOnEquity")]
    pub roe: Option<f64>,
    #[serde(alias = "returnOnAssets")]
    pub roa: Option<f64>,
}

/// Solvency record carrying a Piotroski-style 0-9 score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialScore {
    pub piotroski_score: Option<i32>,
    pub altman_z_score: Option<f64>,
}

/// Analyst price-target consensus record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTargetConsensus {
    pub target_consensus: Option<f64>,
    pub target_high: Option<f64>,
    pub target_low: Option<f64>,
    pub target_median: Option<f64>,
}

/// A candidate together with every raw metric source gathered for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateWithMetrics {
    pub candidate: Candidate,
    #[serde(default)]
    pub ratios: Vec<FinancialRatios>,
    #[serde(default)]
    pub key_metrics: Vec<KeyMetrics>,
    #[serde(default)]
    pub financial_score: Option<FinancialScore>,
    #[serde(default)]
    pub price_target: Option<PriceTargetConsensus>,
}

impl CandidateWithMetrics {
    /// A candidate with no metric sources at all
    pub fn bare(candidate: Candidate) -> Self {
        Self {
            candidate,
            ratios: Vec::new(),
            key_metrics: Vec::new(),
            financial_score: None,
            price_target: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.candidate.symbol
    }
}

/// Flat set of the fields the scoring model consumes. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBundle {
    pub pe_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    pub ps_ratio: Option<f64>,
    pub roe: Option<f64>,
    pub roa: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub solvency_score: Option<i32>,
    pub target_price: Option<f64>,
}

impl MetricBundle {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PeRatio => self.pe_ratio,
            Metric::PbRatio => self.pb_ratio,
            Metric::PsRatio => self.ps_ratio,
            Metric::Roe => self.roe,
            Metric::Roa => self.roa,
            Metric::NetProfitMargin => self.net_profit_margin,
            Metric::DividendYield => self.dividend_yield,
            Metric::DebtToEquity => self.debt_to_equity,
            Metric::CurrentRatio => self.current_ratio,
            Metric::SolvencyScore => self.solvency_score.map(f64::from),
            Metric::TargetPrice => self.target_price,
        }
    }
}

/// Whether a smaller or larger raw value reads as better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Every metric the scoring model reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    PeRatio,
    PbRatio,
    PsRatio,
    Roe,
    Roa,
    NetProfitMargin,
    DividendYield,
    DebtToEquity,
    CurrentRatio,
    SolvencyScore,
    TargetPrice,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::PeRatio,
        Metric::PbRatio,
        Metric::PsRatio,
        Metric::Roe,
        Metric::Roa,
        Metric::NetProfitMargin,
        Metric::DividendYield,
        Metric::DebtToEquity,
        Metric::CurrentRatio,
        Metric::SolvencyScore,
        Metric::TargetPrice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::PeRatio => "P/E Ratio",
            Metric::PbRatio => "P/B Ratio",
            Metric::PsRatio => "P/S Ratio",
            Metric::Roe => "ROE",
            Metric::Roa => "ROA",
            Metric::NetProfitMargin => "Net Profit Margin",
            Metric::DividendYield => "Dividend Yield",
            Metric::DebtToEquity => "Debt/Equity",
            Metric::CurrentRatio => "Current Ratio",
            Metric::SolvencyScore => "Piotroski Score",
            Metric::TargetPrice => "Analyst Target",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Metric::PeRatio | Metric::PbRatio | Metric::PsRatio | Metric::DebtToEquity => {
                Direction::LowerIsBetter
            }
            _ => Direction::HigherIsBetter,
        }
    }
}

/// Scoring category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Valuation,
    Growth,
    Profitability,
    FinancialHealth,
    AnalystSentiment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Valuation,
        Category::Growth,
        Category::Profitability,
        Category::FinancialHealth,
        Category::AnalystSentiment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Valuation => "Valuation",
            Category::Growth => "Growth",
            Category::Profitability => "Profitability",
            Category::FinancialHealth => "Financial Health",
            Category::AnalystSentiment => "Analyst Sentiment",
        }
    }

    /// Upper bound of the category score: the sum of its per-metric caps
    pub fn max_score(&self) -> f64 {
        match self {
            Category::Valuation => 75.0,
            Category::Growth => 20.0,
            Category::Profitability => 55.0,
            Category::FinancialHealth => 30.0,
            Category::AnalystSentiment => 10.0,
        }
    }

    /// Weight of the category in the composite score
    pub fn default_weight(&self) -> f64 {
        match self {
            Category::Valuation => 0.25,
            Category::Growth => 0.20,
            Category::Profitability => 0.25,
            Category::FinancialHealth => 0.20,
            Category::AnalystSentiment => 0.10,
        }
    }
}

/// Sub-scores for the five categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub valuation: f64,
    pub growth: f64,
    pub profitability: f64,
    pub financial_health: f64,
    pub analyst_sentiment: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Valuation => self.valuation,
            Category::Growth => self.growth,
            Category::Profitability => self.profitability,
            Category::FinancialHealth => self.financial_health,
            Category::AnalystSentiment => self.analyst_sentiment,
        }
    }
}

/// Scored view of one candidate, retained for breakdown display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub candidate: Candidate,
    pub metrics: MetricBundle,
    pub scores: CategoryScores,
    /// Weighted composite on a nominal 0-100 scale
    pub composite: f64,
}

/// Winner of a ranking run plus every candidate's result in input order.
///
/// The winner index always points into `results`, including after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RankingOutcomeParts")]
pub struct RankingOutcome {
    winner_index: usize,
    results: Vec<CompositeResult>,
}

#[derive(Deserialize)]
struct RankingOutcomeParts {
    winner_index: usize,
    results: Vec<CompositeResult>,
}

impl TryFrom<RankingOutcomeParts> for RankingOutcome {
    type Error = ComparisonError;

    fn try_from(parts: RankingOutcomeParts) -> Result<Self, Self::Error> {
        Self::new(parts.winner_index, parts.results)
    }
}

impl RankingOutcome {
    pub fn new(winner_index: usize, results: Vec<CompositeResult>) -> Result<Self, ComparisonError> {
        if winner_index >= results.len() {
            return Err(ComparisonError::WinnerOutOfRange {
                index: winner_index,
                len: results.len(),
            });
        }
        Ok(Self {
            winner_index,
            results,
        })
    }

    pub fn winner_index(&self) -> usize {
        self.winner_index
    }

    pub fn results(&self) -> &[CompositeResult] {
        &self.results
    }

    pub fn winner(&self) -> &Candidate {
        &self.results[self.winner_index].candidate
    }

    pub fn winner_result(&self) -> &CompositeResult {
        &self.results[self.winner_index]
    }
}
