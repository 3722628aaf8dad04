//! compare-cli: rank 2-4 stocks from a JSON file of gathered metric bundles.
//!
//! Usage:
//!   cargo run -p compare-cli -- --input candidates.json
//!   cargo run -p compare-cli -- --input candidates.json --json
//!
//! The input is an array of candidates, each with its `candidate` identity and the raw
//! `ratios`, `key_metrics`, `financial_score` and `price_target` records.

use anyhow::{Context, Result};
use comparison_core::{CandidateWithMetrics, RankingOutcome};
use comparison_engine::{breakdown_rows, category_rows, ComparisonSession, CompositeRanker};

mod config;

use config::CompareConfig;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v))
}

fn print_outcome(outcome: &RankingOutcome) {
    let symbols: Vec<&str> = outcome
        .results()
        .iter()
        .map(|r| r.candidate.symbol.as_str())
        .collect();

    println!("{:<20}{}", "", symbols.iter().map(|s| format!("{:>12}", s)).collect::<String>());

    for row in category_rows(outcome.results()) {
        let cells: String = row.scores.iter().map(|s| format!("{:>12.2}", s)).collect();
        println!("{:<20}{}  (max {:.0})", row.label, cells, row.max_score);
    }

    let composites: String = outcome
        .results()
        .iter()
        .map(|r| format!("{:>12.2}", r.composite))
        .collect();
    println!("{:<20}{}", "Composite", composites);
    println!();

    for row in breakdown_rows(outcome.results()) {
        let cells: String = row
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let marker = if row.best == Some(i) { "*" } else { " " };
                format!("{:>11}{}", format_value(*v), marker)
            })
            .collect();
        println!("{:<20}{}", row.label, cells);
    }
    println!();

    let winner = outcome.winner_result();
    println!(
        "Winner: {} ({}) with composite score {:.2}",
        winner.candidate.symbol, winner.candidate.name, winner.composite
    );
}

const USAGE: &str = "Usage: compare-cli --input <candidates.json> [--json]";

/// Value following `--input`. Another flag in that position is not a path.
fn input_path(args: &[String]) -> Result<&str> {
    let path = args
        .iter()
        .position(|a| a == "--input")
        .and_then(|i| args.get(i + 1))
        .context(USAGE)?;
    if path.starts_with("--") {
        anyhow::bail!("Expected a file path after --input, got {}. {}", path, USAGE);
    }
    Ok(path.as_str())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");
    let input_path = input_path(&args)?;

    let config = CompareConfig::from_env()?;
    tracing::debug!("Loaded config: {:?}", config);

    let raw = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path))?;
    let candidates: Vec<CandidateWithMetrics> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse candidates from {}", input_path))?;

    let mut session = ComparisonSession::with_capacity(config.max_candidates);
    for candidate in candidates {
        let symbol = candidate.symbol().to_string();
        session
            .add(candidate)
            .with_context(|| format!("Cannot add {} to the comparison", symbol))?;
    }

    let ranker = CompositeRanker::with_weights(config.weights)?;
    let session = ranker.rank_session(session)?;
    let outcome = session
        .last_outcome()
        .context("Ranking produced no outcome")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print_outcome(outcome);
    }

    Ok(())
}
