//! CLI Command Handlers
//!
//! Argument parsing and report rendering for the magpie scanner CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::ScanReport;

/// Magpie - Momentum Opportunity Scanner for newly listed tokens
#[derive(Parser, Debug)]
#[command(
    name = "magpie",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Momentum opportunity scanner for newly listed tokens",
    long_about = "Magpie aggregates boosted-token and trending-pool feeds from public \
                  market-data providers, scores each candidate with deterministic momentum \
                  heuristics, and prints one ranked, deduplicated list per scan."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one scan and print the ranked opportunities
    Scan(ScanCmd),
}

/// Run one scan
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Chain to scan (overrides config)
    #[arg(long, value_name = "CHAIN")]
    pub chain: Option<String>,

    /// Maximum number of opportunities to return (overrides config)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

/// Render a scan report as an aligned text table.
pub fn render_text(report: &ScanReport) -> String {
    if !report.ok {
        return format!(
            "Scan failed: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
    }

    if report.opportunities.is_empty() {
        return "No opportunities found.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<12} {:>7} {:>14} {:>8} {:>8} {:>14} {:>14}  {}\n",
        "#", "SYMBOL", "SCORE", "PRICE USD", "5M %", "1H %", "VOL 24H", "LIQUIDITY", "SOURCE"
    ));
    for (rank, c) in report.opportunities.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<12} {:>7.1} {:>14.6} {:>8.2} {:>8.2} {:>14.0} {:>14.0}  {}\n",
            rank + 1,
            c.symbol,
            c.score,
            c.price_usd,
            c.price_change.m5,
            c.price_change.h1,
            c.volume_24h,
            c.liquidity,
            c.source,
        ));
    }
    out.push_str(&format!("\n{} opportunities", report.count));
    out
}

/// Render a scan report as pretty-printed JSON.
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
