//! Magpie - Momentum Opportunity Scanner
//!
//! Scans public market-data providers for high-momentum newly listed tokens.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use magpie::adapters::cli::{render_json, render_text, CliApp, Command, ScanCmd};
use magpie::adapters::{BoostedTokenSource, TrendingPoolSource};
use magpie::application::OpportunityScanner;
use magpie::config::{load_config, Config};
use magpie::ports::OpportunitySource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (env overrides go here, not in config files)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Scan(cmd) => scan_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

async fn scan_command(cmd: ScanCmd) -> Result<()> {
    let config = match &cmd.config {
        Some(path) => load_config(path).context("Failed to load configuration")?,
        None => Config::default(),
    };

    let chain = cmd.chain.unwrap_or_else(|| config.scanner.get_chain());
    let limit = cmd.limit.unwrap_or(config.scanner.max_results);
    let timeout = Duration::from_secs(config.scanner.timeout_secs);

    tracing::info!("scanning {} for up to {} opportunities", chain, limit);

    let boosts = BoostedTokenSource::new(&config.dexscreener.base_url, timeout)
        .context("Failed to create DexScreener source")?;
    let trending = TrendingPoolSource::new(&config.geckoterminal.base_url, timeout)
        .context("Failed to create GeckoTerminal source")?;

    let sources: Vec<Arc<dyn OpportunitySource>> = vec![Arc::new(boosts), Arc::new(trending)];
    let scanner = OpportunityScanner::new(sources);

    let report = scanner.scan(&chain, limit).await;

    match cmd.format.as_str() {
        "json" => println!("{}", render_json(&report)?),
        _ => println!("{}", render_text(&report)),
    }

    if !report.ok {
        bail!(report
            .error
            .unwrap_or_else(|| "scan failed for an unknown reason".to_string()));
    }

    Ok(())
}
