//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: boosted-token listing with pair-detail enrichment
//! - GeckoTerminal: trending-pool listing with embedded base-token data
//! - CLI: command-line interface handlers

pub mod cli;
pub mod dexscreener;
pub mod geckoterminal;

pub use cli::CliApp;
pub use dexscreener::BoostedTokenSource;
pub use geckoterminal::TrendingPoolSource;
