//! Candidate Opportunity Types
//!
//! A `Candidate` is one prospective tradeable token surfaced by a market-data
//! source, normalized into a common shape with a momentum score attached.

use serde::{Deserialize, Serialize};

/// Percent price change over the standard lookback windows.
///
/// Windows a provider does not report are left at 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PriceChange {
    /// 5-minute change (%)
    pub m5: f64,
    /// 1-hour change (%)
    pub h1: f64,
    /// 6-hour change (%)
    pub h6: f64,
    /// 24-hour change (%)
    pub h24: f64,
}

/// A prospective trading opportunity.
///
/// Identity is the token mint address. The score is computed by the adapter
/// that produced the candidate and never changes afterwards; candidates live
/// for a single scan and are rebuilt fresh on the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Token mint address, the dedup key
    pub mint: String,
    /// Token symbol, "Unknown" if the provider could not resolve one
    pub symbol: String,
    /// Current price in USD
    pub price_usd: f64,
    /// Percent change per lookback window
    pub price_change: PriceChange,
    /// Trailing 24h USD volume
    pub volume_24h: f64,
    /// Pooled liquidity in USD
    pub liquidity: f64,
    /// Fully diluted valuation in USD, 0 if unknown
    pub fdv: f64,
    /// Provenance tag of the source that produced this candidate
    pub source: String,
    /// Momentum score, always >= 0
    pub score: f64,
}

/// Placeholder symbol when a provider has no usable name for the token.
pub const UNKNOWN_SYMBOL: &str = "Unknown";
