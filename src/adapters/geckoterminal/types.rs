//! GeckoTerminal wire schemas
//!
//! JSON:API-style resources from the trending-pools endpoint. Numeric
//! attributes arrive as decimal strings; relationship identifiers are
//! composite `"<network>_<address>"` values.

use serde::Deserialize;

/// Response from `GET /networks/{chain}/trending_pools?include=base_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingPoolsResponse {
    #[serde(default)]
    pub data: Vec<PoolResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolResource {
    pub attributes: Option<PoolAttributes>,
    pub relationships: Option<PoolRelationships>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolAttributes {
    /// Pool display name, e.g. "WIF / SOL"
    pub name: Option<String>,
    pub base_token_price_usd: Option<String>,
    pub price_change_percentage: Option<PoolPriceChange>,
    pub volume_usd: Option<PoolVolume>,
    pub reserve_in_usd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolPriceChange {
    pub m5: Option<String>,
    pub h1: Option<String>,
    pub h6: Option<String>,
    pub h24: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolVolume {
    pub h24: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolRelationships {
    pub base_token: Option<Relationship>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipData {
    /// Composite id, e.g. "solana_EPjFW...Dt1v"
    pub id: String,
}

/// Parse a decimal-string attribute, defaulting to 0 when absent or garbled.
pub fn attr_f64(value: &Option<String>) -> f64 {
    value
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}
