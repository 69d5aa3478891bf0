//! GeckoTerminal Trending-Pool Source
//!
//! Surfaces pools trending on a network. The listing already embeds the
//! base-token relationship, so a single request covers the whole batch; the
//! work here is unpacking composite relationship ids and decimal-string
//! attributes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::{attr_f64, PoolResource, TrendingPoolsResponse};
use crate::domain::{
    score_trending_pool, Candidate, PoolMetrics, PriceChange, UNKNOWN_SYMBOL,
};
use crate::ports::{OpportunitySource, SourceError};

/// Provenance tag for candidates from this source.
pub const SOURCE_NAME: &str = "geckoterminal-trending";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.geckoterminal.com/api/v2";

/// Relationship ids shorter than this after prefix-stripping are treated as
/// malformed and dropped.
const MIN_ADDRESS_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct TrendingPoolSource {
    http: Client,
    base_url: String,
}

impl TrendingPoolSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_trending(&self, chain: &str) -> Result<TrendingPoolsResponse, SourceError> {
        let url = format!(
            "{}/networks/{}/trending_pools?include=base_token",
            self.base_url, chain
        );
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        response.json().await.map_err(SourceError::Http)
    }
}

/// Pull the base-token address out of a composite `"<chain>_<address>"` id.
///
/// Ids that do not carry the chain prefix are taken as-is; anything shorter
/// than `MIN_ADDRESS_LEN` after stripping is rejected as malformed.
fn extract_base_address(id: &str, chain: &str) -> Option<String> {
    let address = id
        .strip_prefix(chain)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(id);

    if address.len() < MIN_ADDRESS_LEN {
        None
    } else {
        Some(address.to_string())
    }
}

/// Base-token symbol from a pool name like "WIF / SOL".
fn symbol_from_pool_name(name: Option<&str>) -> String {
    name.and_then(|n| n.split(" / ").next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string())
}

/// Map one pool resource onto the common candidate shape, or skip it.
fn candidate_from_pool(pool: &PoolResource, chain: &str) -> Option<Candidate> {
    let id = &pool
        .relationships
        .as_ref()?
        .base_token
        .as_ref()?
        .data
        .as_ref()?
        .id;
    let mint = extract_base_address(id, chain)?;

    let attrs = pool.attributes.as_ref()?;
    let change = attrs.price_change_percentage.as_ref();
    let price_change = PriceChange {
        m5: change.map(|c| attr_f64(&c.m5)).unwrap_or(0.0),
        h1: change.map(|c| attr_f64(&c.h1)).unwrap_or(0.0),
        h6: change.map(|c| attr_f64(&c.h6)).unwrap_or(0.0),
        h24: change.map(|c| attr_f64(&c.h24)).unwrap_or(0.0),
    };

    let volume_24h = attrs
        .volume_usd
        .as_ref()
        .map(|v| attr_f64(&v.h24))
        .unwrap_or(0.0);
    let liquidity = attr_f64(&attrs.reserve_in_usd);

    let score = score_trending_pool(&PoolMetrics {
        h1_change: price_change.h1,
        h6_change: price_change.h6,
        volume_24h,
        liquidity,
    });

    Some(Candidate {
        mint,
        symbol: symbol_from_pool_name(attrs.name.as_deref()),
        price_usd: attr_f64(&attrs.base_token_price_usd),
        price_change,
        volume_24h,
        liquidity,
        fdv: 0.0,
        source: SOURCE_NAME.to_string(),
        score,
    })
}

#[async_trait]
impl OpportunitySource for TrendingPoolSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self, chain: &str, limit: usize) -> Result<Vec<Candidate>, SourceError> {
        let response = self.fetch_trending(chain).await?;
        debug!("trending listing returned {} pools", response.data.len());

        let candidates: Vec<Candidate> = response
            .data
            .iter()
            .filter_map(|pool| {
                let candidate = candidate_from_pool(pool, chain);
                if candidate.is_none() {
                    debug!("skipping pool with unusable base token relationship");
                }
                candidate
            })
            .take(limit)
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pool_from_json(json: &str) -> PoolResource {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_source_creation() {
        let source = TrendingPoolSource::new(DEFAULT_BASE_URL, Duration::from_secs(10));
        assert!(source.is_ok());
        assert_eq!(source.unwrap().name(), SOURCE_NAME);
    }

    #[test]
    fn test_extract_base_address() {
        let mint = "Mint11111111111111111111111111111111111111";
        assert_eq!(
            extract_base_address(&format!("solana_{}", mint), "solana"),
            Some(mint.to_string())
        );
        // No prefix: id taken as-is when long enough.
        assert_eq!(
            extract_base_address(mint, "solana"),
            Some(mint.to_string())
        );
    }

    #[test]
    fn test_extract_base_address_rejects_short_ids() {
        assert_eq!(extract_base_address("solana_abc", "solana"), None);
        assert_eq!(extract_base_address("solana_", "solana"), None);
        assert_eq!(extract_base_address("x", "solana"), None);
    }

    #[test]
    fn test_symbol_from_pool_name() {
        assert_eq!(symbol_from_pool_name(Some("WIF / SOL")), "WIF");
        assert_eq!(symbol_from_pool_name(Some("BONK")), "BONK");
        assert_eq!(symbol_from_pool_name(Some("")), UNKNOWN_SYMBOL);
        assert_eq!(symbol_from_pool_name(None), UNKNOWN_SYMBOL);
    }

    #[test]
    fn test_candidate_from_pool() {
        let pool = pool_from_json(
            r#"{
                "attributes": {
                    "name": "WIF / SOL",
                    "base_token_price_usd": "2.41",
                    "price_change_percentage": {"h1": "10.0", "h6": "25.0"},
                    "volume_usd": {"h24": "100000"},
                    "reserve_in_usd": "30000"
                },
                "relationships": {
                    "base_token": {"data": {"id": "solana_Mint11111111111111111111111111111111111111"}}
                }
            }"#,
        );

        let candidate = candidate_from_pool(&pool, "solana").unwrap();
        assert_eq!(candidate.mint, "Mint11111111111111111111111111111111111111");
        assert_eq!(candidate.symbol, "WIF");
        assert_eq!(candidate.source, SOURCE_NAME);
        assert_eq!(candidate.fdv, 0.0);
        assert_relative_eq!(candidate.price_usd, 2.41);
        // 20 (h1*2) + 25 (h6) + 20 (vol/liq > 2) + 10 (base)
        assert_relative_eq!(candidate.score, 75.0);
    }

    #[test]
    fn test_candidate_from_pool_missing_relationship() {
        let pool = pool_from_json(r#"{"attributes": {"name": "X / SOL"}}"#);
        assert!(candidate_from_pool(&pool, "solana").is_none());
    }

    #[test]
    fn test_candidate_from_pool_short_address_dropped() {
        let pool = pool_from_json(
            r#"{
                "attributes": {"name": "X / SOL", "reserve_in_usd": "20000"},
                "relationships": {"base_token": {"data": {"id": "solana_abc"}}}
            }"#,
        );
        assert!(candidate_from_pool(&pool, "solana").is_none());
    }
}
