//! DexScreener Boosted-Token Source
//!
//! Surfaces recently promoted ("boosted") tokens. The boost listing only
//! carries addresses, so each shortlisted token needs a second lookup against
//! the pair-detail endpoint; those lookups run concurrently and any one of
//! them may fail without taking down the batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::debug;

use super::types::{BoostedToken, PairInfo, TokenPairsResponse};
use crate::domain::{
    score_boosted_pair, Candidate, PairMetrics, PriceChange, UNKNOWN_SYMBOL,
};
use crate::ports::{OpportunitySource, SourceError};

/// Provenance tag for candidates from this source.
pub const SOURCE_NAME: &str = "dexscreener-boosts";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com";

#[derive(Debug, Clone)]
pub struct BoostedTokenSource {
    http: Client,
    base_url: String,
}

impl BoostedTokenSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_boost_listing(&self) -> Result<Vec<BoostedToken>, SourceError> {
        let url = format!("{}/token-boosts/latest/v1", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        response.json().await.map_err(SourceError::Http)
    }

    async fn fetch_first_pair(&self, address: &str) -> Result<Option<PairInfo>, SourceError> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, address);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let detail: TokenPairsResponse = response.json().await?;
        // First pair entry is the representative one.
        Ok(detail.pairs.and_then(|pairs| pairs.into_iter().next()))
    }
}

/// Map a pair detail onto the common candidate shape, scoring as we go.
fn candidate_from_pair(address: &str, pair: &PairInfo) -> Candidate {
    let price_change = pair
        .price_change
        .as_ref()
        .map(|c| PriceChange {
            m5: c.m5.unwrap_or(0.0),
            h1: c.h1.unwrap_or(0.0),
            h6: c.h6.unwrap_or(0.0),
            h24: c.h24.unwrap_or(0.0),
        })
        .unwrap_or_default();

    let volume_24h = pair.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0);
    let liquidity = pair.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0);
    let fdv = pair.fdv.unwrap_or(0.0);
    let (buys_24h, sells_24h) = pair
        .txns
        .as_ref()
        .and_then(|t| t.h24.as_ref())
        .map(|w| (w.buys.unwrap_or(0), w.sells.unwrap_or(0)))
        .unwrap_or((0, 0));

    let score = score_boosted_pair(&PairMetrics {
        fdv,
        m5_change: price_change.m5,
        h1_change: price_change.h1,
        h24_change: price_change.h24,
        volume_24h,
        liquidity,
        buys_24h,
        sells_24h,
    });

    let symbol = pair
        .base_token
        .as_ref()
        .and_then(|t| t.symbol.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());

    Candidate {
        mint: address.to_string(),
        symbol,
        price_usd: pair
            .price_usd
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0.0),
        price_change,
        volume_24h,
        liquidity,
        fdv,
        source: SOURCE_NAME.to_string(),
        score,
    }
}

#[async_trait]
impl OpportunitySource for BoostedTokenSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self, chain: &str, limit: usize) -> Result<Vec<Candidate>, SourceError> {
        let listing = self.fetch_boost_listing().await?;
        debug!("boost listing returned {} entries", listing.len());

        let shortlist: Vec<String> = listing
            .into_iter()
            .filter(|boost| boost.chain_id == chain)
            .map(|boost| boost.token_address)
            .take(limit)
            .collect();

        // One detail lookup per shortlisted token; fan-out is bounded by the
        // shortlist length, which is at most `limit`.
        let mut lookups = JoinSet::new();
        let slot_count = shortlist.len();
        for (slot, address) in shortlist.into_iter().enumerate() {
            let source = self.clone();
            lookups.spawn(async move {
                let outcome = source.fetch_first_pair(&address).await;
                (slot, address, outcome)
            });
        }

        // Reassemble in listing order so the provider's ranking survives.
        let mut slots: Vec<Option<Candidate>> = vec![None; slot_count];
        while let Some(joined) = lookups.join_next().await {
            let Ok((slot, address, outcome)) = joined else {
                continue;
            };
            match outcome {
                Ok(Some(pair)) => slots[slot] = Some(candidate_from_pair(&address, &pair)),
                Ok(None) => debug!("no pairs listed for {}", address),
                Err(e) => debug!("pair lookup failed for {}: {}", address, e),
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pair_from_json(json: &str) -> PairInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_source_creation() {
        let source = BoostedTokenSource::new(DEFAULT_BASE_URL, Duration::from_secs(10));
        assert!(source.is_ok());
        assert_eq!(source.unwrap().name(), SOURCE_NAME);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let source =
            BoostedTokenSource::new("https://api.dexscreener.com/", Duration::from_secs(10))
                .unwrap();
        assert_eq!(source.base_url, "https://api.dexscreener.com");
    }

    #[test]
    fn test_candidate_from_full_pair() {
        let pair = pair_from_json(
            r#"{
                "baseToken": {"address": "Mint1", "symbol": "WIF"},
                "priceUsd": "0.0042",
                "priceChange": {"m5": 5.0, "h1": 10.0, "h6": 12.0, "h24": 20.0},
                "volume": {"h24": 150000.0},
                "liquidity": {"usd": 50000.0},
                "fdv": 300000,
                "txns": {"h24": {"buys": 120, "sells": 80}}
            }"#,
        );

        let candidate = candidate_from_pair("Mint1", &pair);
        assert_eq!(candidate.mint, "Mint1");
        assert_eq!(candidate.symbol, "WIF");
        assert_eq!(candidate.source, SOURCE_NAME);
        assert_relative_eq!(candidate.price_usd, 0.0042);
        assert_relative_eq!(candidate.price_change.h24, 20.0);
        // Matches the full-metrics scorer on the same inputs.
        assert_relative_eq!(candidate.score, 115.0);
    }

    #[test]
    fn test_candidate_from_sparse_pair_defaults_to_zero() {
        let pair = pair_from_json("{}");

        let candidate = candidate_from_pair("Mint2", &pair);
        assert_eq!(candidate.symbol, UNKNOWN_SYMBOL);
        assert_eq!(candidate.price_usd, 0.0);
        assert_eq!(candidate.volume_24h, 0.0);
        assert_eq!(candidate.liquidity, 0.0);
        assert_eq!(candidate.fdv, 0.0);
        assert_eq!(candidate.price_change.m5, 0.0);
        // Thin liquidity and zero-buy ratio penalties both floor out.
        assert_eq!(candidate.score, 0.0);
    }

    #[test]
    fn test_candidate_unparseable_price_defaults_to_zero() {
        let pair = pair_from_json(r#"{"priceUsd": "not-a-number"}"#);
        let candidate = candidate_from_pair("Mint3", &pair);
        assert_eq!(candidate.price_usd, 0.0);
    }

    #[test]
    fn test_candidate_empty_symbol_becomes_unknown() {
        let pair = pair_from_json(r#"{"baseToken": {"address": "Mint4", "symbol": ""}}"#);
        let candidate = candidate_from_pair("Mint4", &pair);
        assert_eq!(candidate.symbol, UNKNOWN_SYMBOL);
    }
}
