//! DexScreener wire schemas
//!
//! Raw response shapes for the token-boosts listing and the per-token pair
//! detail endpoint. Everything the mapping layer reads is `Option` -- the API
//! omits or nulls fields freely on young tokens.

use serde::Deserialize;

/// Entry from `GET /token-boosts/latest/v1`.
#[derive(Debug, Clone, Deserialize)]
pub struct BoostedToken {
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
    pub url: Option<String>,
}

/// Response from `GET /latest/dex/tokens/{address}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairsResponse {
    pub pairs: Option<Vec<PairInfo>>,
}

/// One trading pair for a token.
#[derive(Debug, Clone, Deserialize)]
pub struct PairInfo {
    #[serde(rename = "baseToken")]
    pub base_token: Option<PairToken>,
    /// Price arrives as a decimal string
    #[serde(rename = "priceUsd")]
    pub price_usd: Option<String>,
    #[serde(rename = "priceChange")]
    pub price_change: Option<PairPriceChange>,
    pub volume: Option<PairVolume>,
    pub liquidity: Option<PairLiquidity>,
    pub fdv: Option<f64>,
    pub txns: Option<PairTxns>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairToken {
    pub address: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairPriceChange {
    pub m5: Option<f64>,
    pub h1: Option<f64>,
    pub h6: Option<f64>,
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairVolume {
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairLiquidity {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairTxns {
    pub h24: Option<TxnWindow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TxnWindow {
    pub buys: Option<u64>,
    pub sells: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boost_listing() {
        let json = r#"[
            {"tokenAddress": "Mint1111111111111111111111111111111111111111",
             "chainId": "solana",
             "totalAmount": 500,
             "url": "https://dexscreener.com/solana/x"},
            {"tokenAddress": "0xabc", "chainId": "ethereum"}
        ]"#;

        let boosts: Vec<BoostedToken> = serde_json::from_str(json).unwrap();
        assert_eq!(boosts.len(), 2);
        assert_eq!(boosts[0].chain_id, "solana");
        assert_eq!(boosts[0].total_amount, Some(500.0));
        assert!(boosts[1].url.is_none());
    }

    #[test]
    fn test_parse_pair_detail_with_sparse_fields() {
        let json = r#"{
            "pairs": [{
                "baseToken": {"address": "Mint1", "symbol": "WIF"},
                "priceUsd": "0.0042",
                "priceChange": {"m5": 2.5, "h1": 8.0},
                "volume": {"h24": 120000.5},
                "liquidity": {"usd": 48000.0},
                "fdv": 300000,
                "txns": {"h24": {"buys": 120, "sells": 80}}
            }]
        }"#;

        let response: TokenPairsResponse = serde_json::from_str(json).unwrap();
        let pair = &response.pairs.unwrap()[0];
        assert_eq!(pair.price_usd.as_deref(), Some("0.0042"));
        let change = pair.price_change.as_ref().unwrap();
        assert_eq!(change.h1, Some(8.0));
        assert_eq!(change.h24, None);
        assert_eq!(pair.txns.as_ref().unwrap().h24.as_ref().unwrap().buys, Some(120));
    }

    #[test]
    fn test_parse_pair_detail_without_pairs() {
        let response: TokenPairsResponse = serde_json::from_str(r#"{"pairs": null}"#).unwrap();
        assert!(response.pairs.is_none());
    }
}
