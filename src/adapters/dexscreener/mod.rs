//! DexScreener Adapter
//!
//! Boosted-token discovery backed by the public DexScreener API:
//! - `BoostedTokenSource`: recently promoted tokens with pair-detail enrichment

mod boosts;
mod types;

pub use boosts::{BoostedTokenSource, DEFAULT_BASE_URL, SOURCE_NAME};
