//! GeckoTerminal Adapter
//!
//! Trending-pool discovery backed by the public GeckoTerminal API:
//! - `TrendingPoolSource`: network trending pools with embedded base-token data

mod trending;
mod types;

pub use trending::{TrendingPoolSource, DEFAULT_BASE_URL, SOURCE_NAME};
