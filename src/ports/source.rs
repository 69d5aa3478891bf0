use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Candidate;

/// Errors an opportunity source can surface to the aggregator.
///
/// An `Err` at this boundary means the source's top-level request failed and
/// it contributed nothing this scan. Per-item problems (a malformed entry, a
/// failed detail lookup) never reach here -- adapters skip the item, log it,
/// and return the subset they did parse.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// One external market-data provider, normalized to the common candidate shape.
///
/// `fetch` is single-attempt and fail-soft: no retries, no caching, candidate
/// order is the provider's native order (the aggregator does the ranking).
#[async_trait]
pub trait OpportunitySource: Send + Sync {
    /// Provenance tag stamped onto every candidate this source yields.
    fn name(&self) -> &str;

    /// Fetch up to `limit` candidates listed on `chain`.
    async fn fetch(&self, chain: &str, limit: usize) -> Result<Vec<Candidate>, SourceError>;
}
