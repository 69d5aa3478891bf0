//! Opportunity Scanner
//!
//! The aggregation pipeline: fan out to every registered source, join the
//! outcomes, merge, dedup by mint, rank by score, truncate. Source failures
//! are isolated -- a provider outage costs its own candidates and nothing
//! else -- and anything unexpected escaping the pipeline is downgraded to a
//! failure report instead of a propagated error.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::Candidate;
use crate::ports::OpportunitySource;

/// Default number of opportunities returned per scan.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Outcome of one scan invocation.
///
/// A scan never errors at this interface: partial provider outages shrink
/// the list, and only an unexpected internal fault sets `ok = false` with a
/// human-readable reason.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub opportunities: Vec<Candidate>,
    pub count: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl ScanReport {
    fn success(opportunities: Vec<Candidate>) -> Self {
        Self {
            count: opportunities.len(),
            opportunities,
            ok: true,
            error: None,
            generated_at: Utc::now(),
        }
    }

    fn failure(reason: String) -> Self {
        Self {
            opportunities: Vec::new(),
            count: 0,
            ok: false,
            error: Some(reason),
            generated_at: Utc::now(),
        }
    }
}

/// Aggregates candidates from all registered opportunity sources.
pub struct OpportunityScanner {
    sources: Vec<Arc<dyn OpportunitySource>>,
}

impl OpportunityScanner {
    /// Registration order matters: on a mint collision between sources, the
    /// earlier-registered source's candidate wins.
    pub fn new(sources: Vec<Arc<dyn OpportunitySource>>) -> Self {
        Self { sources }
    }

    /// Run one scan over `chain`, returning at most `max_results` candidates
    /// ranked by score descending.
    pub async fn scan(&self, chain: &str, max_results: usize) -> ScanReport {
        match self.scan_inner(chain, max_results).await {
            Ok(opportunities) => {
                info!(
                    "scan of {} complete: {} opportunities",
                    chain,
                    opportunities.len()
                );
                ScanReport::success(opportunities)
            }
            Err(e) => {
                warn!("scan of {} failed: {:#}", chain, e);
                ScanReport::failure(format!("{:#}", e))
            }
        }
    }

    async fn scan_inner(&self, chain: &str, max_results: usize) -> Result<Vec<Candidate>> {
        let max_results = max_results.max(1);

        let mut fetches = JoinSet::new();
        for (index, source) in self.sources.iter().enumerate() {
            let source = Arc::clone(source);
            let chain = chain.to_string();
            fetches.spawn(async move {
                let name = source.name().to_string();
                let outcome = source.fetch(&chain, max_results).await;
                (index, name, outcome)
            });
        }

        // Join all fetches, slotting batches back into registration order so
        // the dedup tie-break stays deterministic under concurrency.
        let mut batches: Vec<Vec<Candidate>> = vec![Vec::new(); self.sources.len()];
        while let Some(joined) = fetches.join_next().await {
            match joined {
                Ok((index, name, Ok(candidates))) => {
                    debug!("source {} yielded {} candidates", name, candidates.len());
                    batches[index] = candidates;
                }
                Ok((_, name, Err(e))) => {
                    warn!("source {} contributed nothing: {}", name, e);
                }
                Err(e) => {
                    warn!("source task aborted: {}", e);
                }
            }
        }

        // Dedup by mint, first occurrence wins.
        let mut seen = HashSet::new();
        let mut merged: Vec<Candidate> = Vec::new();
        for candidate in batches.into_iter().flatten() {
            if candidate.mint.is_empty() {
                debug!("dropping candidate with empty mint from {}", candidate.source);
                continue;
            }
            if seen.insert(candidate.mint.clone()) {
                merged.push(candidate);
            }
        }

        merged.sort_by(|a, b| b.score.total_cmp(&a.score));
        merged.truncate(max_results);
        Ok(merged)
    }
}
