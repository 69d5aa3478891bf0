use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::source::{OpportunitySource, SourceError};
use crate::domain::Candidate;

/// Mock opportunity source that records calls and yields a canned batch.
#[derive(Debug, Default)]
pub struct StaticSource {
    name: String,
    candidates: Vec<Candidate>,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl StaticSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder method to append a canned candidate to the batch
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Builder method to make every fetch fail at the source level
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get all recorded (chain, limit) calls
    pub fn get_calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OpportunitySource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, chain: &str, limit: usize) -> Result<Vec<Candidate>, SourceError> {
        self.calls.lock().unwrap().push((chain.to_string(), limit));
        if self.fail {
            return Err(SourceError::Parse("simulated provider outage".to_string()));
        }
        Ok(self.candidates.clone())
    }
}
