//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract the market-data
//! providers the scanner aggregates over.

pub mod mocks;
pub mod source;

pub use source::{OpportunitySource, SourceError};
