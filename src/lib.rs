//! Magpie - Momentum Opportunity Scanner Library
//!
//! Aggregates newly listed token signals from multiple market-data providers,
//! scores them with deterministic momentum heuristics, and returns one ranked,
//! deduplicated opportunity list per scan.
//!
//! # Modules
//!
//! - `domain`: Core types and scoring logic (Candidate, PriceChange, scorers)
//! - `ports`: Trait abstractions (OpportunitySource)
//! - `adapters`: External implementations (DexScreener, GeckoTerminal, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: The scan orchestrator (OpportunityScanner)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
