//! CLI Adapter
//!
//! Command-line interface for the magpie scanner.
//! Uses clap derive macros for argument parsing.

pub mod commands;

pub use commands::{render_json, render_text, CliApp, Command, ScanCmd};
