//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Create the schema and start the HTTP server

pub mod args;

pub use args::{Cli, Commands};
