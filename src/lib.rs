//! Doctor Registry - HTTP CRUD service for doctor records
//!
//! A single `medico` table exposed over four JSON routes, built with
//! Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Doctor entity and its input type
//! - **infra**: Database pool, schema and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the schema if needed and start the server
//! cargo run -- serve
//!
//! # Bind somewhere else
//! cargo run -- serve --host 0.0.0.0 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Doctor, DoctorInput};
pub use errors::{AppError, AppResult};
pub use infra::Database;
