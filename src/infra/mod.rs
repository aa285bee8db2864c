//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool and schema creation
//! - Repositories over the relational store

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{DoctorRepository, DoctorStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockDoctorRepository;
