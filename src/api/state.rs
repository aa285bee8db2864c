//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, DoctorRepository, DoctorStore};

/// Shared state handed to every request handler.
///
/// Built once at startup; handlers never reach for global state.
#[derive(Clone)]
pub struct AppState {
    /// Doctor record store
    pub doctors: Arc<dyn DoctorRepository>,
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the database store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let doctors: Arc<dyn DoctorRepository> =
            Arc::new(DoctorStore::new(database.get_connection()));

        Self { doctors, database }
    }

    /// Create new application state with a manually injected repository.
    pub fn new(doctors: Arc<dyn DoctorRepository>, database: Arc<Database>) -> Self {
        Self { doctors, database }
    }
}
