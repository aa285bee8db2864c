//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::SchemaManager;

use crate::config::Config;

mod schema;

/// Database wrapper for connection management.
///
/// Owns the process-wide connection pool. Every store operation checks a
/// connection out of this pool and hands it back when the operation ends.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and make sure the schema exists.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_without_schema(config).await?;
        db.ensure_schema().await?;

        tracing::info!("Database connected and schema ready");

        Ok(db)
    }

    /// Open the connection pool without touching the schema.
    pub async fn connect_without_schema(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(config.sql_logging);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create missing tables. Safe to call any number of times.
    ///
    /// Existing tables are left as they are and no bookkeeping table is
    /// written, so the check runs again on every startup.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        SchemaManager::new(&self.connection)
            .create_table(schema::create_doctors_table())
            .await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
