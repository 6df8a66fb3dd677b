//! Core catalog functionality
//!
//! This module contains the [`Catalog`] coordinator: it owns the connection
//! pool and hands out sessions and stores bound to them.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use store_object::{GenericStore, Session, TableMetadata};

use crate::errors::BookhausError;
use config::{AppConfig, DatabaseConfig};

/// Main coordinator that manages the database connection
#[derive(Debug, Clone)]
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    /// Create a catalog from database settings
    pub async fn new(config: DatabaseConfig) -> Result<Self, BookhausError> {
        config.validate()?;

        let mut connect_options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(true);
        if !config.is_in_memory() {
            connect_options = connect_options.journal_mode(SqliteJournalMode::Wal);
        }

        // Zero disables recycling; an in-memory database lives only as long
        // as its connection
        let idle_timeout = (config.idle_timeout_seconds > 0)
            .then(|| Duration::from_secs(config.idle_timeout_seconds));
        let max_lifetime = (config.max_lifetime_seconds > 0)
            .then(|| Duration::from_secs(config.max_lifetime_seconds));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(idle_timeout)
            .max_lifetime(max_lifetime)
            .connect_with(connect_options)
            .await?;

        crate::debug_log!(
            "catalog: connected to {} (max_connections={})",
            config.url,
            config.max_connections
        );

        Ok(Self { pool })
    }

    /// Create a catalog over a private in-memory database
    pub async fn in_memory() -> Result<Self, BookhausError> {
        Self::new(DatabaseConfig::in_memory()).await
    }

    /// Create a catalog from `bookhaus.toml` or the file named by `BOOKHAUS_CONFIG`
    pub async fn from_app_config() -> Result<Self, BookhausError> {
        let config = AppConfig::load()?;
        Self::new(config.database).await
    }

    /// Get database pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a new unit of work
    pub fn session(&self) -> Session {
        Session::new(self.pool.clone())
    }

    /// A store for `T` staging its changes in `session`
    pub fn store<T: TableMetadata>(&self, session: &Session) -> GenericStore<T> {
        GenericStore::new(session.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), BookhausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
