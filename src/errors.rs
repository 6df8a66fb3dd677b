//! Error types for the BookHaus crate
//!
//! This module contains all error types that can be returned by catalog operations.

use config::ConfigError;
use store_object::StorehausError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookhausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StorehausError),
}
