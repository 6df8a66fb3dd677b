//! Convenience re-exports for common BookHaus usage
//!
//! # Example
//!
//! ```rust
//! use bookhaus::prelude::*;
//! ```

// Core catalog components
pub use crate::book_store::{BookSearch, BookStore};
pub use crate::core::Catalog;
pub use crate::errors::BookhausError;
pub use crate::models::{Author, Book, BookDetails, Genre, Price};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Re-export store_object module for macro-generated code
pub use store_object;

// Re-export table derive for model creation
pub use table_derive::{model, TableMetadata};

// Common external dependencies
pub use async_trait;
pub use rust_decimal::Decimal;
pub use sqlx;
pub use tokio;
