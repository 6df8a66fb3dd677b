//! Traits for database operations
//!
//! This module contains the traits that define the interface for database operations
//! in the store-object library.

pub mod core;
pub mod table_metadata;

// Re-export all public items for convenience
pub use self::core::StoreObject;
pub use table_metadata::TableMetadata;
