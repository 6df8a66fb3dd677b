//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{StoreObject, TableMetadata};

// Error types
pub use crate::errors::StorehausError;

// Core store functionality
pub use crate::generic_store::{GenericStore, Session};
pub use crate::EntityId;

// Query building
pub use crate::query_builder::{JoinClause, JoinType, QueryBuilder, QueryFilter, SortOrder};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, Row, SqlitePool};
