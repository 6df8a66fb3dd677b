//! Store Object - Core data-access layer for BookHaus
//!
//! This crate provides the foundational types and traits for database operations:
//! the generic store, the unit-of-work session it is bound to, and the query
//! builder used by specialized stores.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod generic_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use errors::StorehausError;
pub use generic_store::{GenericStore, Session};
pub use query_builder::{JoinClause, JoinType, QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use traits::{StoreObject, TableMetadata};

/// Integer identity shared by every entity type
pub type EntityId = i64;

// Re-exported for code generated by `table_derive`
pub use sqlx;
