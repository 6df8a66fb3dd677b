//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::Sqlite;
use std::fmt::Debug;

/// Metadata about database table structure and operations
/// This trait should be derived using the `#[model]` attribute macro, which
/// automatically includes all necessary derives.
///
/// Recommended usage:
/// ```ignore
/// use table_derive::model;
///
/// #[model]
/// #[table(name = "authors")]
/// pub struct Author {
///     #[primary_key]
///     pub id: Option<i64>,
///     pub name: String,
/// }
/// ```
///
/// Column fields are bound in declaration order. The generated statements use
/// `$n` placeholders:
/// - `create_sql`: columns are `$1..$n`
/// - `create_with_id_sql`: the ID is `$1`, columns are `$2..$n+1`
/// - `update_sql`: columns are `$1..$n`, the ID is `$n+1`
pub trait TableMetadata:
    Clone
    + Send
    + Sync
    + Debug
    + Unpin
    + Serialize
    + for<'de> Deserialize<'de>
    + for<'r> sqlx::FromRow<'r, SqliteRow>
    + 'static
{
    /// The table name in the database
    fn table_name() -> &'static str;

    /// Get the primary key field name
    fn primary_key_field() -> &'static str;

    /// SQL for INSERT letting the database assign the ID
    fn create_sql() -> &'static str;

    /// SQL for INSERT with a caller-supplied ID
    fn create_with_id_sql() -> &'static str;

    /// SQL for UPDATE of every column by ID
    fn update_sql() -> &'static str;

    /// SQL for SELECT all operation
    fn list_all_sql() -> &'static str;

    /// SQL for SELECT by ID operation
    fn get_by_id_sql() -> &'static str;

    /// SQL for DELETE by ID operation
    fn delete_by_id_sql() -> &'static str;

    /// SQL for COUNT all operation
    fn count_all_sql() -> &'static str;

    /// Generate CREATE TABLE IF NOT EXISTS SQL statement
    fn create_table_sql() -> String;

    /// Generate DROP TABLE SQL statement
    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS \"{}\"", Self::table_name())
    }

    /// Extract ID from model instance; `None` until the database assigns one
    fn extract_id(&self) -> Option<EntityId>;

    /// Bind every column value, in declaration order, to a query
    fn bind_columns<'q>(
        &'q self,
        query: QueryAs<'q, Sqlite, Self, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, Self, SqliteArguments<'q>>
    where
        Self: Sized;
}
