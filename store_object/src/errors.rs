use crate::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorehausError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: no {table} row with id {id}")]
    NotFound { table: &'static str, id: EntityId },

    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StorehausError {
    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }

    pub fn not_found(table: &'static str, id: EntityId) -> Self {
        Self::NotFound { table, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The backend error, if this failure came from the database
    pub fn database_error(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Database { source, .. } => Some(source),
            _ => None,
        }
    }
}
