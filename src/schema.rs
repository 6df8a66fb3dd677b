//! Schema bootstrap
//!
//! Creates missing tables from model metadata. There is no versioning: an
//! existing table is left as it is.

use store_object::TableMetadata;

use crate::core::Catalog;
use crate::errors::BookhausError;
use crate::models::{Author, Book, Genre};

impl Catalog {
    /// Create the table for a model if it does not exist
    pub async fn ensure_created<T>(&self) -> Result<(), BookhausError>
    where
        T: TableMetadata,
    {
        let create_table_sql = T::create_table_sql();
        crate::debug_log!("Creating table with SQL: {}", create_table_sql);
        sqlx::query(&create_table_sql).execute(self.pool()).await?;
        Ok(())
    }

    /// Drop and recreate the table for a model
    pub async fn recreate<T>(&self) -> Result<(), BookhausError>
    where
        T: TableMetadata,
    {
        let drop_sql = T::drop_table_sql();
        crate::debug_log!("Dropping table with SQL: {}", drop_sql);
        sqlx::query(&drop_sql).execute(self.pool()).await?;
        self.ensure_created::<T>().await
    }

    /// Create the authors, genres and books tables, parents first
    pub async fn ensure_catalog_schema(&self) -> Result<(), BookhausError> {
        self.ensure_created::<Author>().await?;
        self.ensure_created::<Genre>().await?;
        self.ensure_created::<Book>().await
    }
}
