//! Generic store implementations
//!
//! This module provides generic database store functionality.

use super::core::GenericStore;
use crate::errors::StorehausError;
use crate::traits::{StoreObject, TableMetadata};
use crate::EntityId;
use async_trait::async_trait;

#[async_trait]
impl<T> StoreObject for GenericStore<T>
where
    T: TableMetadata,
{
    type Model = T;

    async fn list_all(&self) -> Result<Vec<Self::Model>, StorehausError> {
        crate::trace_log!("[LIST_ALL] {}", T::list_all_sql());
        self.session
            .fetch_all(sqlx::query_as::<_, T>(T::list_all_sql()))
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "list_all", e))
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<Self::Model>, StorehausError> {
        crate::trace_log!("[GET_BY_ID] {} ({})", T::get_by_id_sql(), id);
        self.session
            .fetch_optional(sqlx::query_as::<_, T>(T::get_by_id_sql()).bind(id))
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "get_by_id", e))
    }

    async fn create(&self, data: Self::Model) -> Result<Self::Model, StorehausError> {
        // Caller-supplied IDs take $1, ahead of the columns
        let query = match data.extract_id() {
            Some(id) => data.bind_columns(sqlx::query_as::<_, T>(T::create_with_id_sql()).bind(id)),
            None => data.bind_columns(sqlx::query_as::<_, T>(T::create_sql())),
        };

        crate::trace_log!("[CREATE] table={} explicit_id={:?}", T::table_name(), data.extract_id());
        self.session
            .stage_one(query)
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "create", e))
    }

    async fn update(&self, data: Self::Model) -> Result<Self::Model, StorehausError> {
        let id = data.extract_id().ok_or_else(|| {
            StorehausError::InvalidArgument(format!(
                "cannot update a {} entity that has no {}",
                T::table_name(),
                T::primary_key_field()
            ))
        })?;

        crate::trace_log!("[UPDATE] {} ({})", T::update_sql(), id);
        let query = data
            .bind_columns(sqlx::query_as::<_, T>(T::update_sql()))
            .bind(id);

        self.session
            .stage_optional(query)
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "update", e))?
            .ok_or_else(|| StorehausError::not_found(T::table_name(), id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), StorehausError> {
        crate::trace_log!("[DELETE] {} ({})", T::delete_by_id_sql(), id);
        let affected = self
            .session
            .stage_execute(sqlx::query(T::delete_by_id_sql()).bind(id))
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "delete", e))?;

        if affected == 0 {
            return Err(StorehausError::not_found(T::table_name(), id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, StorehausError> {
        let (total,) = self
            .session
            .fetch_optional(sqlx::query_as::<_, (i64,)>(T::count_all_sql()))
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "count", e))?
            .unwrap_or((0,));

        Ok(total)
    }

    async fn save(&self) -> Result<(), StorehausError> {
        self.session
            .commit()
            .await
            .map_err(|e| StorehausError::database_operation(T::table_name(), "save", e))
    }
}
