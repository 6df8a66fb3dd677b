//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::{EntityId, StorehausError};
use async_trait::async_trait;
use std::fmt::Debug;

/// Common data-access operations for all entities.
///
/// Mutations are staged in the store's session and only reach the database
/// when [`StoreObject::save`] is called. Reads run immediately and observe the
/// session's own staged changes.
#[async_trait]
pub trait StoreObject: Clone + Send + Sync + Debug {
    /// The model type that this object represents
    type Model: Clone + Send + Sync + Debug;

    /// List all objects of this type
    async fn list_all(&self) -> Result<Vec<Self::Model>, StorehausError>;

    /// Get an object by its ID; `None` when no such row exists
    async fn get_by_id(&self, id: EntityId) -> Result<Option<Self::Model>, StorehausError>;

    /// Stage a new object. An object without an ID gets one from the database.
    async fn create(&self, data: Self::Model) -> Result<Self::Model, StorehausError>;

    /// Stage a full update of an existing object, identified by its ID
    async fn update(&self, data: Self::Model) -> Result<Self::Model, StorehausError>;

    /// Stage the removal of an object. A missing ID is an error.
    async fn delete(&self, id: EntityId) -> Result<(), StorehausError>;

    /// Count objects of this type
    async fn count(&self) -> Result<i64, StorehausError>;

    /// Commit every change staged in the session
    async fn save(&self) -> Result<(), StorehausError>;
}
