use super::session::Session;
use crate::traits::TableMetadata;
use std::marker::PhantomData;

/// Generic database store that provides default implementations for all database operations
///
/// A store is bound to one [`Session`]; every mutation it stages commits or
/// rolls back with that session.
#[derive(Clone)]
pub struct GenericStore<T: TableMetadata> {
    pub(crate) session: Session,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: TableMetadata> std::fmt::Debug for GenericStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericStore")
            .field("table", &T::table_name())
            .field("session", &self.session)
            .finish()
    }
}

impl<T: TableMetadata> GenericStore<T> {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            _phantom: PhantomData,
        }
    }

    /// The session this store stages its changes in
    pub fn session(&self) -> &Session {
        &self.session
    }
}
