//! Unit-of-work sessions for GenericStore
//!
//! A session stages mutations inside a database transaction that is opened
//! lazily on the first mutation and held until [`Session::commit`] or
//! [`Session::rollback`]. Reads issued through the session see its staged
//! changes; other sessions only see them after commit.

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

type Staged = Option<Transaction<'static, Sqlite>>;

/// A unit of work bound to a connection pool.
///
/// Cloning a session yields another handle to the same unit of work, so
/// several stores can share one commit boundary.
///
/// # Example
/// ```ignore
/// let session = Session::new(pool);
/// let authors = GenericStore::<Author>::new(session.clone());
/// let books = GenericStore::<Book>::new(session.clone());
///
/// let author = authors.create(author).await?;
/// books.create(book_by(&author)).await?;
///
/// // Both inserts land together, or not at all
/// session.commit().await?;
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    pool: SqlitePool,
    staged: Mutex<Staged>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("pool_size", &self.inner.pool.size())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                pool,
                staged: Mutex::new(None),
            }),
        }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Whether a unit of work is open with changes not yet committed
    pub async fn has_pending_changes(&self) -> bool {
        self.inner.staged.lock().await.is_some()
    }

    /// Commit every staged change atomically.
    ///
    /// Committing with nothing staged is a no-op. On failure the backend rolls
    /// the whole unit of work back; nothing is retried.
    pub async fn commit(&self) -> Result<(), sqlx::Error> {
        let staged = self.inner.staged.lock().await.take();
        if let Some(tx) = staged {
            tx.commit().await?;
            crate::debug_log!("session: committed unit of work");
        }
        Ok(())
    }

    /// Discard every staged change
    pub async fn rollback(&self) -> Result<(), sqlx::Error> {
        let staged = self.inner.staged.lock().await.take();
        if let Some(tx) = staged {
            tx.rollback().await?;
            crate::debug_log!("session: rolled back unit of work");
        }
        Ok(())
    }

    /// Run a read query, through the open unit of work if there is one
    pub async fn fetch_all<'q, O>(
        &self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> Result<Vec<O>, sqlx::Error>
    where
        O: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        let mut staged = self.inner.staged.lock().await;
        match staged.as_mut() {
            Some(tx) => query.fetch_all(&mut **tx).await,
            None => query.fetch_all(&self.inner.pool).await,
        }
    }

    /// Run a read query returning at most one row
    pub async fn fetch_optional<'q, O>(
        &self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> Result<Option<O>, sqlx::Error>
    where
        O: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        let mut staged = self.inner.staged.lock().await;
        match staged.as_mut() {
            Some(tx) => query.fetch_optional(&mut **tx).await,
            None => query.fetch_optional(&self.inner.pool).await,
        }
    }

    /// Stage a write returning exactly one row
    pub async fn stage_one<'q, O>(
        &self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> Result<O, sqlx::Error>
    where
        O: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        let mut staged = self.inner.staged.lock().await;
        let tx = open(&self.inner.pool, &mut staged).await?;
        query.fetch_one(&mut **tx).await
    }

    /// Stage a write returning at most one row
    pub async fn stage_optional<'q, O>(
        &self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> Result<Option<O>, sqlx::Error>
    where
        O: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        let mut staged = self.inner.staged.lock().await;
        let tx = open(&self.inner.pool, &mut staged).await?;
        query.fetch_optional(&mut **tx).await
    }

    /// Stage a write, returning the number of affected rows
    pub async fn stage_execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<u64, sqlx::Error> {
        let mut staged = self.inner.staged.lock().await;
        let tx = open(&self.inner.pool, &mut staged).await?;
        let result = query.execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }
}

async fn open<'s>(
    pool: &SqlitePool,
    staged: &'s mut Staged,
) -> Result<&'s mut Transaction<'static, Sqlite>, sqlx::Error> {
    let tx = match staged.take() {
        Some(tx) => tx,
        None => {
            crate::trace_log!("session: opening unit of work");
            pool.begin().await?
        }
    };
    Ok(staged.insert(tx))
}
