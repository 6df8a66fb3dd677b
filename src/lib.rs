//! # BookHaus
//!
//! A generic repository layer over SQLite for a small book catalog: CRUD on any
//! `#[model]` entity through [`GenericStore`](store_object::GenericStore),
//! changes staged in a unit-of-work [`Session`](store_object::Session) until
//! they are saved, and a free-text search over books.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::in_memory().await?;
//!     catalog.ensure_catalog_schema().await?;
//!
//!     let session = catalog.session();
//!     let authors = catalog.store::<Author>(&session);
//!     let genres = catalog.store::<Genre>(&session);
//!     let books = catalog.store::<Book>(&session);
//!
//!     let orwell = authors.create(Author::new("George Orwell")).await?;
//!     let dystopian = genres.create(Genre::new("Dystopian")).await?;
//!     books
//!         .create(Book::new(
//!             "1984",
//!             "9.99".parse::<Price>()?,
//!             12,
//!             orwell.id.unwrap_or_default(),
//!             dystopian.id.unwrap_or_default(),
//!         ))
//!         .await?;
//!
//!     // Nothing is durable until the session is saved
//!     books.save().await?;
//!
//!     for found in books.search_books("dystopian").await? {
//!         println!("{} by {}", found.book.title, found.author.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

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

pub mod book_store;
pub mod core;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod schema;

// Re-export the main public types for convenience
pub use self::core::Catalog;
pub use book_store::{BookSearch, BookStore};
pub use errors::BookhausError;
pub use models::{Author, Book, BookDetails, Genre, Price};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use store_object;
pub use table_derive;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
