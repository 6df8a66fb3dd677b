//! Book store with search and eager-loaded relations
//!
//! [`BookStore`] is the generic store bound to [`Book`]; [`BookSearch`] adds the
//! queries that join a book to its author and genre.

use async_trait::async_trait;
use serde_json::Value;
use store_object::query_builder::bind_values;
use store_object::{
    EntityId, GenericStore, JoinClause, JoinType, QueryBuilder, QueryFilter, SortOrder,
    StorehausError, TableMetadata,
};

use crate::models::{Author, Book, BookDetails, Genre, BOOK_DETAILS_SELECT};

pub type BookStore = GenericStore<Book>;

/// Queries over books that load each book's author and genre in the same statement
#[async_trait]
pub trait BookSearch {
    /// Books whose title, author name or genre name contains `term`, ignoring case.
    ///
    /// Both sides are lowercased with Unicode rules, so `"été"` finds
    /// `"L'ÉTÉ"`. An empty or whitespace-only term returns every book. `%` and
    /// `_` in the term match themselves.
    async fn search_books(&self, term: &str) -> Result<Vec<BookDetails>, StorehausError>;

    /// Every book with its relations loaded
    async fn list_with_relations(&self) -> Result<Vec<BookDetails>, StorehausError>;

    /// Books written by one author
    async fn books_by_author(
        &self,
        author_id: EntityId,
    ) -> Result<Vec<BookDetails>, StorehausError>;

    /// Books filed under one genre
    async fn books_by_genre(&self, genre_id: EntityId)
        -> Result<Vec<BookDetails>, StorehausError>;
}

/// Base query joining books to their author (`a`) and genre (`g`), ordered by book id
fn details_query() -> QueryBuilder {
    QueryBuilder::new()
        .join(
            JoinClause::new_on(JoinType::Inner, Author::table_name(), "b.author_id", "a.id")
                .with_alias("a"),
        )
        .join(
            JoinClause::new_on(JoinType::Inner, Genre::table_name(), "b.genre_id", "g.id")
                .with_alias("g"),
        )
        .order_by("b.id", SortOrder::Asc)
}

async fn fetch_details(
    store: &BookStore,
    builder: QueryBuilder,
    operation: &'static str,
) -> Result<Vec<BookDetails>, StorehausError> {
    let (sql, values) = builder.to_sql(BOOK_DETAILS_SELECT);
    crate::debug_log!("[{}] {} {:?}", operation, sql, values);

    let query = bind_values(sqlx::query_as::<_, BookDetails>(&sql), values);
    store
        .session()
        .fetch_all(query)
        .await
        .map_err(|e| StorehausError::database_operation(Book::table_name(), operation, e))
}

/// Whether the title, author name or genre name contains an already lowercased needle
fn matches_term(details: &BookDetails, needle: &str) -> bool {
    [
        &details.book.title,
        &details.author.name,
        &details.genre.name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[async_trait]
impl BookSearch for GenericStore<Book> {
    async fn search_books(&self, term: &str) -> Result<Vec<BookDetails>, StorehausError> {
        if term.trim().is_empty() {
            return self.list_with_relations().await;
        }

        // SQLite's lower() folds ASCII only, so matching happens here
        let needle = term.to_lowercase();
        let mut found = fetch_details(self, details_query(), "search_books").await?;
        found.retain(|details| matches_term(details, &needle));
        Ok(found)
    }

    async fn list_with_relations(&self) -> Result<Vec<BookDetails>, StorehausError> {
        fetch_details(self, details_query(), "list_with_relations").await
    }

    async fn books_by_author(
        &self,
        author_id: EntityId,
    ) -> Result<Vec<BookDetails>, StorehausError> {
        let builder =
            details_query().filter(QueryFilter::eq("b.author_id", Value::from(author_id)));
        fetch_details(self, builder, "books_by_author").await
    }

    async fn books_by_genre(
        &self,
        genre_id: EntityId,
    ) -> Result<Vec<BookDetails>, StorehausError> {
        let builder =
            details_query().filter(QueryFilter::eq("b.genre_id", Value::from(genre_id)));
        fetch_details(self, builder, "books_by_genre").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_query_joins_both_relations() {
        let (sql, values) = details_query().to_sql(BOOK_DETAILS_SELECT);

        assert!(sql.contains("INNER JOIN \"authors\" a ON b.author_id = a.id"));
        assert!(sql.contains("INNER JOIN \"genres\" g ON b.genre_id = g.id"));
        assert!(sql.ends_with("ORDER BY b.id ASC"));
        assert!(values.is_empty());
    }

    fn details(title: &str, author: &str, genre: &str) -> BookDetails {
        BookDetails {
            book: Book::new(title, "1.00".parse().unwrap(), 1, 1, 1),
            author: Author::with_id(1, author),
            genre: Genre::with_id(1, genre),
        }
    }

    #[test]
    fn matches_any_of_the_three_columns() {
        let book = details("1984", "George Orwell", "Dystopian");

        assert!(matches_term(&book, "198"));
        assert!(matches_term(&book, "orwell"));
        assert!(matches_term(&book, "dystopian"));
        assert!(!matches_term(&book, "huxley"));
    }

    #[test]
    fn folds_non_ascii_letters_on_the_stored_side() {
        let book = details("L'ÉTÉ", "Émile Zola", "Roman");

        assert!(matches_term(&book, &"ÉTÉ".to_lowercase()));
        assert!(matches_term(&book, "émile"));
        assert!(!matches_term(&book, "ete"));
    }

    #[test]
    fn wildcards_are_literal() {
        let book = details("100% Rust", "Ferris", "Manual");

        assert!(matches_term(&book, "0%"));
        assert!(!matches_term(&book, "1%"));
        assert!(!matches_term(&book, "_"));
    }
}
