//! Catalog entities
//!
//! `Author`, `Genre` and `Book` are plain `#[model]` structs; `BookDetails` is
//! the read model for a book loaded together with its relations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteRow, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Encode, FromRow, Row, Sqlite, Type};
use std::fmt;
use std::str::FromStr;
use store_object::EntityId;
use table_derive::model;

/// Currency amount with exact decimal precision.
///
/// Stored as TEXT so no precision is lost to SQLite's floating point REAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Type<Sqlite> for Price {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode(self.0.to_string(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Price {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(text.parse()?))
    }
}

#[model]
#[table(name = "authors")]
pub struct Author {
    #[primary_key]
    pub id: Option<i64>,
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Author with a caller-chosen identity, for fixtures
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

#[model]
#[table(name = "genres")]
pub struct Genre {
    #[primary_key]
    pub id: Option<i64>,
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Genre with a caller-chosen identity, for fixtures
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

#[model]
#[table(name = "books")]
pub struct Book {
    #[primary_key]
    pub id: Option<i64>,
    pub title: String,
    pub price: Price,
    pub quantity_available: i32,
    #[references(authors)]
    pub author_id: i64,
    #[references(genres)]
    pub genre_id: i64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        price: Price,
        quantity_available: i32,
        author_id: EntityId,
        genre_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            price,
            quantity_available,
            author_id,
            genre_id,
        }
    }

    /// Give the book a caller-chosen identity, for fixtures
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A book with its author and genre loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub book: Book,
    pub author: Author,
    pub genre: Genre,
}

/// Columns selected for a [`BookDetails`] row; the books table is aliased `b`
pub(crate) const BOOK_DETAILS_SELECT: &str = "SELECT b.id, b.title, b.price, \
     b.quantity_available, b.author_id, b.genre_id, \
     a.name AS author_name, g.name AS genre_name FROM \"books\" b";

impl<'r> FromRow<'r, SqliteRow> for BookDetails {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let book = Book::from_row(row)?;
        let author = Author {
            id: Some(book.author_id),
            name: row.try_get("author_name")?,
        };
        let genre = Genre {
            id: Some(book.genre_id),
            name: row.try_get("genre_name")?,
        };

        Ok(Self {
            book,
            author,
            genre,
        })
    }
}
