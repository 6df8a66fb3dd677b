//! Procedural macros for generating database table metadata and operations
//!
//! This crate provides the `#[model]` macro and `TableMetadata` derive for automatic
//! generation of SQLite statements and column binding for struct types.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod model_macro;
mod parsing;
mod sql_generation;
mod type_mapping;

use model_macro::model_attribute;
use parsing::{parse_field_attributes, parse_table_attributes};
use sql_generation::generate_table_metadata_impl;

/// Derive macro for TableMetadata trait
///
/// Note: It's recommended to use the `#[model]` attribute macro instead,
/// which automatically includes this derive along with other necessary derives.
///
/// Every named field other than the primary key is a column. The primary key
/// must be an `Option<i64>`: `None` lets SQLite assign the identity on insert.
///
/// Manual usage (not recommended):
/// ```ignore
/// #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow, TableMetadata)]
/// #[table(name = "books")]
/// pub struct Book {
///     #[primary_key]
///     pub id: Option<i64>,
///
///     pub title: String,
///
///     #[references(authors)]
///     pub author_id: i64,
/// }
/// ```
#[proc_macro_derive(TableMetadata, attributes(table, primary_key, references))]
pub fn derive_table_metadata(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let table_info = match parse_table_attributes(&input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    let field_info = match parse_field_attributes(&input.data) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    generate_table_metadata_impl(name, &table_info, &field_info).into()
}

/// Convenience attribute macro that adds all necessary derives for a database model
///
/// Usage:
/// ```ignore
/// use table_derive::model;
///
/// #[model]
/// #[table(name = "genres")]
/// pub struct Genre {
///     #[primary_key]
///     pub id: Option<i64>,
///     pub name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model_attribute(attr, item)
}
