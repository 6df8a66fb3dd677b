//! SQL code generation for database operations
//!
//! This module generates SQL statements and Rust code for database operations
//! based on parsed table and field metadata.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::{ColumnInfo, FieldInfo, TableInfo};
use crate::type_mapping::{is_optional_type, rust_type_to_sqlite_type};

/// Quote an identifier that parsing has already validated
fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}

fn placeholders(range: std::ops::RangeInclusive<usize>) -> String {
    range
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// All statements generated for one table
pub struct TableSql {
    pub create: String,
    pub create_with_id: String,
    pub update: String,
    pub list_all: String,
    pub get_by_id: String,
    pub delete_by_id: String,
    pub count_all: String,
    pub create_table: String,
}

pub fn generate_sql(table_name: &str, primary_key: &str, columns: &[ColumnInfo]) -> TableSql {
    let table = quoted(table_name);
    let pk = quoted(primary_key);
    let column_names: Vec<String> = columns
        .iter()
        .map(|c| quoted(&c.ident.to_string()))
        .collect();
    let n = column_names.len();

    let create = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        table,
        column_names.join(", "),
        placeholders(1..=n)
    );

    let create_with_id = format!(
        "INSERT INTO {} ({}, {}) VALUES ({}) RETURNING *",
        table,
        pk,
        column_names.join(", "),
        placeholders(1..=n + 1)
    );

    let assignments: Vec<String> = column_names
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect();
    let update = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
        table,
        assignments.join(", "),
        pk,
        n + 1
    );

    let mut definitions = vec![format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", pk)];
    for column in columns {
        let mut definition = format!(
            "{} {}",
            quoted(&column.ident.to_string()),
            rust_type_to_sqlite_type(&column.rust_type)
        );
        if !is_optional_type(&column.rust_type) {
            definition.push_str(" NOT NULL");
        }
        if let Some(target) = &column.references {
            // Checked at commit so a unit of work may stage rows in any order
            definition.push_str(&format!(
                " REFERENCES {} (\"id\") DEFERRABLE INITIALLY DEFERRED",
                quoted(target)
            ));
        }
        definitions.push(definition);
    }
    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table,
        definitions.join(", ")
    );

    TableSql {
        create,
        create_with_id,
        update,
        list_all: format!("SELECT * FROM {} ORDER BY {}", table, pk),
        get_by_id: format!("SELECT * FROM {} WHERE {} = $1", table, pk),
        delete_by_id: format!("DELETE FROM {} WHERE {} = $1", table, pk),
        count_all: format!("SELECT COUNT(*) AS total FROM {}", table),
        create_table,
    }
}

pub fn generate_table_metadata_impl(
    name: &Ident,
    table_info: &TableInfo,
    field_info: &FieldInfo,
) -> TokenStream {
    let table_name = &table_info.name;
    let pk_field = &field_info.primary_key_field;
    let pk_name = pk_field.to_string();

    let sql = generate_sql(table_name, &pk_name, &field_info.columns);
    let TableSql {
        create,
        create_with_id,
        update,
        list_all,
        get_by_id,
        delete_by_id,
        count_all,
        create_table,
    } = sql;

    let column_idents: Vec<&Ident> = field_info.columns.iter().map(|c| &c.ident).collect();

    quote! {
        impl store_object::TableMetadata for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn primary_key_field() -> &'static str {
                #pk_name
            }

            fn create_sql() -> &'static str {
                #create
            }

            fn create_with_id_sql() -> &'static str {
                #create_with_id
            }

            fn update_sql() -> &'static str {
                #update
            }

            fn list_all_sql() -> &'static str {
                #list_all
            }

            fn get_by_id_sql() -> &'static str {
                #get_by_id
            }

            fn delete_by_id_sql() -> &'static str {
                #delete_by_id
            }

            fn count_all_sql() -> &'static str {
                #count_all
            }

            fn create_table_sql() -> String {
                #create_table.to_string()
            }

            fn extract_id(&self) -> Option<store_object::EntityId> {
                self.#pk_field
            }

            fn bind_columns<'q>(
                &'q self,
                query: store_object::sqlx::query::QueryAs<
                    'q,
                    store_object::sqlx::Sqlite,
                    Self,
                    store_object::sqlx::sqlite::SqliteArguments<'q>,
                >,
            ) -> store_object::sqlx::query::QueryAs<
                'q,
                store_object::sqlx::Sqlite,
                Self,
                store_object::sqlx::sqlite::SqliteArguments<'q>,
            >
            where
                Self: Sized,
            {
                query #(.bind(&self.#column_idents))*
            }
        }
    }
}
