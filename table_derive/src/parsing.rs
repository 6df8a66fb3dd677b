//! Parsing utilities for table and field attributes
//!
//! This module handles the parsing of `#[table]`, `#[primary_key]` and
//! `#[references]` attributes and validation of table and field names.

use quote::quote;
use syn::{Attribute, Data, Error, Fields, Ident, LitStr, Result};

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate field name and return syn::Error for better proc macro error handling
pub fn validate_field_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid field name '{}': {}", name, e)))
}

fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    // Keep names portable to servers with a 63 byte identifier limit
    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }

    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed", name));
    }

    if is_reserved_keyword(name) {
        return Err(format!("Name '{}' is a reserved SQL keyword", name));
    }

    Ok(())
}

/// Check if a name is a reserved SQL keyword
fn is_reserved_keyword(name: &str) -> bool {
    const RESERVED_KEYWORDS: &[&str] = &[
        "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "INNER", "LEFT",
        "RIGHT", "FULL", "OUTER", "CROSS", "ON", "AS", "AND", "OR", "NOT", "NULL", "TRUE",
        "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "IF", "EXISTS", "IN", "LIKE", "GLOB",
        "BETWEEN", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL",
        "DISTINCT", "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "VIEW", "PRIMARY", "KEY",
        "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT", "COLUMN", "ADD",
        "RENAME", "TO", "RETURNING", "CONFLICT", "NOTHING", "TRIGGER", "BEGIN", "COMMIT",
        "ROLLBACK", "TRANSACTION", "PRAGMA", "VACUUM", "ATTACH", "DETACH", "AUTOINCREMENT",
        "DEFERRABLE", "INITIALLY", "DEFERRED",
    ];

    RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}

#[derive(Debug)]
pub struct TableInfo {
    pub name: String,
}

#[derive(Debug)]
pub struct ColumnInfo {
    pub ident: Ident,
    /// Rust type with whitespace removed, e.g. `Option<String>`
    pub rust_type: String,
    /// Table named in `#[references(table)]`
    pub references: Option<String>,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub primary_key_field: Ident,
    pub columns: Vec<ColumnInfo>,
}

pub fn parse_table_attributes(attrs: &[Attribute]) -> Result<TableInfo> {
    let mut table_name: Option<LitStr> = None;

    for attr in attrs {
        if attr.path().is_ident("table") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    table_name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported table attribute, expected `name = \"...\"`"))
                }
            })?;
        }
    }

    let table_name = table_name.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "table attribute is required: add #[table(name = \"table_name\")] to your struct",
        )
    })?;

    validate_table_name_syn(&table_name.value(), table_name.span())?;

    Ok(TableInfo {
        name: table_name.value(),
    })
}

pub fn parse_field_attributes(data: &Data) -> Result<FieldInfo> {
    let Data::Struct(data_struct) = data else {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "TableMetadata can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(Error::new_spanned(
            &data_struct.fields,
            "TableMetadata can only be derived for structs with named fields",
        ));
    };

    let mut primary_key_field = None;
    let mut columns = Vec::new();

    for field in &fields_named.named {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        validate_field_name_syn(&field_name.to_string(), field_name.span())?;

        let ty = &field.ty;
        let rust_type = quote!(#ty).to_string().replace(' ', "");

        if has_attribute(&field.attrs, "primary_key") {
            if primary_key_field.is_some() {
                return Err(Error::new_spanned(
                    field_name,
                    "only one field can be marked #[primary_key]",
                ));
            }
            if rust_type != "Option<i64>" {
                return Err(Error::new_spanned(
                    ty,
                    "primary key must be an Option<i64>; None lets the database assign it",
                ));
            }
            primary_key_field = Some(field_name.clone());
            continue;
        }

        columns.push(ColumnInfo {
            ident: field_name.clone(),
            rust_type,
            references: parse_references(&field.attrs)?,
        });
    }

    let primary_key_field = primary_key_field.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "a #[primary_key] field is required",
        )
    })?;

    if columns.is_empty() {
        return Err(Error::new_spanned(
            &primary_key_field,
            "a model needs at least one column besides its primary key",
        ));
    }

    Ok(FieldInfo {
        primary_key_field,
        columns,
    })
}

pub fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Parse `#[references(table)]` on a column
fn parse_references(attrs: &[Attribute]) -> Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("references") {
            let table: Ident = attr.parse_args()?;
            let table_name = table.to_string();
            validate_table_name_syn(&table_name, table.span())?;
            return Ok(Some(table_name));
        }
    }
    Ok(None)
}
