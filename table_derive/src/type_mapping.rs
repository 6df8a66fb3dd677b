//! SQL type conversion utilities
//!
//! This module maps Rust field types to SQLite column declarations.

/// Map a whitespace-free Rust type name to a SQLite column type
pub fn rust_type_to_sqlite_type(rust_type: &str) -> &'static str {
    match inner_type(rust_type) {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "bool" => "INTEGER",
        "f32" | "f64" => "REAL",
        "Vec<u8>" => "BLOB",
        // Decimal amounts are stored as text so no precision is lost
        "Price" | "Decimal" | "rust_decimal::Decimal" => "TEXT",
        _ => "TEXT",
    }
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    rust_type.starts_with("Option<")
}

fn inner_type(rust_type: &str) -> &str {
    rust_type
        .strip_prefix("Option<")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(rust_type)
}
