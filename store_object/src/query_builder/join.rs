/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Represents a complete JOIN clause (`JOIN table [alias] ON left = right`)
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// Type of join (INNER, LEFT)
    pub join_type: JoinType,
    /// Table to join with
    pub table: String,
    /// Optional table alias
    pub alias: Option<String>,
    pub left_field: String,
    pub right_field: String,
}

impl JoinClause {
    /// Create a new JOIN clause with ON condition
    pub fn new_on(
        join_type: JoinType,
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            table: table.into(),
            alias: None,
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }

    /// Add an alias for the joined table
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Get the table reference (alias if present, otherwise table name)
    pub fn table_ref(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.table)
    }

    pub fn to_sql(&self) -> String {
        let table = match &self.alias {
            Some(alias) => format!("\"{}\" {}", self.table, alias),
            None => format!("\"{}\"", self.table),
        };
        format!(
            "{} {} ON {} = {}",
            self.join_type.to_sql(),
            table,
            self.left_field,
            self.right_field
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_to_sql() {
        assert_eq!(JoinType::Inner.to_sql(), "INNER JOIN");
        assert_eq!(JoinType::Left.to_sql(), "LEFT JOIN");
    }

    #[test]
    fn test_join_clause_with_alias() {
        let join = JoinClause::new_on(JoinType::Inner, "authors", "b.author_id", "a.id")
            .with_alias("a");

        assert_eq!(join.table_ref(), "a");
        assert_eq!(
            join.to_sql(),
            "INNER JOIN \"authors\" a ON b.author_id = a.id"
        );
    }

    #[test]
    fn test_join_clause_table_ref_without_alias() {
        let join = JoinClause::new_on(
            JoinType::Left,
            "genres",
            "books.genre_id",
            "genres.id",
        );

        assert_eq!(join.table_ref(), "genres");
        assert_eq!(
            join.to_sql(),
            "LEFT JOIN \"genres\" ON books.genre_id = genres.id"
        );
    }
}
