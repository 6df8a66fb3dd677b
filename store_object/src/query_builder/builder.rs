//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::SqlGenerator;
use serde_json::Value;

/// Query builder for composing joins, filters and ordering onto a base SELECT
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            joins: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
        }
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> (String, Vec<Value>) {
        SqlGenerator::build_where_clause(&self.conditions)
    }

    /// Build JOIN clauses
    pub fn build_join_clause(&self) -> String {
        SqlGenerator::build_join_clause(&self.joins)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self) -> String {
        SqlGenerator::build_order_clause(&self.order_by)
    }

    /// Build complete query parts (JOIN, WHERE, ORDER BY, Values)
    pub fn build(&self) -> (String, String, String, Vec<Value>) {
        let join_clause = self.build_join_clause();
        let (where_clause, values) = self.build_where_clause();
        let order_clause = self.build_order_clause();

        (join_clause, where_clause, order_clause, values)
    }

    /// Append the built clauses to `select` and return the statement with its parameters
    pub fn to_sql(&self, select: &str) -> (String, Vec<Value>) {
        let (join_clause, where_clause, order_clause, values) = self.build();

        let mut full_sql = String::with_capacity(
            select.len() + join_clause.len() + where_clause.len() + order_clause.len() + 3,
        );
        full_sql.push_str(select);
        for clause in [&join_clause, &where_clause, &order_clause] {
            if !clause.is_empty() {
                full_sql.push(' ');
                full_sql.push_str(clause);
            }
        }

        (full_sql, values)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
