//! Describe the execution of a query against the database.

use super::ast;
use super::convert;
use super::string;

/// A single query to run, tagged with the route-level name it serves.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// Used for logging and metrics only.
    pub root_field: String,
    pub query: ast::Select,
}

impl ExecutionPlan {
    pub fn new(root_field: impl Into<String>, query: ast::Select) -> Self {
        ExecutionPlan {
            root_field: root_field.into(),
            query,
        }
    }

    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> string::SQL {
        convert::select_to_sql(&self.query)
    }
}
