//! SQL generation for mapped objects. Builders only produce statements,
//! execution is left to [`Database`](crate::Database).

mod schema;
mod select;
mod write;

pub use schema::create_table;
pub use select::Select;
pub use write::{delete, exists, insert, update};

use crate::types::SqlValue;

/// A SQL statement with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
