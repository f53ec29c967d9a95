mod json;
mod mapping;
mod row;
mod sql_value;

pub use json::Json;
pub use mapping::{SqlTypeMapping, DEFAULT_SQL_TYPE};
pub use row::{QueryResult, RawQueryResult, Row};
pub use sql_value::{ExecuteResult, SqlValue};
