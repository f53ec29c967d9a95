use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExecuteResult, RawQueryResult, SqlValue};

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Acquiring a connection for each call and releasing it afterwards
/// - Converting SqlValue parameters to native types
/// - Executing statements and converting results to RawQueryResult
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Run a statement that returns rows.
    /// Parameters use `?` placeholders, bound in order.
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;

    /// Run a statement that does not return rows (DDL, INSERT, UPDATE, DELETE).
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ExecuteResult>;
}
