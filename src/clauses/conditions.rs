use crate::error::{DbError, Result};
use crate::traits::ColumnValue;
use crate::types::SqlValue;

/// Equality conditions of a WHERE clause, combined with AND.
///
/// Entries keep insertion order, which is also the order their values are
/// bound in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    entries: Vec<(String, SqlValue)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `column = value` condition.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.push(column, value);
        self
    }

    /// Adds a `column = value` condition, converting the value the same way
    /// it is written to that column (enums by name, booleans as 1 / 0, ...).
    pub fn eq_value<V: ColumnValue>(self, column: impl Into<String>, value: &V) -> Result<Self> {
        let column = column.into();
        let value = value.to_sql().map_err(|e| DbError::column(column.as_str(), e))?;
        Ok(self.eq(column, value))
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.entries.push((column.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the SQL fragment and appends the values to `params`.
    /// Returns an empty string when there are no conditions.
    pub fn build_sql(&self, params: &mut Vec<SqlValue>) -> String {
        let mut sql = String::new();
        for (i, (column, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }
            sql.push_str(column);
            sql.push_str(" = ?");
            params.push(value.clone());
        }
        sql
    }
}

impl<K, V> FromIterator<(K, V)> for Conditions
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut conditions = Conditions::new();
        for (column, value) in iter {
            conditions.push(column, value);
        }
        conditions
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Conditions
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
