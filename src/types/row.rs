use std::collections::HashMap;

use crate::error::{DbError, Result, ValueError};
use crate::traits::ColumnValue;

/// Driver-agnostic raw result from a database query.
/// All values are converted to text by the driver, `None` stands for SQL NULL.
#[derive(Debug, Clone, Default)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of values in column order
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single row result from a query.
/// Values are stored as text and accessed by column name.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, Option<String>>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub(crate) fn new(columns: &[String], values: Vec<Option<String>>) -> Self {
        let values = columns
            .iter()
            .zip(values)
            .map(|(col, val)| (col.clone(), val))
            .collect();
        Self { values }
    }

    /// Gets the raw value of a column, `None` if it is NULL.
    ///
    /// Falls back to a case-insensitive match, column labels are not
    /// case-sensitive in MySQL.
    pub fn get(&self, column: &str) -> Result<Option<&str>> {
        let value = match self.values.get(column) {
            Some(value) => value,
            None => self
                .values
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(column))
                .map(|(_, value)| value)
                .ok_or_else(|| DbError::ColumnNotFound(column.to_string()))?,
        };
        Ok(value.as_deref())
    }

    /// Gets a column and converts it into a field value.
    pub fn decode<T: ColumnValue>(&self, column: &str) -> Result<T> {
        self.decode_with(column, T::from_sql)
    }

    /// Gets a column and converts it with a custom decoder.
    pub fn decode_with<T, F>(&self, column: &str, decode: F) -> Result<T>
    where
        F: FnOnce(Option<&str>) -> std::result::Result<T, ValueError>,
    {
        let raw = self.get(column)?;
        decode(raw).map_err(|e| DbError::column(column, e))
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a query execution, containing zero or more rows.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a QueryResult from a RawQueryResult.
    pub fn from_raw(raw: RawQueryResult) -> Self {
        let rows = raw
            .rows
            .into_iter()
            .map(|values| Row::new(&raw.columns, values))
            .collect();
        Self {
            columns: raw.columns,
            rows,
        }
    }

    /// Returns the first row, if any.
    pub fn first_row(self) -> Option<Row> {
        self.rows.into_iter().next()
    }

    /// Returns all rows from the result.
    pub fn rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns a reference to the rows without consuming the result.
    pub fn rows_ref(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the column names from this result.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of rows in this result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if this result contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
