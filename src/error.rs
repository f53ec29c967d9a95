use thiserror::Error;

/// Error type for dbobject operations
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Table {table} has no primary key, cannot {operation}")]
    MissingPrimaryKey {
        table: String,
        operation: &'static str,
    },

    #[error("AUTO_INCREMENT requires an INT or BIGINT column, {column} is {sql_type}")]
    InvalidAutoIncrement { column: String, sql_type: String },

    #[error("Column {column}: {source}")]
    Column {
        column: String,
        #[source]
        source: ValueError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DbError {
    /// Wraps a value coercion error with the column it occurred in.
    pub fn column(column: impl Into<String>, source: ValueError) -> Self {
        DbError::Column {
            column: column.into(),
            source,
        }
    }
}

/// Failure converting a single value between a Rust field and its SQL form.
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unexpected NULL")]
    UnexpectedNull,

    #[error("cannot parse {value:?} as {target}: {message}")]
    Parse {
        target: &'static str,
        value: String,
        message: String,
    },

    #[error("cannot encode value: {0}")]
    Encode(String),
}

impl ValueError {
    pub fn parse(target: &'static str, value: &str, message: impl ToString) -> Self {
        ValueError::Parse {
            target,
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for dbobject operations
pub type Result<T> = std::result::Result<T, DbError>;
