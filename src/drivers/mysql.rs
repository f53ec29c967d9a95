use async_trait::async_trait;
use sqlx::mysql::types::MySqlTime;
use sqlx::mysql::{MySqlArguments, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::types::chrono::{NaiveDate, NaiveDateTime};
use sqlx::types::{Decimal, JsonValue};
use sqlx::{Column, Connection, MySql, Row, TypeInfo, ValueRef};

use crate::error::{DbError, Result};
use crate::traits::DatabaseDriver;
use crate::types::{ExecuteResult, RawQueryResult, SqlValue};

/// MySQL driver implementation using sqlx.
///
/// Opens a new connection for every statement and closes it afterwards.
pub struct MySqlDriver {
    url: String,
}

impl MySqlDriver {
    /// Create a driver for a `mysql://` connection URL without connecting.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create a driver and check that a connection can be established.
    pub async fn connect(url: impl Into<String>) -> Result<Self> {
        let driver = Self::new(url);
        let conn = driver.connection().await?;
        close(conn).await;
        Ok(driver)
    }

    /// Open a new connection to the database.
    pub async fn connection(&self) -> Result<MySqlConnection> {
        MySqlConnection::connect(&self.url).await.map_err(|e| {
            tracing::warn!(error = %e, "MySQL connection failed");
            DbError::ConnectionFailed(e.to_string())
        })
    }
}

#[async_trait]
impl DatabaseDriver for MySqlDriver {
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let mut conn = self.connection().await?;
        let fetched = bind(sqlx::query(sql), params).fetch_all(&mut conn).await;
        close(conn).await;
        let rows = fetched.map_err(|e| DbError::QueryFailed(e.to_string()))?;

        // Extract column names
        let columns: Vec<String> = match rows.first() {
            Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
            None => Vec::new(),
        };

        let mut result_rows = Vec::with_capacity(rows.len());
        for row in &rows {
            let values = (0..row.columns().len())
                .map(|i| cell_to_text(row, i))
                .collect::<Result<Vec<_>>>()?;
            result_rows.push(values);
        }

        Ok(RawQueryResult::new(columns, result_rows))
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ExecuteResult> {
        let mut conn = self.connection().await?;
        let executed = bind(sqlx::query(sql), params).execute(&mut conn).await;
        close(conn).await;
        let done = executed.map_err(|e| DbError::QueryFailed(e.to_string()))?;

        Ok(ExecuteResult::new(done.rows_affected(), done.last_insert_id()))
    }
}

async fn close(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "MySQL connection did not close cleanly");
    }
}

/// Bind SqlValue parameters in order.
fn bind<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    params: &'q [SqlValue],
) -> Query<'q, MySql, MySqlArguments> {
    params.iter().fold(query, |query, value| match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Int32(i) => query.bind(*i),
        SqlValue::Int64(i) => query.bind(*i),
        SqlValue::Double(d) => query.bind(*d),
        SqlValue::Bool(b) => query.bind(*b),
    })
}

/// Convert the value at a given index to text, `None` for NULL.
fn cell_to_text(row: &MySqlRow, index: usize) -> Result<Option<String>> {
    let raw = row
        .try_get_raw(index)
        .map_err(|e| DbError::QueryFailed(e.to_string()))?;
    if raw.is_null() {
        return Ok(None);
    }
    let type_name = raw.type_info().name().to_string();

    if let Ok(val) = row.try_get::<String, _>(index) {
        return Ok(Some(val));
    }
    if let Ok(val) = row.try_get::<i64, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<u64, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<f64, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<f32, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<bool, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<Decimal, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<NaiveDateTime, _>(index) {
        return Ok(Some(datetime_text(&val)));
    }
    if let Ok(val) = row.try_get::<NaiveDate, _>(index) {
        return Ok(Some(val.format("%Y-%m-%d").to_string()));
    }
    if let Ok(val) = row.try_get::<MySqlTime, _>(index) {
        return Ok(Some(time_text(&val)));
    }
    if let Ok(val) = row.try_get::<JsonValue, _>(index) {
        return Ok(Some(val.to_string()));
    }
    if let Ok(val) = row.try_get::<Vec<u8>, _>(index) {
        return Ok(Some(String::from_utf8_lossy(&val).into_owned()));
    }

    Err(DbError::QueryFailed(format!(
        "unsupported column type {} at index {}",
        type_name, index
    )))
}

/// `YYYY-MM-DD hh:mm:ss`, with fractional seconds only when present.
fn datetime_text(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// `[-]hh:mm:ss[.ffffff]`; TIME columns may be negative or exceed 24 hours.
fn time_text(value: &MySqlTime) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let mut text = format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        value.hours(),
        value.minutes(),
        value.seconds()
    );
    if value.microseconds() != 0 {
        text.push_str(&format!(".{:06}", value.microseconds()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::mysql::types::MySqlTimeSign;

    #[test]
    fn test_datetime_text() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 0))
            .unwrap();
        assert_eq!(datetime_text(&value), "2024-03-09 07:05:00");

        let value = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_micro_opt(7, 5, 0, 250_000))
            .unwrap();
        assert_eq!(datetime_text(&value), "2024-03-09 07:05:00.250");
    }

    #[test]
    fn test_time_text() {
        let time = MySqlTime::new(MySqlTimeSign::Positive, 8, 5, 0, 0).unwrap();
        assert_eq!(time_text(&time), "08:05:00");

        let time = MySqlTime::new(MySqlTimeSign::Negative, 838, 59, 59, 0).unwrap();
        assert_eq!(time_text(&time), "-838:59:59");

        let time = MySqlTime::new(MySqlTimeSign::Positive, 0, 0, 1, 5).unwrap();
        assert_eq!(time_text(&time), "00:00:01.000005");
    }

    #[test]
    fn test_decimal_and_json_text() {
        let decimal: Decimal = "12.50".parse().unwrap();
        assert_eq!(decimal.to_string(), "12.50");

        let json: JsonValue = serde_json::json!({"slots": 9});
        assert_eq!(json.to_string(), r#"{"slots":9}"#);
    }
}
