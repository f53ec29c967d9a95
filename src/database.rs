use std::sync::Arc;

use crate::builders::{self, Select, Statement};
use crate::clauses::Conditions;
use crate::config::DatabaseConfig;
use crate::drivers::MySqlDriver;
use crate::error::{DbError, Result};
use crate::traits::{column_values, ColumnValue, DatabaseDriver, DatabaseObject};
use crate::types::{ExecuteResult, QueryResult, SqlTypeMapping, SqlValue};

/// Main entry point for dbobject.
/// Maps `DatabaseObject` types to tables and runs one statement per call
/// through its driver.
pub struct Database {
    driver: Arc<dyn DatabaseDriver>,
    prefix: String,
    sql_types: SqlTypeMapping,
}

impl Database {
    /// Create a MySQL-backed database without connecting.
    /// Connections are opened per statement.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let driver = MySqlDriver::new(config.url()?);
        Ok(Self::with_driver(Arc::new(driver), config.prefix.clone()))
    }

    /// Create a MySQL-backed database, checking that a connection can be
    /// established.
    ///
    /// # Example
    /// ```ignore
    /// let config = DatabaseConfig::new("localhost", 3306, "game", "server", "secret");
    /// let db = Database::connect(&config.with_prefix("game_")).await?;
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let driver = MySqlDriver::connect(config.url()?).await?;
        Ok(Self::with_driver(Arc::new(driver), config.prefix.clone()))
    }

    /// Create a new database with a custom driver.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Arc<dyn DatabaseDriver>, prefix: impl Into<String>) -> Self {
        Self {
            driver,
            prefix: prefix.into(),
            sql_types: SqlTypeMapping::default(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefixed table name of `T`.
    pub fn table_name<T: DatabaseObject>(&self) -> String {
        format!("{}{}", self.prefix, T::TABLE)
    }

    pub fn sql_type_mapping(&self) -> &SqlTypeMapping {
        &self.sql_types
    }

    /// Register custom SQL column types used by [`create_table`](Self::create_table).
    pub fn sql_type_mapping_mut(&mut self) -> &mut SqlTypeMapping {
        &mut self.sql_types
    }

    /// `CREATE TABLE IF NOT EXISTS` from the mapped columns of `T`.
    pub async fn create_table<T: DatabaseObject>(&self) -> Result<()> {
        let sql = builders::create_table::<T>(&self.table_name::<T>(), &self.sql_types)?;
        self.execute_update(&sql, &[]).await?;
        Ok(())
    }

    /// Insert an object. AUTO_INCREMENT columns are left to the database,
    /// the generated id is in [`ExecuteResult::last_insert_id`].
    pub async fn insert<T: DatabaseObject>(&self, object: &T) -> Result<ExecuteResult> {
        let statement = builders::insert(&self.table_name::<T>(), object)?;
        self.run(&statement).await
    }

    /// Update an object's row by primary key.
    ///
    /// Objects without a primary key, or with nothing but key and
    /// AUTO_INCREMENT columns, are skipped and report zero affected rows.
    pub async fn update<T: DatabaseObject>(&self, object: &T) -> Result<ExecuteResult> {
        let table = self.table_name::<T>();
        match builders::update(&table, object)? {
            Some(statement) => self.run(&statement).await,
            None => {
                tracing::debug!(table = %table, "update skipped, no primary key or no columns to set");
                Ok(ExecuteResult::default())
            }
        }
    }

    /// Delete an object's row by primary key.
    pub async fn delete<T: DatabaseObject>(&self, object: &T) -> Result<ExecuteResult> {
        let statement = builders::delete(&self.table_name::<T>(), object)?;
        self.run(&statement).await
    }

    /// Run a statement that returns no rows, with `?` parameters bound in order.
    pub async fn execute_update(&self, sql: &str, params: &[SqlValue]) -> Result<ExecuteResult> {
        tracing::debug!(sql = %sql, params = params.len(), "execute");
        self.driver.execute(sql, params).await
    }

    /// Values of the named columns of an object, in the given order.
    /// Pairs with [`execute_update`](Self::execute_update) for hand-written statements.
    pub fn object_params<T: DatabaseObject>(object: &T, columns: &[&str]) -> Result<Vec<SqlValue>> {
        let values = column_values(object)?;
        columns
            .iter()
            .map(|name| {
                values
                    .iter()
                    .find(|(column, _)| column.name == *name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| DbError::ColumnNotFound(name.to_string()))
            })
            .collect()
    }

    pub async fn select_all<T: DatabaseObject>(&self) -> Result<Vec<T>> {
        self.select_all_with_condition(&Conditions::new()).await
    }

    /// All rows matching every condition.
    pub async fn select_all_with_condition<T: DatabaseObject>(
        &self,
        conditions: &Conditions,
    ) -> Result<Vec<T>> {
        let statement = Select::all(self.table_name::<T>())
            .where_(conditions.clone())
            .build();
        let result = self.fetch(&statement).await?;
        result.rows_ref().iter().map(T::from_row).collect()
    }

    /// The first row of the table, if any.
    pub async fn select<T: DatabaseObject>(&self) -> Result<Option<T>> {
        self.select_with_condition(&Conditions::new()).await
    }

    /// The first row matching every condition, if any.
    pub async fn select_with_condition<T: DatabaseObject>(
        &self,
        conditions: &Conditions,
    ) -> Result<Option<T>> {
        let statement = Select::all(self.table_name::<T>())
            .where_(conditions.clone())
            .build();
        let result = self.fetch(&statement).await?;
        result.first_row().map(|row| T::from_row(&row)).transpose()
    }

    /// A single column of the first matching row.
    /// `None` when no row matches; use `V = Option<_>` for nullable columns.
    pub async fn select_value<T: DatabaseObject, V: ColumnValue>(
        &self,
        column: &str,
        conditions: &Conditions,
    ) -> Result<Option<V>> {
        let statement = Select::column(self.table_name::<T>(), column)
            .where_(conditions.clone())
            .build();
        let result = self.fetch(&statement).await?;
        result.first_row().map(|row| row.decode(column)).transpose()
    }

    pub async fn exists_with_condition<T: DatabaseObject>(
        &self,
        conditions: &Conditions,
    ) -> Result<bool> {
        let statement = Select::one(self.table_name::<T>())
            .where_(conditions.clone())
            .limit(1)
            .build();
        Ok(!self.fetch(&statement).await?.is_empty())
    }

    /// Whether a row with the object's primary key exists.
    pub async fn exists<T: DatabaseObject>(&self, object: &T) -> Result<bool> {
        let statement = builders::exists(&self.table_name::<T>(), object)?;
        Ok(!self.fetch(&statement).await?.is_empty())
    }

    async fn run(&self, statement: &Statement) -> Result<ExecuteResult> {
        self.execute_update(&statement.sql, &statement.params).await
    }

    async fn fetch(&self, statement: &Statement) -> Result<QueryResult> {
        tracing::debug!(sql = %statement.sql, params = statement.params.len(), "query");
        let raw = self.driver.query(&statement.sql, &statement.params).await?;
        Ok(QueryResult::from_raw(raw))
    }
}
