use crate::builders::Statement;
use crate::clauses::Conditions;

/// Builder for the SELECT statements issued against a mapped table.
#[derive(Debug, Clone)]
pub struct Select {
    projection: String,
    table: String,
    conditions: Conditions,
    limit: Option<u64>,
}

impl Select {
    fn new(projection: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            projection: projection.into(),
            table: table.into(),
            conditions: Conditions::new(),
            limit: None,
        }
    }

    /// `SELECT * FROM table`
    pub fn all(table: impl Into<String>) -> Self {
        Self::new("*", table)
    }

    /// `SELECT column FROM table`
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(column, table)
    }

    /// `SELECT 1 FROM table`, used for existence checks.
    pub fn one(table: impl Into<String>) -> Self {
        Self::new("1", table)
    }

    /// Add WHERE conditions to the query.
    pub fn where_(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Add a LIMIT to the query.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Build the SQL query string and parameters.
    pub fn build(&self) -> Statement {
        let mut sql = String::with_capacity(128);
        let mut params = Vec::with_capacity(self.conditions.len());

        sql.push_str("SELECT ");
        sql.push_str(&self.projection);
        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.build_sql(&mut params));
        }

        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&limit.to_string());
        }

        Statement::new(sql, params)
    }
}
