use crate::builders::{placeholders, Select, Statement};
use crate::clauses::Conditions;
use crate::error::{DbError, Result};
use crate::traits::{column_values, DatabaseObject};

/// `INSERT INTO table (...) VALUES (...)` over every column that is not
/// AUTO_INCREMENT.
pub fn insert<T: DatabaseObject>(table: &str, object: &T) -> Result<Statement> {
    let (names, params): (Vec<_>, Vec<_>) = column_values(object)?
        .into_iter()
        .filter(|(column, _)| !column.auto_increment)
        .map(|(column, value)| (column.name, value))
        .unzip();

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        names.join(", "),
        placeholders(names.len())
    );
    Ok(Statement::new(sql, params))
}

/// `UPDATE table SET ... WHERE <primary key>`.
///
/// Primary and AUTO_INCREMENT columns are never assigned. Returns `None` when
/// the object has no primary key or nothing to assign.
pub fn update<T: DatabaseObject>(table: &str, object: &T) -> Result<Option<Statement>> {
    let mut assignments = Vec::new();
    let mut params = Vec::new();
    let mut key = Conditions::new();

    for (column, value) in column_values(object)? {
        if column.primary {
            key.push(column.name, value);
        } else if !column.auto_increment {
            assignments.push(format!("{} = ?", column.name));
            params.push(value);
        }
    }

    if key.is_empty() || assignments.is_empty() {
        return Ok(None);
    }

    let sql = format!(
        "UPDATE {} SET {} WHERE {}",
        table,
        assignments.join(", "),
        key.build_sql(&mut params)
    );
    Ok(Some(Statement::new(sql, params)))
}

/// `DELETE FROM table WHERE <primary key>`.
pub fn delete<T: DatabaseObject>(table: &str, object: &T) -> Result<Statement> {
    let key = primary_key(table, object, "delete")?;
    let mut params = Vec::with_capacity(key.len());
    let sql = format!("DELETE FROM {} WHERE {}", table, key.build_sql(&mut params));
    Ok(Statement::new(sql, params))
}

/// `SELECT 1 FROM table WHERE <primary key> LIMIT 1`.
pub fn exists<T: DatabaseObject>(table: &str, object: &T) -> Result<Statement> {
    let key = primary_key(table, object, "check existence")?;
    Ok(Select::one(table).where_(key).limit(1).build())
}

fn primary_key<T: DatabaseObject>(
    table: &str,
    object: &T,
    operation: &'static str,
) -> Result<Conditions> {
    let key: Conditions = column_values(object)?
        .into_iter()
        .filter(|(column, _)| column.primary)
        .map(|(column, value)| (column.name, value))
        .collect();

    if key.is_empty() {
        return Err(DbError::MissingPrimaryKey {
            table: table.to_string(),
            operation,
        });
    }
    Ok(key)
}
