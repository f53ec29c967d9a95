use crate::error::{DbError, Result};
use crate::traits::DatabaseObject;
use crate::types::SqlTypeMapping;

/// Builds `CREATE TABLE IF NOT EXISTS` for a mapped object.
///
/// AUTO_INCREMENT is only accepted on columns that map to `INT` or `BIGINT`.
pub fn create_table<T: DatabaseObject>(table: &str, sql_types: &SqlTypeMapping) -> Result<String> {
    let columns = T::columns();
    let mut definitions = Vec::with_capacity(columns.len());
    let mut primary_keys = Vec::new();

    for column in &columns {
        let sql_type = sql_types.sql_type(column.type_key);
        let mut definition = format!("{} {}", column.name, sql_type);

        if column.primary {
            primary_keys.push(column.name);
        }
        if column.auto_increment {
            if sql_type != "INT" && sql_type != "BIGINT" {
                return Err(DbError::InvalidAutoIncrement {
                    column: column.name.to_string(),
                    sql_type: sql_type.to_string(),
                });
            }
            definition.push_str(" AUTO_INCREMENT");
        }
        definitions.push(definition);
    }

    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (", table);
    sql.push_str(&definitions.join(", "));
    if !primary_keys.is_empty() {
        sql.push_str(", PRIMARY KEY (");
        sql.push_str(&primary_keys.join(", "));
        sql.push(')');
    }
    sql.push_str(");");

    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseObject;
    use std::collections::HashMap;

    #[derive(Default, DatabaseObject)]
    #[database_object(table = "accounts")]
    struct Account {
        #[column(primary, auto_increment)]
        id: i64,
        #[column(name = "display_name")]
        name: String,
        #[column]
        balance: f64,
        #[column]
        verified: bool,
        #[column]
        settings: HashMap<String, String>,
        #[allow(dead_code)]
        cache: Vec<u8>,
    }

    #[derive(Default, DatabaseObject)]
    #[database_object(table = "memberships")]
    struct Membership {
        #[column(primary)]
        user_id: i32,
        #[column(primary)]
        group_id: i32,
        #[column]
        role: Option<String>,
    }

    #[derive(Default, DatabaseObject)]
    #[database_object(table = "log")]
    struct LogLine {
        #[column]
        line: String,
    }

    #[derive(Default, DatabaseObject)]
    #[database_object(table = "bad")]
    struct BadCounter {
        #[column(auto_increment)]
        code: String,
    }

    #[test]
    fn test_create_table() {
        let sql = create_table::<Account>("app_accounts", &SqlTypeMapping::default()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS app_accounts (id BIGINT AUTO_INCREMENT, \
             display_name VARCHAR(255), balance DOUBLE, verified BOOLEAN, \
             settings VARCHAR(255), PRIMARY KEY (id));"
        );
    }

    #[test]
    fn test_create_table_composite_key() {
        let sql = create_table::<Membership>("memberships", &SqlTypeMapping::default()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS memberships (user_id INT, group_id INT, \
             role VARCHAR(255), PRIMARY KEY (user_id, group_id));"
        );
    }

    #[test]
    fn test_create_table_without_primary_key() {
        let sql = create_table::<LogLine>("log", &SqlTypeMapping::default()).unwrap();
        assert_eq!(sql, "CREATE TABLE IF NOT EXISTS log (line VARCHAR(255));");
    }

    #[test]
    fn test_create_table_uses_registered_types() {
        let mut types = SqlTypeMapping::default();
        types.register::<String>("TEXT");
        let sql = create_table::<LogLine>("log", &types).unwrap();
        assert_eq!(sql, "CREATE TABLE IF NOT EXISTS log (line TEXT);");
    }

    #[test]
    fn test_auto_increment_requires_integer_column() {
        let err = create_table::<BadCounter>("bad", &SqlTypeMapping::default()).unwrap_err();
        match err {
            DbError::InvalidAutoIncrement { column, sql_type } => {
                assert_eq!(column, "code");
                assert_eq!(sql_type, "VARCHAR(255)");
            }
            other => panic!("Expected InvalidAutoIncrement, got {other:?}"),
        }
    }
}
