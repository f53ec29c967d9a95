use std::any::TypeId;
use std::collections::HashMap;

use crate::traits::ColumnValue;

/// SQL type used for columns whose Rust type has no entry.
pub const DEFAULT_SQL_TYPE: &str = "VARCHAR(255)";

/// Maps Rust field types to the SQL column types used by `CREATE TABLE`.
#[derive(Debug, Clone)]
pub struct SqlTypeMapping {
    types: HashMap<TypeId, String>,
}

impl SqlTypeMapping {
    /// A mapping with no entries, every column resolves to `VARCHAR(255)`.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers (or replaces) the SQL type for `T`.
    pub fn register<T: ColumnValue>(&mut self, sql_type: impl Into<String>) -> &mut Self {
        self.types.insert(T::type_key(), sql_type.into());
        self
    }

    /// Removes the entry for `T`, returning its previous SQL type.
    pub fn remove<T: ColumnValue>(&mut self) -> Option<String> {
        self.types.remove(&T::type_key())
    }

    /// Looks up the SQL type for a type key, falling back to `VARCHAR(255)`.
    pub fn sql_type(&self, type_key: TypeId) -> &str {
        self.types
            .get(&type_key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SQL_TYPE)
    }

    pub fn contains(&self, type_key: TypeId) -> bool {
        self.types.contains_key(&type_key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for SqlTypeMapping {
    fn default() -> Self {
        let mut mapping = Self::empty();
        mapping
            .register::<i8>("INT")
            .register::<i16>("INT")
            .register::<i32>("INT")
            .register::<u8>("INT")
            .register::<u16>("INT")
            .register::<i64>("BIGINT")
            .register::<u32>("BIGINT")
            .register::<u64>("BIGINT")
            .register::<f32>("DOUBLE")
            .register::<f64>("DOUBLE")
            .register::<bool>("BOOLEAN");
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let mapping = SqlTypeMapping::default();
        assert_eq!(mapping.sql_type(i32::type_key()), "INT");
        assert_eq!(mapping.sql_type(i64::type_key()), "BIGINT");
        assert_eq!(mapping.sql_type(f64::type_key()), "DOUBLE");
        assert_eq!(mapping.sql_type(bool::type_key()), "BOOLEAN");
        assert_eq!(mapping.sql_type(String::type_key()), "VARCHAR(255)");
        assert_eq!(
            mapping.sql_type(HashMap::<String, i32>::type_key()),
            "VARCHAR(255)"
        );
    }

    #[test]
    fn test_option_resolves_to_inner_type() {
        let mapping = SqlTypeMapping::default();
        assert_eq!(mapping.sql_type(Option::<i64>::type_key()), "BIGINT");
    }

    #[test]
    fn test_register_overrides() {
        let mut mapping = SqlTypeMapping::default();
        mapping.register::<String>("TEXT").register::<i32>("SMALLINT");

        assert_eq!(mapping.sql_type(String::type_key()), "TEXT");
        assert_eq!(mapping.sql_type(i32::type_key()), "SMALLINT");
        assert_eq!(mapping.remove::<String>().as_deref(), Some("TEXT"));
        assert_eq!(mapping.sql_type(String::type_key()), "VARCHAR(255)");
    }
}
