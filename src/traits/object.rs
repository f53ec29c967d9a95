use std::any::TypeId;

use crate::error::Result;
use crate::types::{Row, SqlValue};

/// Metadata of one mapped field.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name as it appears in the database.
    pub name: &'static str,
    pub primary: bool,
    pub auto_increment: bool,
    /// Identifies the field's Rust type for SQL type lookup.
    pub type_key: TypeId,
}

impl ColumnDef {
    pub fn new(name: &'static str, type_key: TypeId) -> Self {
        Self {
            name,
            primary: false,
            auto_increment: false,
            type_key,
        }
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }
}

/// A struct mapped to the rows of one table.
///
/// Usually implemented with `#[derive(DatabaseObject)]`:
///
/// ```ignore
/// #[derive(Default, DatabaseObject)]
/// #[database_object(table = "players")]
/// struct Player {
///     #[column(primary, auto_increment)]
///     id: i32,
///     #[column(name = "player_name")]
///     name: String,
///     // not mapped, left at its default when loaded
///     session: Option<String>,
/// }
/// ```
pub trait DatabaseObject: Sized {
    /// Table name, without the database prefix.
    const TABLE: &'static str;

    /// Mapped columns in field declaration order.
    fn columns() -> Vec<ColumnDef>;

    /// Values of the mapped fields, aligned with [`columns`](Self::columns).
    fn to_values(&self) -> Result<Vec<SqlValue>>;

    /// Builds an instance from a result row. Unmapped fields take their default.
    fn from_row(row: &Row) -> Result<Self>;
}

/// Pairs each column with the value an object holds for it.
pub(crate) fn column_values<T: DatabaseObject>(object: &T) -> Result<Vec<(ColumnDef, SqlValue)>> {
    let columns = T::columns();
    let values = object.to_values()?;
    debug_assert_eq!(columns.len(), values.len());
    Ok(columns.into_iter().zip(values).collect())
}
