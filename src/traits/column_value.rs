use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::codec;
use crate::error::ValueError;
use crate::types::SqlValue;

/// Conversion between a Rust field type and its SQL column value.
///
/// Values are written as [`SqlValue`] parameters and read back from the
/// driver's text form, where `None` is SQL NULL.
pub trait ColumnValue: Sized + 'static {
    fn to_sql(&self) -> Result<SqlValue, ValueError>;

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError>;

    /// Key used to look up the SQL column type in a
    /// [`SqlTypeMapping`](crate::types::SqlTypeMapping).
    fn type_key() -> TypeId {
        TypeId::of::<Self>()
    }
}

fn required<'a>(raw: Option<&'a str>) -> Result<&'a str, ValueError> {
    raw.ok_or(ValueError::UnexpectedNull)
}

macro_rules! int_column {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ColumnValue for $ty {
                fn to_sql(&self) -> Result<SqlValue, ValueError> {
                    Ok(SqlValue::$variant((*self).into()))
                }

                fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
                    let raw = required(raw)?;
                    raw.trim()
                        .parse()
                        .map_err(|e| ValueError::parse(stringify!($ty), raw, e))
                }
            }
        )*
    };
}

int_column! {
    i8 => Int32,
    i16 => Int32,
    i32 => Int32,
    u8 => Int32,
    u16 => Int32,
    i64 => Int64,
    u32 => Int64,
}

impl ColumnValue for u64 {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        i64::try_from(*self)
            .map(SqlValue::Int64)
            .map_err(|e| ValueError::Encode(e.to_string()))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        let raw = required(raw)?;
        raw.trim()
            .parse()
            .map_err(|e| ValueError::parse("u64", raw, e))
    }
}

impl ColumnValue for f64 {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        Ok(SqlValue::Double(*self))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        let raw = required(raw)?;
        raw.trim()
            .parse()
            .map_err(|e| ValueError::parse("f64", raw, e))
    }
}

impl ColumnValue for f32 {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        Ok(SqlValue::Double(f64::from(*self)))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        let raw = required(raw)?;
        raw.trim()
            .parse()
            .map_err(|e| ValueError::parse("f32", raw, e))
    }
}

/// Booleans are stored as 1 / 0.
impl ColumnValue for bool {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        Ok(SqlValue::Int32(i32::from(*self)))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        let raw = required(raw)?;
        match raw.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            s if s.eq_ignore_ascii_case("true") => Ok(true),
            s if s.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(ValueError::parse("bool", raw, "expected 1, 0, true or false")),
        }
    }
}

impl ColumnValue for String {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        Ok(SqlValue::Text(self.clone()))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        required(raw).map(str::to_string)
    }
}

impl ColumnValue for Uuid {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        Ok(SqlValue::Text(self.to_string()))
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        let raw = required(raw)?;
        Uuid::parse_str(raw.trim()).map_err(|e| ValueError::parse("Uuid", raw, e))
    }
}

impl<T: ColumnValue> ColumnValue for Option<T> {
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        match self {
            Some(value) => value.to_sql(),
            None => Ok(SqlValue::Null),
        }
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        raw.map(|value| T::from_sql(Some(value))).transpose()
    }

    fn type_key() -> TypeId {
        T::type_key()
    }
}

impl<K, V, S> ColumnValue for HashMap<K, V, S>
where
    K: Serialize + DeserializeOwned + Eq + Hash + 'static,
    V: Serialize + DeserializeOwned + 'static,
    S: BuildHasher + Default + 'static,
{
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        codec::blob_to_sql(self)
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        codec::blob_from_sql(raw)
    }
}

impl<K, V> ColumnValue for BTreeMap<K, V>
where
    K: Serialize + DeserializeOwned + Ord + 'static,
    V: Serialize + DeserializeOwned + 'static,
{
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        codec::blob_to_sql(self)
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        codec::blob_from_sql(raw)
    }
}

impl<T> ColumnValue for Vec<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        codec::json_to_sql(self)
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        codec::json_from_sql(raw)
    }
}
