use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::ValueError;
use crate::traits::ColumnValue;
use crate::types::SqlValue;

/// Stores any serde type in a text column as JSON.
///
/// Equivalent to marking a field `#[column(json)]`, for when the wrapper type
/// is more convenient than the attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T> ColumnValue for Json<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn to_sql(&self) -> Result<SqlValue, ValueError> {
        codec::json_to_sql(&self.0)
    }

    fn from_sql(raw: Option<&str>) -> Result<Self, ValueError> {
        codec::json_from_sql(raw).map(Json)
    }
}
