mod column_value;
mod driver;
mod object;

pub use column_value::ColumnValue;
pub use driver::DatabaseDriver;
pub use object::{ColumnDef, DatabaseObject};

pub(crate) use object::column_values;
