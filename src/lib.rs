//! dbobject - map plain structs to MySQL tables
//!
//! # Example
//! ```ignore
//! use dbobject::{ColumnEnum, Conditions, Database, DatabaseConfig, DatabaseObject};
//!
//! #[derive(Debug, ColumnEnum)]
//! enum Role {
//!     Member,
//!     Admin,
//! }
//!
//! #[derive(Debug, DatabaseObject)]
//! #[database_object(table = "users")]
//! struct User {
//!     #[column(primary, auto_increment)]
//!     id: i64,
//!     #[column]
//!     name: String,
//!     #[column]
//!     role: Role,
//! }
//!
//! let config = DatabaseConfig::new("localhost", 3306, "app", "app", "secret").with_prefix("app_");
//! let db = Database::connect(&config).await?;
//!
//! db.create_table::<User>().await?;
//! db.insert(&User { id: 0, name: "John".into(), role: Role::Admin }).await?;
//!
//! let admins: Vec<User> = db
//!     .select_all_with_condition(&Conditions::new().eq("role", "Admin"))
//!     .await?;
//! ```

// Lets the derive macros' `::dbobject::` paths resolve inside this crate.
extern crate self as dbobject;

pub mod builders;
pub mod clauses;
pub mod codec;
pub mod drivers;
pub mod error;
pub mod traits;
pub mod types;

mod config;
mod database;

// Re-export main types for convenient access
pub use clauses::Conditions;
pub use config::DatabaseConfig;
pub use database::Database;
pub use dbobject_derive::{ColumnEnum, DatabaseObject};
pub use error::{DbError, Result, ValueError};
pub use traits::{ColumnDef, ColumnValue, DatabaseDriver, DatabaseObject};
pub use types::{ExecuteResult, Json, QueryResult, RawQueryResult, Row, SqlTypeMapping, SqlValue};
