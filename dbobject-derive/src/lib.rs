//! Derive macros for dbobject
//!
//! Provides `#[derive(DatabaseObject)]` and `#[derive(ColumnEnum)]`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod column_enum;
mod database_object;

/// Derive `DatabaseObject` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use dbobject::DatabaseObject;
///
/// #[derive(Default, DatabaseObject)]
/// #[database_object(table = "users")]
/// struct User {
///     #[column(primary, auto_increment)]
///     id: i64,
///     #[column(name = "user_name")]
///     name: String,
///     #[column(json)]
///     profile: Profile,
///     // no #[column]: not mapped, `Default::default()` when loaded
///     cached_avatar: Option<Vec<u8>>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[database_object(table = "name")]` - Table name (required)
/// - `#[column]` - Map the field to a column of the same name
/// - `#[column(name = "col")]` - Map the field to a differently named column
/// - `#[column(primary)]` - Part of the primary key
/// - `#[column(auto_increment)]` - Generated by the database, never written
/// - `#[column(json)]` - Store any serde type as JSON text
#[proc_macro_derive(DatabaseObject, attributes(database_object, column))]
pub fn derive_database_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    database_object::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `ColumnValue` for a fieldless enum, stored as its variant name.
///
/// # Attributes
///
/// - `#[column(rename = "text")]` on a variant - Store a different string
#[proc_macro_derive(ColumnEnum, attributes(column))]
pub fn derive_column_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    column_enum::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
