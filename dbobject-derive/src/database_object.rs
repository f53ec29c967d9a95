//! DatabaseObject derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::{column_attr, table_name};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let table = table_name(&input.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "DatabaseObject requires #[database_object(table = \"...\")]",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "DatabaseObject can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "DatabaseObject can only be derived for structs",
            ))
        }
    };

    let mut column_defs = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    let mut initializers = Vec::with_capacity(fields.len());

    for field in fields {
        let ident = field.ident.as_ref().unwrap();
        let ty = &field.ty;

        let Some(attr) = column_attr(&field.attrs)? else {
            initializers.push(quote! {
                #ident: ::std::default::Default::default()
            });
            continue;
        };

        let column = attr.name.unwrap_or_else(|| ident.to_string());
        let primary = attr.primary;
        let auto_increment = attr.auto_increment;

        let (type_key, to_sql, decode) = if attr.json {
            (
                quote! { ::std::any::TypeId::of::<#ty>() },
                quote! { ::dbobject::codec::json_to_sql(&self.#ident) },
                quote! { row.decode_with(#column, ::dbobject::codec::json_from_sql::<#ty>)? },
            )
        } else {
            (
                quote! { <#ty as ::dbobject::ColumnValue>::type_key() },
                quote! { ::dbobject::ColumnValue::to_sql(&self.#ident) },
                quote! { row.decode::<#ty>(#column)? },
            )
        };

        column_defs.push(quote! {
            ::dbobject::ColumnDef::new(#column, #type_key)
                .primary(#primary)
                .auto_increment(#auto_increment)
        });
        values.push(quote! {
            #to_sql.map_err(|e| ::dbobject::DbError::column(#column, e))?
        });
        initializers.push(quote! {
            #ident: #decode
        });
    }

    Ok(quote! {
        impl #impl_generics ::dbobject::DatabaseObject for #name #ty_generics #where_clause {
            const TABLE: &'static str = #table;

            fn columns() -> ::std::vec::Vec<::dbobject::ColumnDef> {
                ::std::vec![#(#column_defs),*]
            }

            fn to_values(&self) -> ::dbobject::Result<::std::vec::Vec<::dbobject::SqlValue>> {
                ::std::result::Result::Ok(::std::vec![#(#values),*])
            }

            fn from_row(row: &::dbobject::Row) -> ::dbobject::Result<Self> {
                ::std::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }
        }
    })
}
