//! ColumnEnum derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::variant_rename;

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(e) => &e.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "ColumnEnum can only be derived for enums",
            ));
        }
    };

    let mut to_sql_arms = Vec::with_capacity(variants.len());
    let mut from_sql_arms = Vec::with_capacity(variants.len());

    for variant in variants {
        if !matches!(&variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ColumnEnum variants must be unit variants (no fields)",
            ));
        }

        let variant_ident = &variant.ident;
        let text = variant_rename(&variant.attrs)?.unwrap_or_else(|| variant_ident.to_string());

        to_sql_arms.push(quote! {
            #name::#variant_ident => #text,
        });
        from_sql_arms.push(quote! {
            #text => ::std::result::Result::Ok(#name::#variant_ident),
        });
    }

    let type_name = name.to_string();

    Ok(quote! {
        impl ::dbobject::ColumnValue for #name {
            fn to_sql(&self) -> ::std::result::Result<::dbobject::SqlValue, ::dbobject::ValueError> {
                let text: &str = match self {
                    #(#to_sql_arms)*
                };
                ::std::result::Result::Ok(::dbobject::SqlValue::Text(text.to_string()))
            }

            fn from_sql(
                raw: ::std::option::Option<&str>,
            ) -> ::std::result::Result<Self, ::dbobject::ValueError> {
                let raw = raw.ok_or(::dbobject::ValueError::UnexpectedNull)?;
                match raw {
                    #(#from_sql_arms)*
                    other => ::std::result::Result::Err(::dbobject::ValueError::parse(
                        #type_name,
                        other,
                        "unknown variant",
                    )),
                }
            }
        }
    })
}
