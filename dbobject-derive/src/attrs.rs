//! Attribute parsing shared by the derives.

use syn::{Attribute, LitStr, Meta, Result};

/// Parsed `#[column(...)]` on a struct field.
#[derive(Debug, Default, PartialEq)]
pub struct ColumnAttr {
    pub name: Option<String>,
    pub primary: bool,
    pub auto_increment: bool,
    pub json: bool,
}

/// Returns `None` when the field carries no `#[column]` attribute.
pub fn column_attr(attrs: &[Attribute]) -> Result<Option<ColumnAttr>> {
    let Some(attr) = attrs.iter().find(|a| a.path().is_ident("column")) else {
        return Ok(None);
    };

    let mut column = ColumnAttr::default();
    if let Meta::Path(_) = attr.meta {
        return Ok(Some(column));
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            column.name = Some(lit.value());
        } else if meta.path.is_ident("primary") {
            column.primary = true;
        } else if meta.path.is_ident("auto_increment") {
            column.auto_increment = true;
        } else if meta.path.is_ident("json") {
            column.json = true;
        } else {
            return Err(meta.error(
                "unknown column attribute, expected `name`, `primary`, `auto_increment` or `json`",
            ));
        }
        Ok(())
    })?;

    Ok(Some(column))
}

/// Parses `#[database_object(table = "...")]`.
pub fn table_name(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut table = None;
    for attr in attrs {
        if !attr.path().is_ident("database_object") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let lit: LitStr = meta.value()?.parse()?;
                table = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown database_object attribute, expected `table`"))
            }
        })?;
    }
    Ok(table)
}

/// Parses `#[column(rename = "...")]` on an enum variant.
pub fn variant_rename(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("column") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown column attribute, expected `rename`"))
            }
        })?;
    }
    Ok(rename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn field_attrs(input: syn::DeriveInput) -> Vec<Attribute> {
        match input.data {
            syn::Data::Struct(data) => data.fields.into_iter().next().unwrap().attrs,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_bare_column() {
        let field = parse_quote!(struct S { #[column] name: String });
        assert_eq!(
            column_attr(&field_attrs(field)).unwrap(),
            Some(ColumnAttr::default())
        );
    }

    #[test]
    fn test_column_flags() {
        let field = parse_quote!(struct S {
            #[column(name = "user_id", primary, auto_increment)]
            id: i64,
        });
        let attr = column_attr(&field_attrs(field)).unwrap().unwrap();
        assert_eq!(attr.name.as_deref(), Some("user_id"));
        assert!(attr.primary);
        assert!(attr.auto_increment);
        assert!(!attr.json);
    }

    #[test]
    fn test_unmapped_field() {
        let field = parse_quote!(struct S { #[serde(skip)] cache: Vec<u8> });
        assert_eq!(column_attr(&field_attrs(field)).unwrap(), None);
    }

    #[test]
    fn test_unknown_column_flag() {
        let field = parse_quote!(struct S { #[column(unique)] email: String });
        assert!(column_attr(&field_attrs(field)).is_err());
    }

    #[test]
    fn test_table_name() {
        let input: syn::DeriveInput = parse_quote! {
            #[database_object(table = "users")]
            struct User;
        };
        assert_eq!(table_name(&input.attrs).unwrap().as_deref(), Some("users"));
    }

    #[test]
    fn test_variant_rename() {
        let variant: syn::Variant = parse_quote!(#[column(rename = "ADMIN")] Admin);
        assert_eq!(
            variant_rename(&variant.attrs).unwrap().as_deref(),
            Some("ADMIN")
        );
    }
}
