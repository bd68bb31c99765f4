// File: rusty-validate-derive/src/attrs.rs
// Purpose: #[record(...)] attribute parsing and field naming

use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr, Type, Visibility, WherePredicate};

/// Naming schemes accepted by `rename_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Pascal,
    Camel,
    Snake,
    Lower,
    Upper,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "PascalCase" => Some(RenameRule::Pascal),
            "camelCase" => Some(RenameRule::Camel),
            "snake_case" => Some(RenameRule::Snake),
            "lowercase" => Some(RenameRule::Lower),
            "UPPERCASE" => Some(RenameRule::Upper),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnake),
            "kebab-case" => Some(RenameRule::Kebab),
            _ => None,
        }
    }

    /// Apply to a snake_case field name
    pub fn apply(&self, field: &str) -> String {
        match self {
            RenameRule::Pascal => field
                .split('_')
                .filter(|part| !part.is_empty())
                .map(capitalize)
                .collect(),
            RenameRule::Camel => {
                let pascal = RenameRule::Pascal.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            RenameRule::Snake => field.to_string(),
            RenameRule::Lower => field.to_lowercase(),
            RenameRule::Upper => field.to_uppercase(),
            RenameRule::ScreamingSnake => field.to_uppercase(),
            RenameRule::Kebab => field.replace('_', "-"),
        }
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One named field after attribute processing
pub struct FieldInfo<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The name callers use to look the field up
    pub name: String,
    pub is_public: bool,
}

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

fn container_rename_rule(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rule = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: LitStr = meta.value()?.parse()?;
                match RenameRule::parse(&value.value()) {
                    Some(r) => rule = Some(r),
                    None => return Err(meta.error(format!("unknown rename_all rule `{}`", value.value()))),
                }
                Ok(())
            } else {
                Err(meta.error("expected `rename_all = \"...\"`"))
            }
        })?;
    }

    Ok(rule)
}

fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(parsed)
}

/// Collect the visible fields of a struct with named fields
pub fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<FieldInfo<'_>>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "only structs with named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(&input.ident, "only structs are supported")),
    };

    let rename_all = container_rename_rule(&input.attrs)?;
    let mut infos = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let raw = ident.unraw().to_string();
        let name = match (attrs.rename, rename_all) {
            (Some(explicit), _) => explicit,
            (None, Some(rule)) => rule.apply(&raw),
            (None, None) => raw,
        };

        infos.push(FieldInfo {
            ident,
            ty: &field.ty,
            name,
            is_public: matches!(field.vis, Visibility::Public(_)),
        });
    }

    Ok(infos)
}

/// Copy of `generics` with `bound(ty)` added for every public field type
///
/// Non-generic structs are returned unchanged.
pub fn bounded_generics(
    generics: &Generics,
    fields: &[FieldInfo<'_>],
    bound: impl Fn(&Type) -> WherePredicate,
) -> Generics {
    let mut generics = generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }

    let where_clause = generics.make_where_clause();
    for field in fields.iter().filter(|f| f.is_public) {
        where_clause.predicates.push(bound(field.ty));
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_rules() {
        assert_eq!(RenameRule::Pascal.apply("first_name"), "FirstName");
        assert_eq!(RenameRule::Camel.apply("first_name"), "firstName");
        assert_eq!(RenameRule::Snake.apply("first_name"), "first_name");
        assert_eq!(RenameRule::ScreamingSnake.apply("first_name"), "FIRST_NAME");
        assert_eq!(RenameRule::Kebab.apply("first_name"), "first-name");
        assert_eq!(RenameRule::Pascal.apply("url"), "Url");
    }

    #[test]
    fn test_collect_fields() {
        let input: DeriveInput = syn::parse_quote! {
            #[record(rename_all = "PascalCase")]
            struct Form {
                pub first_name: String,
                #[record(rename = "mail")]
                pub email: String,
                #[record(skip)]
                pub cache: Vec<u8>,
                token: String,
            }
        };
        let fields = collect_fields(&input).unwrap();
        let names: Vec<(&str, bool)> = fields.iter().map(|f| (f.name.as_str(), f.is_public)).collect();
        assert_eq!(
            names,
            vec![("FirstName", true), ("mail", true), ("Token", false)]
        );
    }

    #[test]
    fn test_bounds_only_for_generic_structs() {
        let plain: DeriveInput = syn::parse_quote! { struct Form { pub a: String } };
        let fields = collect_fields(&plain).unwrap();
        let generics = bounded_generics(&plain.generics, &fields, |ty| syn::parse_quote!(#ty: Clone));
        assert!(generics.where_clause.is_none());

        let generic: DeriveInput = syn::parse_quote! { struct Form<T> { pub a: T, b: T } };
        let fields = collect_fields(&generic).unwrap();
        let generics = bounded_generics(&generic.generics, &fields, |ty| syn::parse_quote!(#ty: Clone));
        assert_eq!(generics.where_clause.unwrap().predicates.len(), 1);
    }

    #[test]
    fn test_rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_quote! { struct Pair(String, String); };
        assert!(collect_fields(&input).is_err());
    }

    #[test]
    fn test_rejects_unknown_rename_rule() {
        let input: DeriveInput = syn::parse_quote! {
            #[record(rename_all = "Title Case")]
            struct Form { pub a: String }
        };
        assert!(collect_fields(&input).is_err());
    }
}
