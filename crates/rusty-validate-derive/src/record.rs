// File: rusty-validate-derive/src/record.rs
// Purpose: #[derive(Record)] expansion

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attrs::{bounded_generics, collect_fields};

/// Generate the `Record` implementation for a struct
pub fn impl_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = collect_fields(input)?;
    let generics = bounded_generics(&input.generics, &fields, |ty| {
        syn::parse_quote!(#ty: ::core::clone::Clone + ::core::convert::Into<::rusty_validate::Value>)
    });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let read_arms = fields.iter().filter(|f| f.is_public).map(|f| {
        let ident = f.ident;
        let key = &f.name;
        quote! {
            #key => ::core::option::Option::Some(
                ::core::convert::Into::<::rusty_validate::Value>::into(
                    ::core::clone::Clone::clone(&self.#ident)
                )
            ),
        }
    });

    let private: Vec<&String> = fields.iter().filter(|f| !f.is_public).map(|f| &f.name).collect();
    let is_private = if private.is_empty() {
        quote! {
            let _ = name;
            false
        }
    } else {
        quote! {
            matches!(name, #(#private)|*)
        }
    };

    Ok(quote! {
        impl #impl_generics ::rusty_validate::Record for #name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<::rusty_validate::Value> {
                match name {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn is_private(&self, name: &str) -> bool {
                #is_private
            }
        }
    })
}
