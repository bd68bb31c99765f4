// File: rusty-validate-derive/src/sink.rs
// Purpose: #[derive(ErrorSink)] expansion

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attrs::{bounded_generics, collect_fields};

/// Generate the `ErrorSink` implementation for a struct
///
/// Only public fields receive messages, matching what `Record` exposes.
pub fn impl_error_sink(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = collect_fields(input)?;
    let generics = bounded_generics(&input.generics, &fields, |ty| {
        syn::parse_quote!(#ty: ::rusty_validate::MessageSlot)
    });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let write_arms = fields.iter().filter(|f| f.is_public).map(|f| {
        let ident = f.ident;
        let key = &f.name;
        quote! {
            #key => {
                ::rusty_validate::MessageSlot::fill(&mut self.#ident, message);
                ::core::result::Result::Ok(())
            }
        }
    });

    let keys: Vec<&String> = fields.iter().filter(|f| f.is_public).map(|f| &f.name).collect();
    let accepts = if keys.is_empty() {
        quote! {
            let _ = field;
            false
        }
    } else {
        quote! {
            matches!(field, #(#keys)|*)
        }
    };

    Ok(quote! {
        impl #impl_generics ::rusty_validate::ErrorSink for #name #ty_generics #where_clause {
            fn put(
                &mut self,
                field: &str,
                message: ::std::string::String,
            ) -> ::rusty_validate::Result<()> {
                match field {
                    #(#write_arms)*
                    _ => {
                        let _ = message;
                        ::core::result::Result::Err(::rusty_validate::Error::UnknownSinkField {
                            field: ::std::string::ToString::to_string(field),
                        })
                    }
                }
            }

            fn accepts(&self, field: &str) -> bool {
                #accepts
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_arms_use_renamed_fields() {
        let input: DeriveInput = syn::parse_quote! {
            #[record(rename_all = "PascalCase")]
            struct Errors {
                pub first_name: Option<String>,
                internal: String,
            }
        };
        let output = impl_error_sink(&input).unwrap().to_string();
        assert!(output.contains("\"FirstName\" =>"));
        assert!(!output.contains("\"Internal\" =>"));
        assert!(output.contains("UnknownSinkField"));
        assert!(output.contains("fn accepts"));
    }
}
