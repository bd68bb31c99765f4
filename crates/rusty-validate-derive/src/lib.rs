// rusty-validate procedural macros
// Generates field lookup by name for records and error sinks

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod record;
mod sink;

/// Derive `rusty_validate::Record`
///
/// Public named fields become readable by name; non-public fields are
/// reported as private so validation skips them.
///
/// # Attributes
///
/// - `#[record(rename_all = "PascalCase")]` on the struct: naming scheme for
///   every field (`PascalCase`, `camelCase`, `snake_case`, `lowercase`,
///   `UPPERCASE`, `SCREAMING_SNAKE_CASE`, `kebab-case`)
/// - `#[record(rename = "Name")]` on a field: explicit name
/// - `#[record(skip)]` on a field: not visible at all
///
/// Every readable field type must be `Clone` and convert into
/// `rusty_validate::Value`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match record::impl_record(&input) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derive `rusty_validate::ErrorSink`
///
/// Failure messages are written into the public field with the matching
/// name. Field types must implement `rusty_validate::MessageSlot`
/// (`String`, `Option<String>`, `Vec<String>`). Accepts the same `#[record]`
/// attributes as `#[derive(Record)]`.
#[proc_macro_derive(ErrorSink, attributes(record))]
pub fn derive_error_sink(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match sink::impl_error_sink(&input) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
