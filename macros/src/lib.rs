use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};
mod value_macros;

/// Derives `assertive_core::AsValue`.
/// ```ignore
/// #[derive(AsValue)]
/// struct Celsius(f32); // compares like the f32 it wraps
///
/// #[derive(AsValue, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 } // compares through PartialEq
/// ```
#[proc_macro_derive(AsValue)]
pub fn derive_as_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    value_macros::derive_as_value(input).into()
}
