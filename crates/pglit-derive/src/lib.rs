//! Derive macros for pglit
//!
//! Provides `#[derive(Valuer)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod valuer;

/// Derive `pglit::Valuer` and `From<T> for pglit::Value`.
///
/// # Enums
///
/// Unit-only enums render as quoted text. Variant names are converted to
/// snake_case unless overridden.
///
/// ```ignore
/// use pglit::Valuer;
///
/// #[derive(Debug, Valuer)]
/// enum Status {
///     Active,           // 'active'
///     #[pglit(rename = "on-hold")]
///     OnHold,           // 'on-hold'
/// }
/// ```
///
/// # Newtypes
///
/// Single-field tuple structs render as their inner value, which must be
/// `Clone + Into<pglit::Value>`.
///
/// ```ignore
/// #[derive(Debug, Clone, Valuer)]
/// struct UserId(i64);
/// ```
///
/// # Attributes
///
/// - `#[pglit(rename = "name")]` - Override the text of an enum variant
#[proc_macro_derive(Valuer, attributes(pglit))]
pub fn derive_valuer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    valuer::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
