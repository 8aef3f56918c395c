#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every NameCraft crate: the error-enum attribute used by
//! each feature slice and the runtime bootstrap attribute used by the binaries.
//!
//! Doc examples are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro that turns an `async fn main` into a blocking `fn main` running on a
/// runtime built by `ncraft_runtime`.
///
/// # Arguments
///
/// * `current_thread` - Single-threaded cooperative scheduler (the default).
/// * `multi_thread` - Work-stealing scheduler sized from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[ncraft_runtime::main(current_thread)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for domain error enums.
///
/// # Features
///
/// * Injects `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * Generates a companion `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every wrapped source error.
/// * Implements `From<Source>` for variants holding a `source` field.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ncraft_derive::ncraft_error]
/// pub enum StoreError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Vec<u8>, StoreError> {
///     std::fs::read("favorites.json").context("Reading favorites")
/// }
/// ```
#[proc_macro_attribute]
pub fn ncraft_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
