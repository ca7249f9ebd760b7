//! The `#[identifier]` marker attribute.
//!
//! The attribute has no effect on compilation: it returns the struct
//! unchanged. `idgen` finds marked structs by scanning source, then
//! generates the identifier API for each one.
//!
//! ## Examples
//!
//! ```ignore
//! use idgen_macros::identifier;
//!
//! #[identifier]
//! pub struct OrderId(i64);
//!
//! include!(concat!(env!("OUT_DIR"), "/idgen/OrderId.g.rs"));
//! ```

use proc_macro::TokenStream;

mod identifier;

/// Marks a struct as a strongly typed identifier.
///
/// Only structs are accepted and the attribute takes no arguments. A struct
/// is picked up by the generator when it wraps exactly one private `i64`
/// and does not implement the generated traits itself.
#[proc_macro_attribute]
pub fn identifier(attr: TokenStream, item: TokenStream) -> TokenStream {
    identifier::identifier_impl(attr.into(), item.into()).into()
}
