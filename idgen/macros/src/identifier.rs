//! Implementation of the `#[identifier]` attribute.

use proc_macro2::{Span, TokenStream};
use syn::{Error, Item, Result, parse2};

/// Validates the marked item and hands it back untouched.
pub fn identifier_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match identifier_inner(attr, item.clone()) {
        Ok(()) => item,
        Err(err) => {
            let mut tokens = err.to_compile_error();
            tokens.extend(item);
            tokens
        }
    }
}

fn identifier_inner(attr: TokenStream, item: TokenStream) -> Result<()> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(attr, "`#[identifier]` takes no arguments"));
    }

    match parse2::<Item>(item)? {
        Item::Struct(_) => Ok(()),
        Item::Enum(item) => Err(Error::new_spanned(
            item.enum_token,
            "`#[identifier]` can only be applied to structs",
        )),
        Item::Union(item) => Err(Error::new_spanned(
            item.union_token,
            "`#[identifier]` can only be applied to structs",
        )),
        _ => Err(Error::new(
            Span::call_site(),
            "`#[identifier]` can only be applied to structs",
        )),
    }
}
