//! The strongly typed identifier template.
//!
//! Every path in the template is fully qualified through `::core` so the
//! unit compiles wherever it is included, without adding `use` items to the
//! user's module.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::qualifier::QualifiedType;

/// Generates the identifier impls for a qualified type.
///
/// Creates:
/// - `EMPTY`, `empty()` and `with(i64)` on the type itself
/// - `Clone`, `Copy`, `Default`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - `Display` and `Debug`, both printing the bare decimal value
/// - `From<i64> for T` and `From<T> for i64`
///
/// ## Examples
///
/// For `pub struct OrderId(i64);`:
/// ```ignore
/// // Generated code:
/// impl OrderId {
///     pub const EMPTY: Self = Self(0);
///
///     pub const fn empty() -> Self {
///         Self::EMPTY
///     }
///
///     pub const fn with(value: i64) -> Self {
///         Self(value)
///     }
/// }
///
/// impl ::core::cmp::Ord for OrderId {
///     fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
///         ::core::cmp::Ord::cmp(&self.0, &other.0)
///     }
/// }
///
/// impl ::core::fmt::Display for OrderId {
///     fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
///         ::core::fmt::Display::fmt(&self.0, f)
///     }
/// }
///
/// // ... and the remaining trait impls
/// ```
pub fn generate_identifier(ty: &QualifiedType) -> TokenStream {
    let name = format_ident!("{}", ty.type_name());

    quote! {
        impl #name {
            /// The empty identifier, equal to the default value.
            pub const EMPTY: Self = Self(0);

            /// Returns the empty identifier.
            #[must_use]
            pub const fn empty() -> Self {
                Self::EMPTY
            }

            /// Wraps a raw value as an identifier.
            #[must_use]
            pub const fn with(value: i64) -> Self {
                Self(value)
            }
        }

        impl ::core::clone::Clone for #name {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl ::core::marker::Copy for #name {}

        impl ::core::default::Default for #name {
            #[inline]
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl ::core::cmp::PartialEq for #name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::core::cmp::Eq for #name {}

        impl ::core::cmp::PartialOrd for #name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for #name {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.0, &other.0)
            }
        }

        impl ::core::hash::Hash for #name {
            #[inline]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state);
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<i64> for #name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<#name> for i64 {
            #[inline]
            fn from(value: #name) -> Self {
                value.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{GENERATED_MEMBERS, GENERATED_TRAITS};
    use crate::output::validate_code;
    use crate::test_utils::qualified;

    fn render(namespace: &str, name: &str) -> String {
        let tokens = generate_identifier(&qualified(namespace, name));
        let file = validate_code(&tokens).expect("generated code should parse");
        prettyplease::unparse(&file)
    }

    #[test]
    fn generate_identifier_validates_syntax() {
        let tokens = generate_identifier(&qualified("shop::orders", "OrderId"));
        assert!(validate_code(&tokens).is_ok());
    }

    #[test]
    fn generate_identifier_inherent_members() {
        let code = render("shop::orders", "OrderId");

        assert!(code.contains("impl OrderId {"));
        assert!(code.contains("pub const EMPTY: Self = Self(0);"));
        assert!(code.contains("pub const fn empty() -> Self"));
        assert!(code.contains("pub const fn with(value: i64) -> Self"));
    }

    #[test]
    fn generate_identifier_implements_every_generated_trait() {
        let code = render("", "OrderId");

        for name in GENERATED_TRAITS {
            assert!(
                code.contains(&format!("::{} for OrderId", name)),
                "expected an impl of {} in generated code",
                name
            );
        }
        for member in GENERATED_MEMBERS {
            assert!(code.contains(member), "expected member {} in generated code", member);
        }
    }

    #[test]
    fn generate_identifier_conversions_are_explicit() {
        let code = render("", "OrderId");

        assert!(code.contains("impl ::core::convert::From<i64> for OrderId"));
        assert!(code.contains("impl ::core::convert::From<OrderId> for i64"));
        // no implicit access paths to the raw value
        assert!(!code.contains("Deref"));
        assert!(!code.contains("pub i64"));
    }

    #[test]
    fn generate_identifier_display_is_bare_decimal() {
        let code = render("", "OrderId");
        assert!(code.contains("::core::fmt::Display::fmt(&self.0, f)"));
        assert!(!code.contains("write!"));
    }

    #[test]
    fn generate_identifier_uses_the_type_name_only() {
        // the namespace never leaks into the impls; they are included in place
        let code = render("shop::orders", "OrderId");
        assert!(!code.contains("shop"));
    }

    #[test]
    fn generate_identifier_with_raw_identifier() {
        let tokens = generate_identifier(&qualified("", "r#type"));
        let code = prettyplease::unparse(&validate_code(&tokens).unwrap());
        assert!(code.contains("impl r#type {"));
    }
}
