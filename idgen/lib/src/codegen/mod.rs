//! Code generation for strongly typed identifiers.
//!
//! The generator never rewrites a user's declaration. A qualifying struct
//! declares only its storage (`pub struct OrderId(i64);`) and the emitted
//! unit adds everything else as separate `impl` blocks, to be `include!`d
//! next to the declaration.
//!
//! ## Submodules
//!
//! - [`identifier`] - The identifier template
//!
//! ## Output Format
//!
//! Generators return `proc_macro2::TokenStream`, which is then validated
//! with `syn::parse2` and formatted with `prettyplease`. See
//! [`crate::output`] for that step.

pub mod identifier;

pub use identifier::generate_identifier;

/// Traits the identifier template implements (and so a user may not derive
/// or implement by hand).
///
/// `From` is tracked separately: only `From<i64>` collides with the
/// generated conversion.
pub const GENERATED_TRAITS: &[&str] = &[
    "Clone",
    "Copy",
    "Default",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "Hash",
    "Debug",
    "Display",
];

/// Inherent associated items the identifier template defines.
pub const GENERATED_MEMBERS: &[&str] = &["EMPTY", "empty", "with"];
