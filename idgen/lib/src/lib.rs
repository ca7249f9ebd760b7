//! Strongly typed identifier generator library.
//!
//! This crate scans Rust sources for struct declarations marked with
//! `#[identifier]` (from `idgen-macros`) and generates, per struct, a unit of
//! `impl` blocks that turn a bare `i64` newtype into an identifier type:
//!
//! - `EMPTY`, `empty()` and the named factory `with(i64)`
//! - equality, a total order and hashing by the wrapped value
//! - `Display`/`Debug` printing the bare decimal value
//! - explicit `From` conversions to and from `i64`
//!
//! ## Modules
//!
//! - [`source`] - Source discovery and module path derivation
//! - [`scanner`] - Finds extensible struct declarations
//! - [`marker`] - Marker attribute matching
//! - [`qualifier`] - Keeps resolvable, marked candidates
//! - [`codegen`] - The identifier template
//! - [`output`] - Validation, formatting and atomic file writing
//! - [`pipeline`] - The `scan` / `generate` contract
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use idgen_lib::{GeneratorConfig, ModulePath, SourceFile, generate, scan_source};
//!
//! let source = SourceFile::new(
//!     "src/shop/orders.rs",
//!     ModulePath::parse("shop::orders"),
//!     "#[idgen_macros::identifier] pub struct OrderId(i64);",
//! );
//!
//! let candidates = scan_source(&source).unwrap();
//! let units = generate(&candidates, &GeneratorConfig::new()).unwrap();
//!
//! assert_eq!(units.len(), 1);
//! assert_eq!(units[0].key, "shop/orders/OrderId.g.rs");
//! ```
//!
//! ## Declaring an Identifier
//!
//! ```text
//! // src/shop/orders.rs
//! #[idgen_macros::identifier]
//! pub struct OrderId(i64);
//!
//! include!(concat!(env!("OUT_DIR"), "/idgen/shop/orders/OrderId.g.rs"));
//! ```
//!
//! The struct only declares its storage: one private `i64` field, no
//! derives or impls of the generated traits. The generated unit supplies
//! the rest.

pub mod codegen;
pub mod errors;
pub mod marker;
pub mod output;
pub mod pipeline;
pub mod qualifier;
pub mod scanner;
pub mod source;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::GeneratorError;
pub use marker::{Marker, MarkerPolicy};
pub use output::{GeneratedUnit, render_unit, write_atomic, write_units};
pub use pipeline::{GeneratorConfig, generate, generate_and_write, scan};
pub use qualifier::{QualifiedType, qualify};
pub use scanner::{AttributeRef, CandidateDeclaration, scan_source};
pub use source::{ModulePath, SourceFile, discover_sources};
