//! Qualification of scanned candidates.
//!
//! A candidate qualifies when it resolves to a nameable, non-generic type
//! and carries the marker attribute. Candidates that fail either check are
//! dropped without an error; the worst outcome of odd input is fewer
//! generated units.

use serde::Serialize;
use tracing::debug;

use crate::marker::Marker;
use crate::scanner::CandidateDeclaration;
use crate::source::ModulePath;

/// A candidate confirmed to carry the marker, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedType {
    namespace: ModulePath,
    type_name: String,
}

impl QualifiedType {
    pub(crate) fn new(namespace: ModulePath, type_name: impl Into<String>) -> Self {
        Self {
            namespace,
            type_name: type_name.into(),
        }
    }

    pub fn namespace(&self) -> &ModulePath {
        &self.namespace
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `namespace::TypeName`, or just `TypeName` at the crate root.
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.type_name)
    }

    /// Returns the name of the generated unit for this type.
    ///
    /// The key includes the namespace, so two types with the same name in
    /// different modules never share a unit.
    ///
    /// ## Examples
    ///
    /// ```text
    /// shop::orders::OrderId  ->  shop/orders/OrderId.g.rs
    /// OrderId                ->  OrderId.g.rs
    /// ```
    pub fn unit_key(&self) -> String {
        let file = format!("{}.g.rs", unraw(&self.type_name));
        if self.namespace.is_root() {
            return file;
        }

        let dirs: Vec<&str> = self.namespace.segments().iter().map(|s| unraw(s)).collect();
        format!("{}/{}", dirs.join("/"), file)
    }
}

/// Resolves `candidate` and checks it for the marker.
///
/// Returns `None` when the candidate is not extensible, cannot be resolved
/// to a concrete type in a nameable module, or does not carry the marker.
pub fn qualify(candidate: &CandidateDeclaration, marker: &Marker) -> Option<QualifiedType> {
    if !candidate.is_extensible {
        return None;
    }

    let Some(resolved) = resolve_symbol(candidate) else {
        debug!(
            name = %candidate.qualified_name(),
            source = %candidate.source.display(),
            "skipping unresolvable declaration"
        );
        return None;
    };

    if !marker.is_marked(&candidate.attributes) {
        debug!(name = %candidate.qualified_name(), "skipping declaration without marker");
        return None;
    }

    Some(resolved)
}

/// Maps a syntactic declaration to the type it declares.
///
/// Fails for generic declarations, which the template cannot express, and
/// for module paths that are not valid Rust (a file named `order-ids.rs`
/// can never be a module).
fn resolve_symbol(candidate: &CandidateDeclaration) -> Option<QualifiedType> {
    if candidate.is_generic {
        return None;
    }
    if !is_identifier(&candidate.name) {
        return None;
    }
    if !candidate.namespace.segments().iter().all(|segment| is_identifier(segment)) {
        return None;
    }
    Some(QualifiedType::new(candidate.namespace.clone(), candidate.name.clone()))
}

/// Keywords are rejected unless written as raw identifiers (`r#type`).
fn is_identifier(text: &str) -> bool {
    syn::parse_str::<syn::Ident>(text).is_ok()
}

fn unraw(text: &str) -> &str {
    text.strip_prefix("r#").unwrap_or(text)
}
