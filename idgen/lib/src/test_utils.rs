//! Shared test utilities for idgen tests.

use std::path::PathBuf;

use crate::qualifier::QualifiedType;
use crate::scanner::{AttributeRef, CandidateDeclaration};
use crate::source::ModulePath;

/// Creates an extensible, non-generic candidate for testing.
///
/// ## Arguments
///
/// * `namespace` - `::`-separated module path (empty for the crate root)
/// * `name` - Struct name
/// * `attributes` - Attribute paths, used both as written and as resolved
pub fn candidate(namespace: &str, name: &str, attributes: &[&str]) -> CandidateDeclaration {
    CandidateDeclaration {
        name: name.to_string(),
        namespace: ModulePath::parse(namespace),
        is_extensible: true,
        is_generic: false,
        attributes: attributes
            .iter()
            .map(|path| AttributeRef::new(*path, *path))
            .collect(),
        source: PathBuf::from("src/lib.rs"),
    }
}

/// Creates a qualified type without going through the scanner.
pub fn qualified(namespace: &str, name: &str) -> QualifiedType {
    QualifiedType::new(ModulePath::parse(namespace), name)
}
