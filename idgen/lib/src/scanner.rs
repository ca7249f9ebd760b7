//! Candidate scanning over parsed Rust sources.
//!
//! The scanner walks module-level items (recursing into inline `mod`
//! blocks) and records every struct declaration that can receive the
//! generated members without clashing with anything the user wrote. Rust
//! has no partial types, so "extensible" is decided from the declaration's
//! shape and its module scope:
//!
//! 1. a tuple struct with exactly one private `i64` field
//! 2. no `#[derive]` of a trait the template implements
//! 3. no `impl` in the same module that already supplies a generated trait
//!    or member
//!
//! Anything else is dropped here, before the marker is even looked at.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Fields, GenericArgument, ImplItem, Item, ItemImpl, ItemStruct, PathArguments,
    Token, Type, UseTree, Visibility,
};
use tracing::debug;

use crate::codegen::{GENERATED_MEMBERS, GENERATED_TRAITS};
use crate::errors::GeneratorError;
use crate::source::{ModulePath, SourceFile};

/// Spellings of the storage type an extensible struct must declare.
const I64_PATHS: &[&str] = &["i64", "core::primitive::i64", "std::primitive::i64"];

/// One outer attribute on a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRef {
    /// The path as written, e.g. `id` or `idgen_macros::identifier`.
    pub path: String,
    /// The path after expanding its first segment through `use` imports.
    pub resolved: String,
}

impl AttributeRef {
    pub fn new(path: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resolved: resolved.into(),
        }
    }
}

/// A struct declaration eligible for marker inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDeclaration {
    pub name: String,
    pub namespace: ModulePath,
    /// Always `true` for candidates returned by the scanner.
    pub is_extensible: bool,
    /// Declares generic parameters or a `where` clause.
    pub is_generic: bool,
    /// Outer attributes in source order.
    pub attributes: Vec<AttributeRef>,
    /// File the declaration was found in.
    pub source: PathBuf,
}

impl CandidateDeclaration {
    /// Returns `namespace::name`, or just `name` at the crate root.
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.name)
    }
}

/// Parses a source file and returns its extensible struct declarations.
///
/// ## Errors
///
/// Returns `GeneratorError::Parse` if the file is not valid Rust.
pub fn scan_source(file: &SourceFile) -> Result<Vec<CandidateDeclaration>, GeneratorError> {
    let parsed = syn::parse_file(&file.text).map_err(|source| GeneratorError::Parse {
        path: file.path.clone(),
        source,
    })?;
    Ok(scan_items(&parsed.items, &file.namespace, &file.path))
}

/// Scans already-parsed items that live in module `namespace`.
pub fn scan_items(items: &[Item], namespace: &ModulePath, source: &Path) -> Vec<CandidateDeclaration> {
    let mut candidates = Vec::new();
    collect(items, namespace, source, &mut candidates);
    candidates
}

fn collect(
    items: &[Item],
    namespace: &ModulePath,
    source: &Path,
    candidates: &mut Vec<CandidateDeclaration>,
) {
    let scope = ModuleScope::from_items(items);

    for item in items {
        match item {
            Item::Struct(decl) => {
                let name = decl.ident.to_string();
                match check_extensible(decl, &scope) {
                    Ok(()) => candidates.push(CandidateDeclaration {
                        is_generic: !decl.generics.params.is_empty()
                            || decl.generics.where_clause.is_some(),
                        attributes: decl.attrs.iter().map(|attr| scope.resolve(attr)).collect(),
                        namespace: namespace.clone(),
                        source: source.to_path_buf(),
                        is_extensible: true,
                        name,
                    }),
                    Err(reason) => {
                        debug!(name = %namespace.qualify(&name), reason, "struct is not extensible");
                    }
                }
            }
            Item::Mod(module) => {
                // `mod name;` lives in its own file, scanned separately
                if let Some((_, content)) = &module.content {
                    collect(content, &namespace.child(module.ident.to_string()), source, candidates);
                }
            }
            _ => {}
        }
    }
}

/// Imports and authored impls visible in one module.
///
/// Child modules do not inherit their parent's imports, so each inline
/// module gets its own scope.
#[derive(Debug, Default)]
struct ModuleScope {
    /// Local name -> full path, from `use` items.
    imports: HashMap<String, String>,
    /// Type name -> generated traits/members the user already wrote.
    authored: HashMap<String, Vec<String>>,
}

impl ModuleScope {
    fn from_items(items: &[Item]) -> Self {
        let mut scope = Self::default();
        for item in items {
            match item {
                Item::Use(item_use) => scope.record_use(&item_use.tree, &mut Vec::new()),
                Item::Impl(item_impl) => scope.record_impl(item_impl),
                _ => {}
            }
        }
        scope
    }

    fn record_use(&mut self, tree: &UseTree, prefix: &mut Vec<String>) {
        match tree {
            UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use(&path.tree, prefix);
                prefix.pop();
            }
            UseTree::Name(name) => {
                if name.ident == "self" {
                    if let Some(last) = prefix.last() {
                        self.imports.insert(last.clone(), prefix.join("::"));
                    }
                } else {
                    let local = name.ident.to_string();
                    let full = join_path(prefix, &local);
                    self.imports.insert(local, full);
                }
            }
            UseTree::Rename(rename) => {
                if rename.rename == "_" {
                    return;
                }
                let full = if rename.ident == "self" {
                    prefix.join("::")
                } else {
                    join_path(prefix, &rename.ident.to_string())
                };
                self.imports.insert(rename.rename.to_string(), full);
            }
            UseTree::Group(group) => {
                for tree in &group.items {
                    self.record_use(tree, prefix);
                }
            }
            // globs cannot be expanded without the target module
            UseTree::Glob(_) => {}
        }
    }

    fn record_impl(&mut self, item_impl: &ItemImpl) {
        let Some(type_name) = local_type_name(&item_impl.self_ty) else {
            return;
        };

        let mut supplied = Vec::new();
        match &item_impl.trait_ {
            Some((_, trait_path, _)) => {
                let Some(last) = trait_path.segments.last() else {
                    return;
                };
                let trait_name = last.ident.to_string();
                if trait_name == "From" {
                    if single_type_argument(&last.arguments).is_some_and(is_i64) {
                        supplied.push("From<i64>".to_string());
                    }
                } else if GENERATED_TRAITS.contains(&trait_name.as_str()) {
                    supplied.push(trait_name);
                }
            }
            None => {
                for item in &item_impl.items {
                    let member = match item {
                        ImplItem::Const(item) => item.ident.to_string(),
                        ImplItem::Fn(item) => item.sig.ident.to_string(),
                        _ => continue,
                    };
                    if GENERATED_MEMBERS.contains(&member.as_str()) {
                        supplied.push(member);
                    }
                }
            }
        }

        if !supplied.is_empty() {
            self.authored.entry(type_name).or_default().extend(supplied);
        }
    }

    /// Resolves an attribute path through this scope's imports.
    fn resolve(&self, attr: &Attribute) -> AttributeRef {
        let path = attr.path();
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let written = segments.join("::");

        let resolved = match segments.split_first() {
            Some((first, rest)) if path.leading_colon.is_none() => match self.imports.get(first) {
                Some(full) => std::iter::once(full.clone())
                    .chain(rest.iter().cloned())
                    .collect::<Vec<_>>()
                    .join("::"),
                None => written.clone(),
            },
            _ => written.clone(),
        };

        AttributeRef::new(written, resolved)
    }
}

/// Decides whether `decl` can receive the generated members.
///
/// Returns the reason when it cannot.
fn check_extensible(decl: &ItemStruct, scope: &ModuleScope) -> Result<(), &'static str> {
    let Fields::Unnamed(fields) = &decl.fields else {
        return Err("not a tuple struct");
    };
    if fields.unnamed.len() != 1 {
        return Err("does not have exactly one field");
    }
    let field = &fields.unnamed[0];
    if !is_private(&field.vis) {
        return Err("storage field is not private");
    }
    if !is_i64(&field.ty) {
        return Err("storage field is not i64");
    }
    if derives_generated_trait(&decl.attrs) {
        return Err("derives a generated trait");
    }
    if scope
        .authored
        .get(&decl.ident.to_string())
        .is_some_and(|supplied| !supplied.is_empty())
    {
        return Err("already implements a generated member");
    }
    Ok(())
}

fn derives_generated_trait(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| {
            path.segments
                .last()
                .is_some_and(|last| GENERATED_TRAITS.contains(&last.ident.to_string().as_str()))
        })
}

/// `pub(self)` and `pub(in self)` are spellings of private.
fn is_private(vis: &Visibility) -> bool {
    match vis {
        Visibility::Inherited => true,
        Visibility::Restricted(restricted) => restricted.path.is_ident("self"),
        Visibility::Public(_) => false,
    }
}

fn is_i64(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some()
        || type_path
            .path
            .segments
            .iter()
            .any(|segment| !segment.arguments.is_none())
    {
        return false;
    }
    let written: Vec<String> = type_path
        .path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    I64_PATHS.contains(&written.join("::").as_str())
}

/// Returns the name of a non-generic type declared in this module.
///
/// Only `Name` and `self::Name` refer to the current module; a path such
/// as `other::Name` names some other type.
fn local_type_name(ty: &Type) -> Option<String> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() || type_path.path.leading_colon.is_some() {
        return None;
    }
    let segments = &type_path.path.segments;
    let last = match segments.len() {
        1 => segments.first()?,
        2 if segments[0].ident == "self" => segments.last()?,
        _ => return None,
    };
    last.arguments.is_none().then(|| last.ident.to_string())
}

fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle) = arguments else {
        return None;
    };
    match angle.args.first() {
        Some(GenericArgument::Type(ty)) if angle.args.len() == 1 => Some(ty),
        _ => None,
    }
}

fn join_path(prefix: &[String], name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", prefix.join("::"), name)
    }
}
