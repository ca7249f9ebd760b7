//! Output assembly and file writing for generated units.
//!
//! This module handles the final phase of generation: turning a qualified
//! type into a validated, formatted source unit and writing units to disk
//! atomically.
//!
//! ## Output Structure
//!
//! Units mirror the module tree of the scanned crate:
//! ```text
//! <out_dir>/
//! ├── AppId.g.rs              # crate::AppId
//! └── shop/
//!     └── orders/
//!         └── OrderId.g.rs    # crate::shop::orders::OrderId
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use serde::Serialize;
use tracing::info;

use crate::codegen::generate_identifier;
use crate::errors::GeneratorError;
use crate::qualifier::QualifiedType;
use crate::source::ModulePath;

/// One rendered source unit, keyed by its collision-free name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// Relative output path, e.g. `shop/orders/OrderId.g.rs`.
    pub key: String,
    pub namespace: ModulePath,
    pub type_name: String,
    /// The formatted unit, ready to be `include!`d.
    pub content: String,
}

impl GeneratedUnit {
    /// Returns where this unit lives under `out_dir`.
    pub fn path_in(&self, out_dir: &Path) -> PathBuf {
        self.key
            .split('/')
            .fold(out_dir.to_path_buf(), |path, part| path.join(part))
    }
}

/// Renders the identifier unit for a qualified type.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if the generated code does not parse,
/// which only happens if the template itself is broken.
pub fn render_unit(ty: &QualifiedType) -> Result<GeneratedUnit, GeneratorError> {
    let tokens = generate_identifier(ty);
    let file = validate_code(&tokens)?;

    Ok(GeneratedUnit {
        key: ty.unit_key(),
        namespace: ty.namespace().clone(),
        type_name: ty.type_name().to_string(),
        content: format_code(&file, ty),
    })
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's
/// syntactically valid before anything is written.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGen(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease.
///
/// Prepends a regular-comment header naming the identifier. The header
/// must not use inner doc comments: units are included at item position,
/// where inner attributes are rejected.
pub fn format_code(file: &syn::File, ty: &QualifiedType) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by idgen. Do not edit manually.\n// Identifier: {}\n\n{}",
        ty.qualified_name(),
        formatted
    )
}

/// Writes a unit file atomically: the content is staged next to `path` and
/// renamed into place, so readers never see a half-written unit.
///
/// Missing namespace directories are created first.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming the directory, staging file,
/// or target that could not be written.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let write_error = |at: &Path| {
        let at = at.display().to_string();
        move |source| GeneratorError::WriteError { path: at, source }
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_error(dir))?;
    }

    let staged = path.with_extension("tmp");
    fs::write(&staged, content).map_err(write_error(staged.as_path()))?;
    fs::rename(&staged, path).map_err(write_error(path))
}

/// Writes every unit under `out_dir`.
///
/// With `dry_run` nothing touches the disk. Either way the returned paths
/// are where the units belong.
///
/// ## Errors
///
/// Returns the first `GeneratorError::WriteError` encountered.
pub fn write_units(
    units: &[GeneratedUnit],
    out_dir: &Path,
    dry_run: bool,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = unit.path_in(out_dir);
        if !dry_run {
            write_atomic(&path, &unit.content)?;
            info!(path = %path.display(), "wrote unit");
        }
        written.push(path);
    }
    Ok(written)
}
