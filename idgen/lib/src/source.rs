//! Source discovery and module path derivation.
//!
//! Rust has no namespace keyword: a declaration's namespace is its module
//! path, which comes from where its file sits under the crate's source root
//! plus any inline `mod` blocks around it. This module handles the file
//! half of that; the scanner adds inline modules.
//!
//! ## Mapping
//!
//! ```text
//! src/lib.rs              -> (crate root)
//! src/main.rs             -> (crate root)
//! src/shop/mod.rs         -> shop
//! src/shop/orders.rs      -> shop::orders
//! src/shop/orders/ids.rs  -> shop::orders::ids
//! ```

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GeneratorError;

/// File stems that name their directory's module rather than a child module.
const MODULE_ROOT_STEMS: &[&str] = &["lib", "main", "mod"];

/// Keywords that have no raw form.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "Self", "_"];

/// A module path relative to the crate root, e.g. `shop::orders`.
///
/// The crate root is the empty path and displays as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// The crate root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a module path from its segments, outermost first.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parses a `::`-separated path such as `shop::orders`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use idgen_lib::ModulePath;
    ///
    /// let path = ModulePath::parse("shop::orders");
    /// assert_eq!(path.segments(), ["shop", "orders"]);
    /// assert!(ModulePath::parse("").is_root());
    /// ```
    pub fn parse(path: &str) -> Self {
        Self::new(path.split("::").filter(|segment| !segment.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path of a child module.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Qualifies `name` with this path (`shop::orders::OrderId`).
    pub fn qualify(&self, name: &str) -> String {
        if self.is_root() {
            name.to_string()
        } else {
            format!("{}::{}", self, name)
        }
    }

    /// Derives the module path of `file` relative to the source `root`.
    ///
    /// Returns `None` when `file` is not inside `root`. Segments are taken
    /// verbatim from the file system; whether they are valid identifiers is
    /// decided later, when the declaration is resolved.
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use idgen_lib::ModulePath;
    ///
    /// let path = ModulePath::from_file(Path::new("src"), Path::new("src/shop/orders.rs"));
    /// assert_eq!(path, Some(ModulePath::parse("shop::orders")));
    ///
    /// let root = ModulePath::from_file(Path::new("src"), Path::new("src/lib.rs"));
    /// assert_eq!(root, Some(ModulePath::root()));
    /// ```
    pub fn from_file(root: &Path, file: &Path) -> Option<Self> {
        let relative = relative_to(root, file)?;

        let mut segments: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(module_segment(&part.to_string_lossy())),
                _ => None,
            })
            .collect();

        // The last component is the file itself
        segments.pop()?;
        let stem = relative.file_stem()?.to_string_lossy();
        if !MODULE_ROOT_STEMS.contains(&stem.as_ref()) {
            segments.push(module_segment(&stem));
        }

        Some(Self(segments))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("::"))
    }
}

/// Spells a file or directory name as a module name.
///
/// Keywords become raw identifiers: `mod r#type;` lives in `type.rs`.
/// Names that are not identifiers at all stay verbatim.
fn module_segment(name: &str) -> String {
    if !NON_RAW_KEYWORDS.contains(&name) && syn::parse_str::<syn::Ident>(name).is_err() {
        let raw = format!("r#{name}");
        if syn::parse_str::<syn::Ident>(&raw).is_ok() {
            return raw;
        }
    }
    name.to_string()
}

/// Strips `root` from `file`, falling back to canonical paths so that a
/// relative input and an absolute root (or vice versa) still line up.
fn relative_to(root: &Path, file: &Path) -> Option<PathBuf> {
    if let Ok(relative) = file.strip_prefix(root) {
        return Some(relative.to_path_buf());
    }

    let root = fs::canonicalize(root).ok()?;
    let file = fs::canonicalize(file).ok()?;
    file.strip_prefix(&root).ok().map(Path::to_path_buf)
}

/// One Rust source file, read into memory, with its module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub namespace: ModulePath,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, namespace: ModulePath, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace,
            text: text.into(),
        }
    }

    /// Reads `path` from disk.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::Io` if the file cannot be read.
    pub fn read(path: &Path, namespace: ModulePath) -> Result<Self, GeneratorError> {
        let text = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, namespace, text))
    }
}

/// Collects the Rust sources named by `inputs`.
///
/// Each input is a `.rs` file or a directory. Directories are walked with
/// the standard ignore filters (`.gitignore`, hidden files). Module paths
/// are derived against `root` when given; otherwise against the directory
/// input itself, or the parent directory of a file input.
///
/// The result is sorted by path and free of duplicates.
///
/// ## Errors
///
/// - `GeneratorError::InputNotFound` if an input does not exist
/// - `GeneratorError::OutsideRoot` if a file is not inside an explicit `root`
/// - `GeneratorError::Walk` / `GeneratorError::Io` on file system failures
pub fn discover_sources(
    inputs: &[PathBuf],
    root: Option<&Path>,
) -> Result<Vec<SourceFile>, GeneratorError> {
    let mut located: Vec<(PathBuf, PathBuf)> = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(GeneratorError::InputNotFound(input.clone()));
        }

        if input.is_dir() {
            let base = root.unwrap_or(input).to_path_buf();
            for entry in WalkBuilder::new(input).standard_filters(true).build() {
                let entry = entry?;
                let is_file = entry.file_type().is_some_and(|kind| kind.is_file());
                if is_file && is_rust_source(entry.path()) {
                    located.push((entry.into_path(), base.clone()));
                }
            }
        } else {
            let base = match root {
                Some(root) => root.to_path_buf(),
                None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
            };
            located.push((input.clone(), base));
        }
    }

    located.sort();
    located.dedup_by(|a, b| a.0 == b.0);

    let mut sources = Vec::with_capacity(located.len());
    for (path, base) in located {
        let namespace =
            ModulePath::from_file(&base, &path).ok_or_else(|| GeneratorError::OutsideRoot {
                path: path.clone(),
                root: base.clone(),
            })?;
        debug!(path = %path.display(), namespace = %namespace, "discovered source");
        sources.push(SourceFile::read(&path, namespace)?);
    }

    Ok(sources)
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
}
