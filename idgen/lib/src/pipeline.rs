//! The two-phase generation contract.
//!
//! ```text
//! scan(paths)       -> Vec<CandidateDeclaration>
//! generate(candidates) -> Vec<GeneratedUnit>
//! ```
//!
//! Every call is independent: no caches, no registries, nothing retained
//! between runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::GeneratorError;
use crate::marker::{Marker, MarkerPolicy};
use crate::output::{GeneratedUnit, render_unit, write_units};
use crate::qualifier::qualify;
use crate::scanner::{CandidateDeclaration, scan_source};
use crate::source::discover_sources;

/// Options for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Source root used to derive module paths. See [`discover_sources`].
    pub root: Option<PathBuf>,
    /// How the marker attribute is matched.
    pub policy: MarkerPolicy,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_policy(mut self, policy: MarkerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn marker(&self) -> Marker {
        Marker::new(self.policy)
    }
}

/// Scans `inputs` (files or directories) for extensible declarations.
///
/// Files that fail to parse are skipped with a warning.
///
/// ## Errors
///
/// Returns an error only for file system problems; see [`discover_sources`].
pub fn scan(
    inputs: &[PathBuf],
    config: &GeneratorConfig,
) -> Result<Vec<CandidateDeclaration>, GeneratorError> {
    let sources = discover_sources(inputs, config.root.as_deref())?;

    let mut candidates = Vec::new();
    for source in &sources {
        match scan_source(source) {
            Ok(found) => {
                debug!(path = %source.path.display(), count = found.len(), "scanned source");
                candidates.extend(found);
            }
            Err(error) => warn!("{error}"),
        }
    }

    Ok(candidates)
}

/// Qualifies `candidates` and renders one unit per qualified type.
///
/// Units are keyed by namespace and name. If two candidates still share a
/// key (the same module scanned through two inputs), the first one wins and
/// the duplicate is skipped with a warning.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if rendering fails.
pub fn generate(
    candidates: &[CandidateDeclaration],
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedUnit>, GeneratorError> {
    let marker = config.marker();
    let mut keys = HashSet::new();
    let mut units = Vec::new();

    for candidate in candidates {
        let Some(ty) = qualify(candidate, &marker) else {
            continue;
        };

        let key = ty.unit_key();
        if !keys.insert(key.clone()) {
            warn!(
                key = %key,
                source = %candidate.source.display(),
                "skipping duplicate identifier unit"
            );
            continue;
        }

        units.push(render_unit(&ty)?);
    }

    Ok(units)
}

/// Scans, generates, and writes units under `out_dir` in one pass.
///
/// Suitable for a build script:
///
/// ```no_run
/// use std::path::PathBuf;
/// use idgen_lib::{GeneratorConfig, generate_and_write};
///
/// let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("idgen");
/// let config = GeneratorConfig::new().with_root("src");
/// generate_and_write(&[PathBuf::from("src")], &out_dir, &config, false).unwrap();
/// println!("cargo:rerun-if-changed=src");
/// ```
///
/// ## Errors
///
/// Propagates errors from [`scan`], [`generate`], and [`write_units`].
pub fn generate_and_write(
    inputs: &[PathBuf],
    out_dir: &Path,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<Vec<GeneratedUnit>, GeneratorError> {
    let candidates = scan(inputs, config)?;
    let units = generate(&candidates, config)?;
    write_units(&units, out_dir, dry_run)?;
    Ok(units)
}
