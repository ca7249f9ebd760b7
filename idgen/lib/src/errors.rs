//! Error types for the identifier generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning sources or writing generated units.
///
/// Declarations that simply do not qualify are never errors; they are
/// skipped. These variants cover the operational failures around them.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read a source file
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust
    #[error("Failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGen(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input path given on the command line does not exist
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    /// A source file lies outside the configured source root, so no module
    /// path can be derived for it.
    #[error("`{path}` is not inside the source root `{root}`")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Directory walking failed
    #[error("Failed to walk source directory: {0}")]
    Walk(#[from] ignore::Error),
}
