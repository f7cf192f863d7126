//! Error taxonomy for scaffolding runs
//!
//! Every variant is fatal: the scaffolder aborts on the first failure and
//! performs no rollback of files already created. Prompt validation misses
//! are not errors - the prompt simply asks again.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scaffolding a package
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The package directory (or a subdirectory of it) already exists.
    /// Existing directories are never merged into.
    #[error("directory already exists: {0}")]
    DirExists(PathBuf),

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to scan {path}: {source}")]
    Scan { path: PathBuf, source: io::Error },

    #[error("boilerplate file missing: {0}")]
    MissingBoilerplate(PathBuf),
}
