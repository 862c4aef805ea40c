//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the alias file format and lookups.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed alias file {}:{line}: expected {expected} tab-separated fields, found {found}", path.display())]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no connection found for alias: {0}")]
    AliasNotFound(String),
}
