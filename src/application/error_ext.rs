//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the alias file path to a read failure.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path)
    ///     .with_alias_file_context(&path)?;
    /// ```
    fn with_alias_file_context(self, path: &Path) -> ApplicationResult<T>;

    /// Attach the executable path to a launch failure.
    fn with_launch_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_alias_file_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::ConfigUnreadable {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn with_launch_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::LaunchFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
