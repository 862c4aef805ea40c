//! Alias file service
//!
//! Loads the alias file from disk and resolves aliases against it.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{AliasTable, ConnectionRecord};
use crate::infrastructure::traits::FileSystem;

/// Service for loading alias files.
pub struct AliasService {
    fs: Arc<dyn FileSystem>,
}

impl AliasService {
    /// Create a new alias service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse the alias file at `path`.
    ///
    /// Fails with `ConfigUnreadable` if the file cannot be read and with a
    /// malformed-line domain error if any non-blank line has the wrong
    /// number of fields.
    pub fn load(&self, path: &Path) -> ApplicationResult<AliasTable> {
        debug!("load: path={}", path.display());
        let content = self.fs.read_to_string(path).with_alias_file_context(path)?;

        let table = AliasTable::parse(&content, path.to_path_buf())?;
        debug!("load: parsed {} aliases", table.len());
        Ok(table)
    }

    /// Look up `alias` in `table`.
    pub fn resolve<'a>(
        &self,
        table: &'a AliasTable,
        alias: &str,
    ) -> ApplicationResult<&'a ConnectionRecord> {
        let record = table.resolve(alias)?;
        debug!("resolve: {} -> {}", alias, record.target());
        Ok(record)
    }
}
