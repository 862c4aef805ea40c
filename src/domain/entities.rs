//! Domain entities: core data structures

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::domain::DomainError;

/// Database value meaning "connect without selecting a database".
pub const WILDCARD_DATABASE: &str = "*";

/// Field separator within an alias file line.
const FIELD_DELIMITER: char = '\t';

/// Placeholder shown instead of secret values in debug output.
const REDACTED: &str = "<redacted>";

/// One configured PostgreSQL endpoint.
///
/// The port is kept as text: it is only ever placed into an argument vector.
/// The password is held in a zeroizing buffer and never shows up in `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    password: Zeroizing<String>,
}

impl ConnectionRecord {
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            database: database.into(),
            user: user.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The database to select, or `None` for the wildcard.
    ///
    /// Only the literal `*` is a wildcard; an empty string is passed through.
    pub fn database_arg(&self) -> Option<&str> {
        if self.database == WILDCARD_DATABASE {
            None
        } else {
            Some(&self.database)
        }
    }

    /// `user@host:port[/database]`, without the database for the wildcard.
    pub fn target(&self) -> String {
        match self.database_arg() {
            Some(db) => format!("{}@{}:{}/{}", self.user, self.host, self.port, db),
            None => format!("{}@{}:{}", self.user, self.host, self.port),
        }
    }
}

impl fmt::Debug for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Parsed alias file: alias name -> connection record.
///
/// Aliases are case-sensitive. Iteration is lexicographic by alias.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    source: PathBuf,
    entries: BTreeMap<String, ConnectionRecord>,
}

impl AliasTable {
    /// Fields per line: alias, host, port, database, user, password.
    pub const FIELD_COUNT: usize = 6;

    /// Parse alias file content.
    ///
    /// Format, one record per line:
    /// `alias<TAB>host<TAB>port<TAB>database<TAB>user<TAB>password`
    ///
    /// - A trailing `\r` is stripped, so CRLF files parse like LF files
    /// - Blank lines (no tab, nothing but spaces) are skipped; a line holding
    ///   tabs is always a record and gets its fields counted
    /// - Any other line must have exactly [`Self::FIELD_COUNT`] fields
    /// - A repeated alias replaces the earlier one (last line wins)
    ///
    /// # Arguments
    /// * `content` - File content to parse
    /// * `source` - Path the content came from (used in errors and listings)
    pub fn parse(content: &str, source: PathBuf) -> Result<Self, DomainError> {
        let mut entries = BTreeMap::new();

        for (idx, raw) in content.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if !line.contains(FIELD_DELIMITER) && line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
            let [alias, host, port, database, user, password] = fields[..] else {
                return Err(DomainError::MalformedLine {
                    path: source,
                    line: idx + 1,
                    expected: Self::FIELD_COUNT,
                    found: fields.len(),
                });
            };

            entries.insert(
                alias.to_string(),
                ConnectionRecord::new(host, port, database, user, password),
            );
        }

        Ok(Self { source, entries })
    }

    /// Build a table from already-parsed records.
    #[cfg(test)]
    pub(crate) fn from_records<I, S>(source: PathBuf, records: I) -> Self
    where
        I: IntoIterator<Item = (S, ConnectionRecord)>,
        S: Into<String>,
    {
        Self {
            source,
            entries: records.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Path the table was parsed from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, alias: &str) -> Result<&ConnectionRecord, DomainError> {
        self.entries
            .get(alias)
            .ok_or_else(|| DomainError::AliasNotFound(alias.to_string()))
    }

    /// Entries sorted by alias.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConnectionRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which client tool to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMode {
    /// `psql`: database as a bare positional argument
    #[default]
    Interactive,
    /// `pg_dump`: database via `-d <database>`
    Dump,
}

/// Everything needed to replace the current process with a client.
#[derive(Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Program name looked up on the search path
    pub program: String,
    /// Full argument vector; `args[0]` is the program name
    pub args: Vec<String>,
    /// Variables merged over the inherited environment
    pub env: BTreeMap<String, Zeroizing<String>>,
}

impl fmt::Debug for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env: BTreeMap<&str, &str> = self.env.keys().map(|k| (k.as_str(), REDACTED)).collect();
        f.debug_struct("LaunchCommand")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("env", &env)
            .finish()
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
