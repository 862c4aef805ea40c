//! Client command assembly
//!
//! Turns a resolved connection record into the argument vector and the
//! environment overlay for `psql` / `pg_dump`. Pure data transformation.

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use crate::domain::{ClientMode, ConnectionRecord, LaunchCommand};

/// Default variable carrying the password to the client.
pub const DEFAULT_PASSWORD_ENV: &str = "PGPASSWORD";

/// Builds [`LaunchCommand`]s for one client program.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    password_env: String,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>, password_env: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            password_env: password_env.into(),
        }
    }

    /// Assemble the full command.
    ///
    /// Argument order: `<program> -h <host> -p <port> -U <user>`, then the
    /// database (`-d <db>` in dump mode, bare positional otherwise; nothing for
    /// the wildcard), then `extra_args` verbatim.
    pub fn build(
        &self,
        record: &ConnectionRecord,
        mode: ClientMode,
        extra_args: &[String],
    ) -> LaunchCommand {
        let mut args = vec![
            self.program.clone(),
            "-h".to_string(),
            record.host.clone(),
            "-p".to_string(),
            record.port.clone(),
            "-U".to_string(),
            record.user.clone(),
        ];

        if let Some(db) = record.database_arg() {
            match mode {
                ClientMode::Dump => {
                    args.push("-d".to_string());
                    args.push(db.to_string());
                }
                ClientMode::Interactive => args.push(db.to_string()),
            }
        }

        args.extend(extra_args.iter().cloned());

        let mut env = BTreeMap::new();
        env.insert(
            self.password_env.clone(),
            Zeroizing::new(record.password().to_string()),
        );

        LaunchCommand {
            program: self.program.clone(),
            args,
            env,
        }
    }
}
