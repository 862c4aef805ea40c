//! pga: PostgreSQL connection aliases
//!
//! Reads `~/.pgapass` (tab-separated `alias host port database user password`),
//! resolves an alias and replaces the current process with `psql` or `pg_dump`,
//! handing the password over via `PGPASSWORD`.
//!
//! Layers, innermost first: `domain` (parsing, command assembly), `application`
//! (services over I/O traits), `infrastructure` (real I/O, wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
