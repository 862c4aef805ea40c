//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::AliasTable;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().cyan().bold().to_string()
}

/// One line per alias, sorted: `  <alias>  <user>@<host>:<port>[/<database>]`.
///
/// The alias column is padded to the longest alias, counted in chars.
pub fn alias_lines(table: &AliasTable) -> Vec<String> {
    let width = table
        .iter()
        .map(|(alias, _)| alias.chars().count())
        .max()
        .unwrap_or(0);
    table
        .iter()
        .map(|(alias, record)| format!("  {alias:<width$}  {}", record.target()))
        .collect()
}

/// Write the full alias listing (header, blank line, entries).
pub fn write_listing(out: &mut impl Write, table: &AliasTable) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        header(&format!("Aliases in {}:", table.source().display()))
    )?;
    writeln!(out)?;
    for line in alias_lines(table) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
