//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::domain::ClientMode;

/// Connect to PostgreSQL by alias: exec psql or pg_dump with credentials from ~/.pgapass
#[derive(Parser, Debug)]
#[command(name = "pga")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Alias file (default: ~/.pgapass)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Use pg_dump instead of psql
    #[arg(long)]
    pub pgdump: bool,

    /// List all available aliases
    #[arg(short, long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub generate: Option<clap_complete::Shell>,

    /// Alias, followed by arguments passed through to the client
    #[arg(
        value_name = "ALIAS [CLIENT_ARGS]",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present_any = ["list", "generate"]
    )]
    pub target: Vec<String>,
}

impl Cli {
    /// Requested alias (first positional).
    pub fn alias(&self) -> Option<&str> {
        self.target.first().map(String::as_str)
    }

    /// Arguments after the alias, forwarded verbatim.
    pub fn client_args(&self) -> &[String] {
        self.target.get(1..).unwrap_or(&[])
    }

    pub fn mode(&self) -> ClientMode {
        if self.pgdump {
            ClientMode::Dump
        } else {
            ClientMode::Interactive
        }
    }
}
