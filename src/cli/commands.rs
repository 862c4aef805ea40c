//! Command dispatch: list aliases or exec the client for one alias

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::CommandBuilder;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the CLI with settings loaded from the usual locations.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.generate {
        print_completions(shell);
        return Ok(());
    }

    let settings = Settings::load()?;
    let container = ServiceContainer::new(settings);
    run(cli, &container)
}

/// Run the CLI against an already wired container.
///
/// Only returns on list mode or on failure; a successful launch replaces
/// the process.
#[instrument(skip_all, fields(alias = cli.alias()))]
pub fn run(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let settings = &container.settings;
    let alias_file = settings.alias_file_or(cli.config.as_deref());
    debug!("alias_file: {}", alias_file.display());

    let aliases = container.alias_service();
    let table = aliases.load(&alias_file)?;

    if cli.list {
        let mut stdout = io::stdout().lock();
        return output::write_listing(&mut stdout, &table)
            .map_err(|e| InfraError::io("write alias listing", e).into());
    }

    let alias = cli
        .alias()
        .ok_or_else(|| CliError::Usage("missing alias (use -l to list aliases)".into()))?;
    let record = aliases.resolve(&table, alias)?;

    let mode = cli.mode();
    let command = CommandBuilder::new(settings.client_program(mode), &settings.password_env)
        .build(record, mode, cli.client_args());
    debug!("command: {:?}", command);

    let never = container.launch_service().launch(&command)?;
    match never {}
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
