//! End-to-end tests of the CLI pipeline with a recording launcher

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tempfile::TempDir;

use pga::cli::commands::run;
use pga::cli::Cli;
use pga::config::Settings;
use pga::domain::{ClientMode, LaunchCommand};
use pga::exitcode;
use pga::infrastructure::di::ServiceContainer;
use pga::infrastructure::traits::{ProcessLauncher, RealFileSystem};

const ALIASES: &str = "zeta\tdb9\t5432\t*\tzed\tz\n\
                       prod\tdb1\t5432\t*\talice\tx\n\
                       dev\tdb2\t5433\tapp\tbob\ty\n";

/// Pretends every program lives in /usr/bin and records the exec.
#[derive(Default)]
struct RecordingLauncher {
    calls: Mutex<Vec<LaunchCommand>>,
}

impl ProcessLauncher for RecordingLauncher {
    fn find_executable(&self, program: &str) -> Option<PathBuf> {
        Some(Path::new("/usr/bin").join(program))
    }

    fn exec(&self, _executable: &Path, command: &LaunchCommand) -> io::Error {
        self.calls.lock().unwrap().push(command.clone());
        io::Error::new(io::ErrorKind::Other, "recorded")
    }
}

struct Fixture {
    _dir: TempDir,
    alias_file: PathBuf,
    launcher: Arc<RecordingLauncher>,
    container: ServiceContainer,
}

fn fixture(content: &str) -> Fixture {
    pga::util::testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let alias_file = dir.path().join(".pgapass");
    std::fs::write(&alias_file, content).unwrap();

    let settings = Settings {
        alias_file: alias_file.clone(),
        ..Settings::default()
    };
    let launcher = Arc::new(RecordingLauncher::default());
    let container = ServiceContainer::with_deps(settings, Arc::new(RealFileSystem), launcher.clone());

    Fixture {
        _dir: dir,
        alias_file,
        launcher,
        container,
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pga").chain(args.iter().copied())).unwrap()
}

#[test]
fn given_alias_and_passthrough_when_parsing_then_hyphen_args_after_alias_are_forwarded() {
    let cli = parse(&["--pgdump", "dev", "-c", "select 1", "--list"]);

    assert_eq!(cli.alias(), Some("dev"));
    assert_eq!(cli.client_args(), ["-c", "select 1", "--list"]);
    assert!(!cli.list);
    assert_eq!(cli.mode(), ClientMode::Dump);
}

#[test]
fn given_list_flag_when_parsing_then_alias_is_optional() {
    let cli = parse(&["-l"]);
    assert!(cli.list);
    assert_eq!(cli.alias(), None);
}

#[test]
fn given_no_alias_when_parsing_then_clap_rejects() {
    let result = Cli::try_parse_from(["pga"]);
    assert!(result.is_err());
}

#[test]
fn given_psql_alias_when_running_then_execs_psql_with_positional_database() {
    let f = fixture(ALIASES);
    let cli = parse(&["dev", "-c", "select 1"]);

    let err = run(&cli, &f.container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::OSERR);
    let calls = f.launcher.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].args,
        ["psql", "-h", "db2", "-p", "5433", "-U", "bob", "app", "-c", "select 1"]
    );
    assert_eq!(calls[0].env.get("PGPASSWORD").map(|v| v.as_str()), Some("y"));
}

#[test]
fn given_pgdump_and_wildcard_alias_when_running_then_omits_database_flag() {
    let f = fixture(ALIASES);
    let cli = parse(&["--pgdump", "prod"]);

    let _ = run(&cli, &f.container);

    let calls = f.launcher.calls.lock().unwrap();
    assert_eq!(calls[0].program, "pg_dump");
    assert_eq!(
        calls[0].args,
        ["pg_dump", "-h", "db1", "-p", "5432", "-U", "alice"]
    );
}

#[test]
fn given_unknown_alias_when_running_then_fails_before_exec() {
    let f = fixture(ALIASES);
    let cli = parse(&["staging"]);

    let err = run(&cli, &f.container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOUSER);
    assert!(err.to_string().contains("staging"));
    assert!(f.launcher.calls.lock().unwrap().is_empty());
}

#[test]
fn given_malformed_file_when_running_then_fails_with_dataerr() {
    let f = fixture("prod\tdb1\t5432\n");
    let cli = parse(&["prod"]);

    let err = run(&cli, &f.container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert!(f.launcher.calls.lock().unwrap().is_empty());
}

#[test]
fn given_list_flag_when_running_then_succeeds_without_exec() {
    let f = fixture(ALIASES);
    let cli = parse(&["-l"]);

    run(&cli, &f.container).unwrap();

    assert!(f.launcher.calls.lock().unwrap().is_empty());
}

#[test]
fn given_config_override_when_running_then_reads_that_file() {
    let f = fixture(ALIASES);
    let other = f.alias_file.with_file_name("other");
    std::fs::write(&other, "qa\tqa-db\t5432\t*\tqa\tq\n").unwrap();
    let cli = parse(&["--config", other.to_str().unwrap(), "qa"]);

    let _ = run(&cli, &f.container);

    let calls = f.launcher.calls.lock().unwrap();
    assert_eq!(calls[0].args[2], "qa-db");
}

#[test]
fn given_missing_config_override_when_running_then_fails_with_noinput() {
    let f = fixture(ALIASES);
    let missing = f.alias_file.with_file_name("missing");
    let cli = parse(&["-c", missing.to_str().unwrap(), "-l"]);

    let err = run(&cli, &f.container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}
