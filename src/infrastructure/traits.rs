//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::LaunchCommand;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Process replacement abstraction.
pub trait ProcessLauncher: Send + Sync {
    /// Resolve a program name to an executable path via the search path.
    /// A name containing a path separator is checked as given.
    fn find_executable(&self, program: &str) -> Option<PathBuf>;

    /// Replace the current process with `executable`.
    ///
    /// Only returns on failure; on success the calling program is gone.
    fn exec(&self, executable: &Path, command: &LaunchCommand) -> io::Error;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Launcher backed by `PATH` lookup and `execvp`-style image replacement.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    search_path: Option<OsString>,
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }
}

impl SystemLauncher {
    /// Launcher searching the given `PATH`-style list instead of the environment.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ProcessLauncher for SystemLauncher {
    fn find_executable(&self, program: &str) -> Option<PathBuf> {
        let candidate = Path::new(program);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }

        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| executable_candidates(&dir, program))
            .find(|path| is_executable(path))
    }

    fn exec(&self, executable: &Path, command: &LaunchCommand) -> io::Error {
        let mut cmd = Command::new(executable);
        cmd.args(command.args.iter().skip(1));
        for (key, value) in &command.env {
            cmd.env(key, value.as_str());
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;

            if let Some(arg0) = command.args.first() {
                cmd.arg0(arg0);
            }
            cmd.exec()
        }
        #[cfg(not(unix))]
        {
            // No image replacement here: run the child with inherited stdio
            // and hand its exit status on as our own.
            match cmd.status() {
                Ok(status) => std::process::exit(status.code().unwrap_or(1)),
                Err(e) => e,
            }
        }
    }
}

fn executable_candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(program)];
    if !env::consts::EXE_SUFFIX.is_empty() {
        candidates.push(dir.join(format!("{program}{}", env::consts::EXE_SUFFIX)));
    }
    candidates
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}
