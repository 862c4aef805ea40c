//! Client launch service
//!
//! Locates the client executable and replaces the current process with it.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::LaunchCommand;
use crate::infrastructure::traits::ProcessLauncher;

/// Service for replacing the current process with a database client.
pub struct LaunchService {
    launcher: Arc<dyn ProcessLauncher>,
}

impl LaunchService {
    /// Create a new launch service.
    pub fn new(launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }

    /// Exec `command`.
    ///
    /// Never returns on success. Errors are `ExecutableNotFound` when the
    /// program is not on the search path and `LaunchFailed` when the exec
    /// itself fails.
    pub fn launch(&self, command: &LaunchCommand) -> ApplicationResult<Infallible> {
        let executable = self
            .launcher
            .find_executable(&command.program)
            .ok_or_else(|| ApplicationError::ExecutableNotFound {
                program: command.program.clone(),
            })?;
        debug!("launch: {} -> {}", command.program, executable.display());
        info!("exec {:?}", command.args);

        let err = self.launcher.exec(&executable, command);
        Err::<Infallible, _>(err).with_launch_context(&executable)
    }
}
