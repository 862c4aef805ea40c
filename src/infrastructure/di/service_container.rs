//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{AliasService, LaunchService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, ProcessLauncher, RealFileSystem, SystemLauncher};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Process replacement abstraction
    pub launcher: Arc<dyn ProcessLauncher>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(SystemLauncher::default()),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            launcher,
        }
    }

    /// Alias file loading and lookup.
    pub fn alias_service(&self) -> AliasService {
        AliasService::new(Arc::clone(&self.fs))
    }

    /// Client process launching.
    pub fn launch_service(&self) -> LaunchService {
        LaunchService::new(Arc::clone(&self.launcher))
    }
}
