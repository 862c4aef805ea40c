//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, ProcessLauncher)
//! but are themselves concrete structs, not traits.

mod alias;
mod launch;

pub use alias::AliasService;
pub use launch::LaunchService;
