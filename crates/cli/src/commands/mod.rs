pub mod build;
pub mod configure;
pub mod info;
pub mod options;

pub use build::build_command;
pub use configure::configure_command;
pub use info::info_command;
pub use list_tests::list_tests_command;
pub use options::options_command;
pub use test::test_command;

use anyhow::{Context, Result};
use cmake_runner_core::{CmakeCommand, Config, Project};
use std::path::PathBuf;
use tracing::info;

/// Resolve the project (and the config governing it) from an optional
/// starting directory.
pub(crate) fn resolve_from(dir: Option<PathBuf>) -> Result<(Config, Project)> {
    let start = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = Config::discover(&start)?;
    let project = Project::resolve(&start, &config)
        .with_context(|| format!("failed to resolve a CMake project from {}", start.display()))?;
    Ok((config, project))
}

/// Print the command for dry runs, execute it otherwise. A failing child
/// sets the process exit code.
pub(crate) fn run_or_print(command: CmakeCommand, dry_run: bool) -> Result<()> {
    let shell_cmd = command.to_shell_command();

    if dry_run {
        println!("{shell_cmd}");
        println!("Working directory: {}", command.working_dir.display());
        return Ok(());
    }

    info!("Running: {}", shell_cmd);
    info!("Working directory: {}", command.working_dir.display());

    let status = command
        .execute()
        .with_context(|| format!("Failed to execute: {shell_cmd}"))?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
