use anyhow::Result;
use cmake_runner_core::command;
use std::path::PathBuf;

use super::{resolve_from, run_or_print};

pub fn configure_command(
    dir: Option<PathBuf>,
    fresh: bool,
    defines: &[String],
    dry_run: bool,
) -> Result<()> {
    let (config, project) = resolve_from(dir)?;
    let command = command::configure_command(&project, &config, fresh, defines)?;
    run_or_print(command, dry_run)
}
