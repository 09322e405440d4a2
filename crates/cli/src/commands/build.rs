use anyhow::Result;
use cmake_runner_core::command;
use std::path::PathBuf;

use super::{resolve_from, run_or_print};

pub fn build_command(dir: Option<PathBuf>, target: Option<&str>, dry_run: bool) -> Result<()> {
    let (config, project) = resolve_from(dir)?;
    let command = command::build_command(&project, &config, target);
    run_or_print(command, dry_run)
}
