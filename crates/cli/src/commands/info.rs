use anyhow::Result;
use cmake_runner_core::Backend;
use std::path::PathBuf;

use super::resolve_from;

pub fn info_command(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let (_, project) = resolve_from(dir)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "source": project.source(),
                "build": project.build(),
            }))?
        );
    } else {
        println!("Source: {}", project.root().display());
        println!("Build:  {}", project.root_for_build_operations().display());
    }

    Ok(())
}
