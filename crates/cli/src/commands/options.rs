use anyhow::{Context, Result};
use cmake_runner_core::CmakeCache;
use std::path::PathBuf;

use super::resolve_from;

pub fn options_command(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let (_, project) = resolve_from(dir)?;
    let cache = CmakeCache::load(project.build()).with_context(|| {
        format!(
            "failed to read the cache file in {}; has the project been configured?",
            project.build().display()
        )
    })?;

    if json {
        let entries: Vec<_> = cache.entries.values().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in cache.entries.values() {
        println!("{}:{}={}", entry.name, entry.kind, entry.value);
        if !entry.docstring.is_empty() {
            println!("    {}", entry.docstring);
        }
    }

    Ok(())
}
