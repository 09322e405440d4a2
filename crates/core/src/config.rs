//! Configuration management for cmake-runner
//!
//! Values are resolved once at the call boundary and threaded explicitly
//! into resolver and command calls; nothing reads ambient state. The
//! nearest config file above the starting directory overrides the
//! process-wide defaults.

use crate::build_dir::BuildDirRule;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Configure tool: a command name looked up on PATH, or a path
    /// (absolute, or relative to the build directory).
    pub cmake_program: String,
    /// Test tool, resolved the same way as `cmake_program`.
    pub ctest_program: String,
    /// `NAME:TYPE=VALUE` cache assignments applied only on first configure.
    pub initial_cache: Vec<String>,
    /// Where the build directory of a source tree is expected to live.
    pub build_dir: BuildDirRule,
    /// Extra arguments always passed to the test tool.
    pub ctest_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cmake_program: "cmake".to_string(),
            ctest_program: "ctest".to_string(),
            initial_cache: Vec::new(),
            build_dir: BuildDirRule::default(),
            ctest_args: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".cmake-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("cmake-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Nearest config file above `start` wins; defaults otherwise.
    pub fn discover(start: &Path) -> Result<Self> {
        if let Some(config_path) = Self::find_config_file(start) {
            debug!("loading config from {}", config_path.display());
            return Self::load_from_file(&config_path);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cmake_program, "cmake");
        assert_eq!(config.ctest_program, "ctest");
        assert!(config.initial_cache.is_empty());
        assert!(config.ctest_args.is_empty());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".cmake-runner.json");
        fs::write(&path, r#"{"build_dir": "../proj-build"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.cmake_program, "cmake");
        assert!(matches!(config.build_dir, BuildDirRule::Path(ref p) if p == "../proj-build"));
    }

    #[test]
    fn test_nearest_config_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join("cmake-runner.json"),
            r#"{"cmake_program": "outer-cmake"}"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("a/.cmake-runner.json"),
            r#"{"cmake_program": "inner-cmake"}"#,
        )
        .unwrap();

        let config = Config::discover(&nested).unwrap();
        assert_eq!(config.cmake_program, "inner-cmake");
    }

    #[test]
    fn test_discover_without_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::discover(temp_dir.path()).unwrap();
        assert_eq!(config.ctest_program, "ctest");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmake-runner.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmake-runner.json");

        let mut config = Config::default();
        config.initial_cache = vec!["CMAKE_BUILD_TYPE:STRING=Debug".to_string()];
        config.ctest_args = vec!["--output-on-failure".to_string()];
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.initial_cache, config.initial_cache);
        assert_eq!(loaded.ctest_args, config.ctest_args);
    }
}
