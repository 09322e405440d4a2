//! Project root resolution for out-of-tree CMake builds
//!
//! A project is the pair of a source tree (marked by `CMakeLists.txt`)
//! and the build directory its cache file was generated for. Either side
//! can be discovered from the other; when both are found independently
//! they must agree.

use crate::cache::{CACHE_FILE_NAME, CmakeCache, HOME_DIRECTORY_KEY};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::{build_dir, remote};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File marking a directory as the root of a CMake source tree.
pub const SOURCE_MARKER: &str = "CMakeLists.txt";

/// An immutable (source, build) directory pair.
///
/// Recomputed on demand from a starting directory; never mutated.
/// Equality is path equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    source: PathBuf,
    build: PathBuf,
}

impl Project {
    /// Pair two directories without validation. Most callers want
    /// [`Project::resolve`] instead.
    pub fn new(source: PathBuf, build: PathBuf) -> Self {
        Self { source, build }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn build(&self) -> &Path {
        &self.build
    }

    /// Determine the project a directory belongs to.
    ///
    /// Walks the ancestry of `start` for the nearest build directory (its
    /// cache file records the source tree it was configured from) and,
    /// independently, for the topmost source marker. The configured
    /// build-directory rule is then evaluated against the candidate
    /// source; a discovered build directory that disagrees with it is a
    /// stale or stray cache and fails resolution rather than silently
    /// picking one of the two.
    pub fn resolve(start: &Path, config: &Config) -> Result<Self> {
        let start = std::fs::canonicalize(start)?;
        debug!("resolving project from {}", start.display());

        let discovered_build = nearest_ancestor_with(&start, CACHE_FILE_NAME);
        if let Some(found) = &discovered_build {
            debug!("found cache file under {}", found.display());
        }

        let recorded_source = match &discovered_build {
            Some(found) => Some(source_recorded_in_cache(found)?),
            None => None,
        };

        let mut source = match recorded_source {
            Some(recorded) => PathBuf::from(recorded),
            None => {
                let topmost = topmost_ancestor_with(&start, SOURCE_MARKER);
                topmost.ok_or(Error::ProjectNotFound)?
            }
        };

        let source_host = remote::host_of(&source.to_string_lossy()).map(str::to_owned);
        if source_host.is_none() {
            // Resolve symlinks when the source tree exists locally.
            if let Ok(canonical) = std::fs::canonicalize(&source) {
                source = canonical;
            }
        }
        debug!("candidate source {}", source.display());

        let build = config.build_dir.resolve(&source)?;
        debug!("expected build directory {}", build.display());

        if let Some(discovered) = discovered_build {
            if discovered != comparable(&build) {
                return Err(Error::InconsistentConfig {
                    discovered,
                    configured: build,
                });
            }
        }

        let build_host = remote::host_of(&build.to_string_lossy()).map(str::to_owned);
        if source_host != build_host {
            return Err(Error::CrossHost {
                source_path: source.display().to_string(),
                build_path: build.display().to_string(),
            });
        }

        Ok(Self { source, build })
    }
}

/// Read the source directory a build directory's cache was configured
/// from. The recorded path is host-local; a host-qualified build
/// directory re-qualifies it with the same prefix.
fn source_recorded_in_cache(found_build: &Path) -> Result<String> {
    let cache = CmakeCache::load(found_build)?;
    let home = cache.home_directory.ok_or_else(|| {
        Error::MalformedCache(format!(
            "{} in {} has no {} entry",
            CACHE_FILE_NAME,
            found_build.display(),
            HOME_DIRECTORY_KEY
        ))
    })?;

    let (home_host, local) = remote::split_host(&home);
    if !Path::new(local).is_absolute() {
        return Err(Error::Config(format!(
            "recorded home directory {home:?} is not an absolute path"
        )));
    }
    if home_host.is_some() {
        return Ok(home);
    }

    let build_path = found_build.to_string_lossy();
    Ok(remote::requalify(remote::host_of(&build_path), &home))
}

/// Nearest ancestor of `start` (including itself) containing `marker`.
fn nearest_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Topmost ancestor of `start` containing `marker`. Keeps ascending past
/// each match so an inner standalone project nested inside a larger one
/// resolves to the outermost root.
fn topmost_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .filter(|dir| dir.join(marker).is_file())
        .last()
        .map(Path::to_path_buf)
}

/// Canonical form for path comparison: resolve through the filesystem
/// when the path exists, fall back to lexical normalization.
fn comparable(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| build_dir::normalize(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_nearest_ancestor_picks_innermost() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        touch(&root.join("marker"));
        touch(&root.join("a/marker"));

        let found = nearest_ancestor_with(&root.join("a/b"), "marker").unwrap();
        assert_eq!(found, root.join("a"));
    }

    #[test]
    fn test_topmost_ancestor_picks_outermost() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        touch(&root.join("marker"));
        touch(&root.join("a/marker"));

        let found = topmost_ancestor_with(&root.join("a/b"), "marker").unwrap();
        assert_eq!(found, root.to_path_buf());
    }

    #[test]
    fn test_recorded_source_requires_home_key() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CACHE_FILE_NAME),
            "CMAKE_BUILD_TYPE:STRING=Release\n",
        )
        .unwrap();

        let err = source_recorded_in_cache(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedCache(_)));
    }

    #[test]
    fn test_recorded_source_must_be_absolute() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CACHE_FILE_NAME),
            "CMAKE_HOME_DIRECTORY:INTERNAL=relative/proj\n",
        )
        .unwrap();

        let err = source_recorded_in_cache(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_requalification_uses_build_host() {
        // The cache stores a host-local path even when the build directory
        // itself is host-qualified.
        let recorded =
            remote::requalify(remote::host_of("builder01:/srv/build"), "/home/u/proj");
        assert_eq!(recorded, "builder01:/home/u/proj");
    }
}
