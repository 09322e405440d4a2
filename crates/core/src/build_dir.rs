//! Rules mapping a source directory to its expected build directory

use crate::error::{Error, Result};
use crate::remote;
use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A programmatic build-directory rule.
///
/// Callers must keep custom rules referentially stable: the same source
/// directory must map to the same path on every evaluation, and the rule
/// must not consult any project abstraction (computing the project is
/// what the rule is for).
pub type BuildDirFn = dyn Fn(&Path) -> String + Send + Sync;

/// Where the build directory of a source tree is expected to live.
#[derive(Clone)]
pub enum BuildDirRule {
    /// Literal path: absolute (or host-qualified) used verbatim, relative
    /// resolved against the source directory.
    Path(String),
    /// User-supplied source-to-path function.
    Custom(Arc<BuildDirFn>),
}

impl BuildDirRule {
    pub fn custom<F>(rule: F) -> Self
    where
        F: Fn(&Path) -> String + Send + Sync + 'static,
    {
        BuildDirRule::Custom(Arc::new(rule))
    }

    /// Compute the expected build directory for `source`.
    pub fn resolve(&self, source: &Path) -> Result<PathBuf> {
        let raw = match self {
            BuildDirRule::Path(path) => path.clone(),
            BuildDirRule::Custom(rule) => {
                let path = rule(source);
                if path.is_empty() {
                    return Err(Error::Config(format!(
                        "build directory rule returned an empty path for {}",
                        source.display()
                    )));
                }
                path
            }
        };

        let (host, local) = remote::split_host(&raw);
        if host.is_some() || Path::new(local).is_absolute() {
            return Ok(PathBuf::from(raw));
        }
        Ok(normalize(&source.join(raw)))
    }
}

impl Default for BuildDirRule {
    fn default() -> Self {
        BuildDirRule::Path("build".to_string())
    }
}

impl fmt::Debug for BuildDirRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildDirRule::Path(path) => f.debug_tuple("Path").field(path).finish(),
            BuildDirRule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Serialize for BuildDirRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            BuildDirRule::Path(path) => serializer.serialize_str(path),
            BuildDirRule::Custom(_) => Err(S::Error::custom(
                "programmatic build directory rules cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for BuildDirRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(BuildDirRule::Path)
    }
}

/// Lexical normalization: folds `.` and `..` without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
