//! Parser for the cache file a configure run leaves in the build directory

use crate::error::Result;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// File name of the generated cache, also the marker identifying a build directory.
pub const CACHE_FILE_NAME: &str = "CMakeCache.txt";

/// The one internal key recording the source directory used at configure time.
pub const HOME_DIRECTORY_KEY: &str = "CMAKE_HOME_DIRECTORY";

// NAME:TYPE=VALUE over the seven kinds the cache format defines.
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+):(BOOL|PATH|FILEPATH|STRING|INTERNAL|STATIC|UNINITIALIZED)=(.*)$")
        .unwrap()
});

/// Cache variable kinds exposed to callers.
///
/// INTERNAL, STATIC and UNINITIALIZED entries are recognized by the parser
/// but never surface in the public entry mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheKind {
    Bool,
    Path,
    Filepath,
    String,
}

impl CacheKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BOOL" => Some(CacheKind::Bool),
            "PATH" => Some(CacheKind::Path),
            "FILEPATH" => Some(CacheKind::Filepath),
            "STRING" => Some(CacheKind::String),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Bool => "BOOL",
            CacheKind::Path => "PATH",
            CacheKind::Filepath => "FILEPATH",
            CacheKind::String => "STRING",
        }
    }
}

impl std::fmt::Display for CacheKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured cache variable together with its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub name: String,
    pub kind: CacheKind,
    pub value: String,
    pub docstring: String,
}

/// Parsed contents of a cache file.
///
/// `entries` preserves encounter order and holds the public kinds only;
/// `home_directory` retains the raw value of [`HOME_DIRECTORY_KEY`] even
/// though INTERNAL entries are otherwise dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmakeCache {
    pub entries: IndexMap<String, CacheEntry>,
    pub home_directory: Option<String>,
}

impl CmakeCache {
    /// Read and parse `CMakeCache.txt` from a build directory.
    pub fn load(build_dir: &Path) -> Result<Self> {
        let path = build_dir.join(CACHE_FILE_NAME);
        let text = std::fs::read_to_string(&path)?;
        let cache = Self::parse(&text);
        debug!(
            "parsed {} cache entries from {}",
            cache.entries.len(),
            path.display()
        );
        Ok(cache)
    }

    /// Parse cache file text.
    ///
    /// Single forward pass over lines. `//` lines accumulate documentation
    /// for the next assignment; an assignment line consumes the accumulated
    /// documentation whether or not its kind is kept. Blank and malformed
    /// lines leave the accumulator untouched.
    pub fn parse(text: &str) -> Self {
        let mut cache = CmakeCache::default();
        let mut pending_docstring = String::new();

        for line in text.lines() {
            if line.starts_with('#') {
                continue;
            }
            if let Some(rest) = line.strip_prefix("//") {
                pending_docstring.push_str(rest.strip_prefix(' ').unwrap_or(rest));
                continue;
            }
            if let Some(caps) = ASSIGNMENT.captures(line) {
                let (name, tag, value) = (&caps[1], &caps[2], &caps[3]);
                if let Some(kind) = CacheKind::from_tag(tag) {
                    cache.entries.insert(
                        name.to_string(),
                        CacheEntry {
                            name: name.to_string(),
                            kind,
                            value: value.to_string(),
                            docstring: pending_docstring.clone(),
                        },
                    );
                } else if tag == "INTERNAL" && name == HOME_DIRECTORY_KEY {
                    cache.home_directory = Some(value.to_string());
                }
                pending_docstring.clear();
            }
        }

        cache
    }

    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.entries.get(name)
    }
}

/// Whether a string is a syntactically valid `NAME:TYPE=VALUE` cache assignment.
pub fn is_cache_assignment(text: &str) -> bool {
    ASSIGNMENT.is_match(text)
}
