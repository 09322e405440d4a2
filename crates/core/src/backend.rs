//! Build backend surface
//!
//! Generic tooling dispatches on a closed set of backend kinds through
//! the [`Backend`] trait instead of inspecting concrete types at runtime.

use crate::project::{Project, SOURCE_MARKER};
use std::path::{Path, PathBuf};

/// Build backends a directory can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Cmake,
}

pub trait ProjectKindDetector {
    fn detect(project_path: &Path) -> Option<ProjectKind>;
}

pub struct DefaultProjectKindDetector;

impl ProjectKindDetector for DefaultProjectKindDetector {
    fn detect(project_path: &Path) -> Option<ProjectKind> {
        if project_path.join(SOURCE_MARKER).is_file() {
            return Some(ProjectKind::Cmake);
        }
        None
    }
}

/// Capabilities every build backend exposes to generic tooling.
pub trait Backend {
    /// Root of the version-controlled source tree.
    fn root(&self) -> &Path;

    /// Directory build and test operations run in.
    fn root_for_build_operations(&self) -> &Path;

    /// Paths tooling should skip when scanning the source tree.
    fn ignore_rules(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Roots outside the source tree that still belong to the project.
    fn external_roots(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}

impl Backend for Project {
    fn root(&self) -> &Path {
        self.source()
    }

    fn root_for_build_operations(&self) -> &Path {
        self.build()
    }

    fn ignore_rules(&self) -> Vec<PathBuf> {
        if self.build().starts_with(self.source()) {
            vec![self.build().to_path_buf()]
        } else {
            Vec::new()
        }
    }

    fn external_roots(&self) -> Vec<PathBuf> {
        if self.build().starts_with(self.source()) {
            Vec::new()
        } else {
            vec![self.build().to_path_buf()]
        }
    }
}
