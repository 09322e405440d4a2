//! cmake-runner - A tool for locating out-of-tree CMake builds and their configuration
//!
//! This crate provides functionality to:
//! - Resolve the (source, build) directory pair of a CMake project from any directory inside it
//! - Parse `CMakeCache.txt` into typed, documented configuration entries
//! - Construct configure/build/test invocations for the resolved project
pub mod backend;
pub mod build_dir;
pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod project;
pub mod remote;
pub mod testlist;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use backend::{Backend, ProjectKind};
pub use build_dir::BuildDirRule;
pub use cache::{CacheEntry, CacheKind, CmakeCache};
pub use command::CmakeCommand;
pub use config::Config;
pub use project::Project;
