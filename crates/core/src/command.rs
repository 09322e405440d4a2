//! Construction and execution of configure, build and test invocations
//!
//! The resolvers never spawn anything themselves; this module turns a
//! resolved [`Project`] and a [`Config`] into a program, an argument list
//! and a working directory, and offers a thin synchronous runner.

use crate::cache::{self, CACHE_FILE_NAME};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::project::Project;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

#[derive(Debug, Clone)]
pub struct CmakeCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Create `working_dir` (and ancestors) before spawning.
    pub create_working_dir: bool,
}

impl CmakeCommand {
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    pub fn execute(&self) -> io::Result<ExitStatus> {
        self.std_command()?.status()
    }

    /// Run to completion capturing stdout and stderr.
    pub fn capture(&self) -> io::Result<Output> {
        self.std_command()?.output()
    }

    fn std_command(&self) -> io::Result<Command> {
        if self.create_working_dir {
            std::fs::create_dir_all(&self.working_dir)?;
        }
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.working_dir);
        Ok(cmd)
    }
}

/// `<cmake> [--fresh] [-D<name:TYPE=value>...] <source>`, run in the build
/// directory, creating it first if absent. Configured initial cache
/// assignments apply only when no cache file exists yet; `defines` from
/// the caller are always passed.
pub fn configure_command(
    project: &Project,
    config: &Config,
    fresh: bool,
    defines: &[String],
) -> Result<CmakeCommand> {
    let mut args = Vec::new();
    if fresh {
        args.push("--fresh".to_string());
    }

    let first_configure = !project.build().join(CACHE_FILE_NAME).exists();
    if first_configure {
        for assignment in &config.initial_cache {
            args.push(define_arg(assignment)?);
        }
    }
    for assignment in defines {
        args.push(define_arg(assignment)?);
    }

    args.push(project.source().display().to_string());

    Ok(CmakeCommand {
        program: resolve_program(&config.cmake_program, project.build()),
        args,
        working_dir: project.build().to_path_buf(),
        create_working_dir: true,
    })
}

/// `<cmake> --build . [--target <t>]`, run in the build directory.
pub fn build_command(project: &Project, config: &Config, target: Option<&str>) -> CmakeCommand {
    let mut args = vec!["--build".to_string(), ".".to_string()];
    if let Some(target) = target {
        args.push("--target".to_string());
        args.push(target.to_string());
    }

    CmakeCommand {
        program: resolve_program(&config.cmake_program, project.build()),
        args,
        working_dir: project.build().to_path_buf(),
        create_working_dir: false,
    }
}

/// `<ctest> <extra-args...> [-R <pattern>]`, run in the build directory.
/// No pattern runs all tests.
pub fn test_command(project: &Project, config: &Config, pattern: Option<&str>) -> CmakeCommand {
    let mut args = config.ctest_args.clone();
    if let Some(pattern) = pattern {
        args.push("-R".to_string());
        args.push(pattern.to_string());
    }

    CmakeCommand {
        program: resolve_program(&config.ctest_program, project.build()),
        args,
        working_dir: project.build().to_path_buf(),
        create_working_dir: false,
    }
}

/// `<ctest> <extra-args...> --show-only=json-v1`, whose output feeds
/// [`crate::testlist::test_names`].
pub fn test_list_command(project: &Project, config: &Config) -> CmakeCommand {
    let mut args = config.ctest_args.clone();
    args.push("--show-only=json-v1".to_string());

    CmakeCommand {
        program: resolve_program(&config.ctest_program, project.build()),
        args,
        working_dir: project.build().to_path_buf(),
        create_working_dir: false,
    }
}

fn define_arg(assignment: &str) -> Result<String> {
    if !cache::is_cache_assignment(assignment) {
        return Err(Error::Config(format!(
            "invalid cache assignment {assignment:?}, expected NAME:TYPE=VALUE"
        )));
    }
    Ok(format!("-D{assignment}"))
}

/// A bare command name is left for PATH lookup at spawn time; anything
/// with a separator is a path, resolved against the build directory when
/// relative.
fn resolve_program(program: &str, working_dir: &Path) -> String {
    let path = Path::new(program);
    if path.components().count() == 1 && !path.is_absolute() {
        program.to_string()
    } else if path.is_absolute() {
        program.to_string()
    } else {
        working_dir.join(path).display().to_string()
    }
}
