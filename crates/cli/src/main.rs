use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Locate and drive out-of-tree CMake builds
#[derive(Parser)]
#[command(name = "cmake-runner")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the source and build directories resolved for a project
    Info {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured cache variables with their documentation
    Options {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the configure tool in the project's build directory
    Configure {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Discard the existing cache and configure from scratch
        #[arg(long)]
        fresh: bool,

        /// Extra cache assignment (NAME:TYPE=VALUE), may be repeated
        #[arg(short = 'D', value_name = "ASSIGN")]
        define: Vec<String>,

        /// Show the command without executing it
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,
    },
    /// Build the project
    Build {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Build this target instead of the default
        #[arg(long)]
        target: Option<String>,

        /// Show the command without executing it
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,
    },
    /// Run the project's tests
    Test {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Only run tests whose names match this regular expression
        #[arg(short = 'R', long = "tests-regex", value_name = "PATTERN")]
        pattern: Option<String>,

        /// Show the command without executing it
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,
    },
    /// List the names of the project's tests
    ListTests {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { dir, json } => commands::info_command(dir, json),
        Commands::Options { dir, json } => commands::options_command(dir, json),
        Commands::Configure {
            dir,
            fresh,
            define,
            dry_run,
        } => commands::configure_command(dir, fresh, &define, dry_run),
        Commands::Build {
            dir,
            target,
            dry_run,
        } => commands::build_command(dir, target.as_deref(), dry_run),
        Commands::Test {
            dir,
            pattern,
            dry_run,
        } => commands::test_command(dir, pattern.as_deref(), dry_run),
        Commands::ListTests { dir } => commands::list_tests_command(dir),
    }
}
