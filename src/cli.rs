use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::Recipe;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the root filesystem with mmdebstrap
    Apply(ApplyArgs),

    /// Resolve the recipe and show the mmdebstrap invocation without running it
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by commands that read a recipe.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Optional YAML recipe file; flags and environment override its values
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,

    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    #[command(flatten)]
    pub recipe: RecipeArgs,
}

/// Recipe parameters supplied by the build orchestrator.
#[derive(Args, Debug, Default)]
pub struct RecipeArgs {
    /// Target architecture (amd64, arm64, armv7, arm)
    #[arg(long, env = "RECIPE_TARGET_ARCH")]
    pub arch: Option<String>,

    /// Distribution suite to bootstrap (e.g. bookworm)
    #[arg(long, env = "RECIPE_PARAM_SUITE")]
    pub suite: Option<String>,

    /// Directory to populate with the root filesystem
    #[arg(long, env = "RECIPE_ROOT_DIR")]
    pub root_dir: Option<Utf8PathBuf>,

    /// snapshot.debian.org timestamp to bootstrap from (takes priority over --mirror)
    #[arg(long, env = "RECIPE_PARAM_SNAPSHOT")]
    pub snapshot: Option<String>,

    /// Custom repository URL, used as an untrusted-but-accepted source
    #[arg(long, env = "RECIPE_PARAM_MIRROR")]
    pub mirror: Option<String>,
}

impl From<&RecipeArgs> for Recipe {
    fn from(args: &RecipeArgs) -> Self {
        Recipe {
            arch: args.arch.clone(),
            suite: args.suite.clone(),
            root_dir: args.root_dir.clone(),
            snapshot: args.snapshot.clone(),
            mirror: args.mirror.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Do not run, just show what would be done
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Represents log levels for controlling the verbosity of logging output.
///
/// Maps directly onto the `tracing` levels. `--log-level debug` also logs
/// the resolved architecture and the assembled bootstrap plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

pub fn parse_args() -> Result<Cli> {
    Ok(Cli::parse())
}
