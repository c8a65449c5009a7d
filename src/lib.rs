pub mod arch;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;

pub use error::StepError;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

use crate::bootstrap::BootstrapPlan;
use crate::config::{Recipe, RecipeParams};
use crate::executor::{CommandExecutor, ExecutionResult};

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    // stdout belongs to the bootstrapping tool
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Merges the recipe file (if any) with flags and environment, then validates.
pub fn load_params(common: &cli::CommonArgs) -> Result<RecipeParams> {
    let base = match common.file {
        Some(ref path) => config::load_recipe(path)
            .with_context(|| format!("failed to load recipe from {}", path))?,
        None => Recipe::default(),
    };

    let params = base.overlay(Recipe::from(&common.recipe)).into_params()?;
    Ok(params)
}

/// Runs the bootstrapping tool for the resolved recipe.
///
/// A non-zero exit of the tool is returned as a normal [`ExecutionResult`]
/// so its status can be propagated unchanged.
pub fn run_apply(opts: &cli::ApplyArgs, executor: &dyn CommandExecutor) -> Result<ExecutionResult> {
    let params = load_params(&opts.common)?;
    let plan = BootstrapPlan::new(&params);
    let spec = plan.command_spec();

    info!("bootstrapping {} ({}) into {}", plan.suite, params.arch, plan.root_dir);
    let result = executor
        .execute(&spec)
        .with_context(|| format!("failed to execute {}", spec.command))?;

    if !result.success() {
        warn!("{} exited with non-zero status: {}", spec.command, result.exit_code());
    } else if result.status.is_some() {
        info!("bootstrap completed successfully");
    }

    Ok(result)
}

/// Resolves the recipe and returns the planned invocation without running it.
pub fn run_validate(opts: &cli::ValidateArgs) -> Result<BootstrapPlan> {
    let params = load_params(&opts.common)?;
    let plan = BootstrapPlan::new(&params);
    info!("validation successful: {}", plan.command_spec().display());
    Ok(plan)
}
