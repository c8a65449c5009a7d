//! Bootstrap invocation planning.
//!
//! Turns validated [`RecipeParams`] into the exact `mmdebstrap` command line:
//! the always-present options, the source-specific apt options and the
//! optional trailing mirror argument.

use camino::Utf8PathBuf;

use crate::arch::DebianArch;
use crate::config::RecipeParams;
use crate::executor::CommandSpec;

mod args;
pub mod mirror;

pub use args::CommandArgsBuilder;
pub use mirror::{MirrorSelection, TargetMirror};

/// The external bootstrapping tool.
pub const BOOTSTRAP_COMMAND: &str = "mmdebstrap";

/// Skips mmdebstrap's check that foreign-architecture emulation works; the
/// build environment provides it.
pub const SKIP_QEMU_CHECK: &str = "check/qemu";

/// Builds the ordered option list and target mirror for a bootstrap run.
///
/// The result depends only on its inputs. `--skip` and `--architectures`
/// are always present exactly once, followed by any apt options the
/// selected package source needs.
pub fn assemble(
    params: &RecipeParams,
    debian_arch: DebianArch,
) -> (Vec<String>, Option<TargetMirror>) {
    let selection = MirrorSelection::from_params(params);

    let mut builder = CommandArgsBuilder::new();
    builder.push_flag_value("--skip", SKIP_QEMU_CHECK);
    builder.push_flag_value("--architectures", debian_arch);
    builder.push_flag_values("--aptopt", selection.aptopts());

    (builder.into_args(), selection.target_mirror(&params.suite))
}

/// A fully resolved bootstrap invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub suite: String,
    pub root_dir: Utf8PathBuf,
    pub options: Vec<String>,
    pub target_mirror: Option<TargetMirror>,
}

impl BootstrapPlan {
    /// Maps the architecture and assembles the invocation.
    #[tracing::instrument(skip(params), fields(arch = %params.arch, suite = %params.suite))]
    pub fn new(params: &RecipeParams) -> Self {
        let debian_arch = params.arch.debian_arch();
        tracing::debug!(%debian_arch, "resolved target architecture");
        let (options, target_mirror) = assemble(params, debian_arch);

        let plan = Self {
            suite: params.suite.clone(),
            root_dir: params.root_dir.clone(),
            options,
            target_mirror,
        };
        tracing::debug!("bootstrap plan: {:?}", plan);
        plan
    }

    /// Arguments for the tool: `OPTIONS... SUITE TARGET [MIRROR]`.
    pub fn args(&self) -> Vec<String> {
        let mut builder = CommandArgsBuilder::new();
        for option in &self.options {
            builder.push_arg(option.as_str());
        }
        builder.push_arg(self.suite.as_str());
        builder.push_arg(self.root_dir.as_str());
        if let Some(ref mirror) = self.target_mirror {
            builder.push_arg(mirror.as_str());
        }
        builder.into_args()
    }

    /// The command the executor runs for this plan.
    pub fn command_spec(&self) -> CommandSpec {
        CommandSpec::new(BOOTSTRAP_COMMAND, self.args())
    }
}
