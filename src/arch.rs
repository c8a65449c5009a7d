//! Target architecture resolution.
//!
//! Recipes name the target CPU with the image pipeline's own tokens; the
//! bootstrapping tool expects Debian port names. The translation is a closed
//! table, and anything outside it is rejected before any command is built.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::StepError;

/// Supported target architectures, as named by build recipes.
///
/// Parsing is exact and case-sensitive: `"amd64"` is accepted, `"AMD64"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Architecture {
    /// 64-bit x86
    Amd64,
    /// 64-bit ARM
    Arm64,
    /// 32-bit ARMv7 with hardware floating point
    Armv7,
    /// 32-bit ARM, soft-float EABI
    Arm,
}

/// Architecture names understood by the Debian bootstrapping tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DebianArch {
    Amd64,
    Arm64,
    Armhf,
    Armel,
}

impl Architecture {
    /// Returns the Debian port name for this architecture.
    pub fn debian_arch(self) -> DebianArch {
        match self {
            Architecture::Amd64 => DebianArch::Amd64,
            Architecture::Arm64 => DebianArch::Arm64,
            Architecture::Armv7 => DebianArch::Armhf,
            Architecture::Arm => DebianArch::Armel,
        }
    }

    /// Parses a recipe architecture token.
    pub fn parse(arch: &str) -> Result<Self, StepError> {
        Architecture::from_str(arch)
            .map_err(|_| StepError::UnsupportedArchitecture(arch.to_string()))
    }
}

/// Resolves a recipe architecture token to the bootstrapping tool's name.
///
/// # Errors
/// Returns [`StepError::UnsupportedArchitecture`] carrying the offending
/// value when `arch` is not one of `amd64`, `arm64`, `armv7` or `arm`.
pub fn resolve(arch: &str) -> Result<DebianArch, StepError> {
    Architecture::parse(arch).map(Architecture::debian_arch)
}
