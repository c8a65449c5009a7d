//! Recipe parameters: loading, layering and validation.
//!
//! Parameters reach the step from three places, in increasing priority: an
//! optional YAML recipe file, the process environment and command-line
//! flags. The raw layers are merged into a [`Recipe`] and then validated
//! once into an immutable [`RecipeParams`] that the rest of the crate uses.

use std::fs::File;
use std::io::BufReader;
use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::arch::Architecture;
use crate::error::StepError;

/// Matches snapshot.debian.org timestamps such as `20240501T000000Z`.
fn snapshot_id_regex() -> &'static Regex {
    static SNAPSHOT_RE: OnceLock<Regex> = OnceLock::new();
    SNAPSHOT_RE.get_or_init(|| {
        Regex::new(r"^[0-9]{8}(T[0-9]{6}Z)?$").expect("invalid snapshot identifier regex")
    })
}

/// Raw, unvalidated recipe parameters.
///
/// Every field is optional so that partial layers (a recipe file that only
/// pins the suite, say) can be merged with [`Recipe::overlay`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Target architecture token (`amd64`, `arm64`, `armv7`, `arm`)
    #[serde(default)]
    pub arch: Option<String>,
    /// Distribution suite (e.g. "bookworm", "noble")
    #[serde(default)]
    pub suite: Option<String>,
    /// Directory the root filesystem is written to
    #[serde(default)]
    pub root_dir: Option<Utf8PathBuf>,
    /// snapshot.debian.org timestamp to bootstrap from
    #[serde(default)]
    pub snapshot: Option<String>,
    /// Custom repository base URL
    #[serde(default)]
    pub mirror: Option<String>,
}

/// Validated recipe parameters for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeParams {
    pub arch: Architecture,
    pub suite: String,
    pub root_dir: Utf8PathBuf,
    pub snapshot: Option<String>,
    pub mirror: Option<String>,
}

/// Returns `None` for absent or empty values.
///
/// Whitespace-only values are kept so validation can reject them.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn present_path(value: Option<Utf8PathBuf>) -> Option<Utf8PathBuf> {
    value.filter(|p| !p.as_str().is_empty())
}

fn reject_blank(name: &str, value: &str) -> Result<(), StepError> {
    if value.trim().is_empty() {
        return Err(StepError::Validation(format!("{} must not be blank", name)));
    }
    Ok(())
}

impl Recipe {
    /// Layers `over` on top of `self`; values present in `over` win.
    ///
    /// Empty strings in `over` are treated as unset and do not mask the
    /// underlying value.
    #[must_use]
    pub fn overlay(self, over: Recipe) -> Recipe {
        Recipe {
            arch: present(over.arch).or(self.arch),
            suite: present(over.suite).or(self.suite),
            root_dir: present_path(over.root_dir).or(self.root_dir),
            snapshot: present(over.snapshot).or(self.snapshot),
            mirror: present(over.mirror).or(self.mirror),
        }
    }

    /// Validates the merged layers into [`RecipeParams`].
    ///
    /// The architecture is checked first so an unsupported target is reported
    /// even when other parameters are missing as well.
    pub fn into_params(self) -> Result<RecipeParams, StepError> {
        let arch = present(self.arch).ok_or_else(|| {
            StepError::Validation(
                "target architecture is not set (--arch or RECIPE_TARGET_ARCH)".to_string(),
            )
        })?;
        let arch = Architecture::parse(&arch)?;

        let suite = present(self.suite).ok_or_else(|| {
            StepError::Validation("suite is not set (--suite or RECIPE_PARAM_SUITE)".to_string())
        })?;
        if suite.chars().any(char::is_whitespace) {
            return Err(StepError::Validation(format!(
                "suite must not contain whitespace: '{}'",
                suite
            )));
        }

        let root_dir = present_path(self.root_dir).ok_or_else(|| {
            StepError::Validation(
                "output directory is not set (--root-dir or RECIPE_ROOT_DIR)".to_string(),
            )
        })?;
        reject_blank("output directory", root_dir.as_str())?;

        let snapshot = present(self.snapshot);
        if let Some(ref id) = snapshot {
            reject_blank("snapshot identifier", id)?;
            if id.chars().any(char::is_whitespace) {
                return Err(StepError::Validation(format!(
                    "snapshot identifier must not contain whitespace: '{}'",
                    id
                )));
            }
            if !snapshot_id_regex().is_match(id) {
                warn!(
                    snapshot = %id,
                    "snapshot identifier does not look like a snapshot.debian.org timestamp"
                );
            }
        }

        let mirror = present(self.mirror);
        if let Some(ref mirror) = mirror {
            reject_blank("mirror URL", mirror)?;
            Url::parse(mirror).map_err(|e| {
                StepError::Validation(format!("invalid mirror URL '{}': {}", mirror, e))
            })?;
        }

        Ok(RecipeParams {
            arch,
            suite,
            root_dir,
            snapshot,
            mirror,
        })
    }
}

/// Loads a recipe layer from a YAML file.
pub fn load_recipe(path: &Utf8Path) -> Result<Recipe, StepError> {
    let file = File::open(path).map_err(|e| StepError::io(path.as_str(), e))?;
    let reader = BufReader::new(file);
    let recipe: Recipe = serde_yaml::from_reader(reader)
        .map_err(|e| StepError::Config(format!("failed to parse yaml: {}: {}", path, e)))?;
    debug!("loaded recipe from {}: {:?}", path, recipe);
    Ok(recipe)
}
