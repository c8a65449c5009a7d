use std::io::Write;

use camino::Utf8PathBuf;
use debstrap_step::arch::Architecture;
use debstrap_step::cli::{CommonArgs, LogLevel, RecipeArgs};
use debstrap_step::config::RecipeParams;
use tempfile::NamedTempFile;

/// Environment variables the CLI reads recipe parameters from.
#[allow(dead_code)]
pub const RECIPE_ENV_VARS: &[&str] = &[
    "RECIPE_TARGET_ARCH",
    "RECIPE_PARAM_SUITE",
    "RECIPE_ROOT_DIR",
    "RECIPE_PARAM_SNAPSHOT",
    "RECIPE_PARAM_MIRROR",
];

/// Test helper to create RecipeParams with no snapshot or mirror.
#[allow(dead_code)]
pub fn params(arch: Architecture, suite: &str, root_dir: &str) -> RecipeParams {
    RecipeParams {
        arch,
        suite: suite.to_string(),
        root_dir: Utf8PathBuf::from(root_dir),
        snapshot: None,
        mirror: None,
    }
}

/// Test helper to create RecipeArgs as if given on the command line.
#[allow(dead_code)]
pub fn recipe_args(arch: &str, suite: &str, root_dir: &str) -> RecipeArgs {
    RecipeArgs {
        arch: Some(arch.to_string()),
        suite: Some(suite.to_string()),
        root_dir: Some(Utf8PathBuf::from(root_dir)),
        snapshot: None,
        mirror: None,
    }
}

/// Wraps RecipeArgs into CommonArgs with no recipe file.
#[allow(dead_code)]
pub fn common_args(recipe: RecipeArgs) -> CommonArgs {
    CommonArgs {
        file: None,
        log_level: LogLevel::Error,
        recipe,
    }
}

/// Writes YAML to a temporary recipe file.
///
/// # Panics
/// Panics if the temporary file cannot be created or written.
#[allow(dead_code)]
pub fn write_recipe(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(yaml.as_bytes())
        .expect("failed to write recipe");
    file
}

/// Path of a temporary file as a UTF-8 path.
#[allow(dead_code)]
pub fn utf8_path(file: &NamedTempFile) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("temp path should be UTF-8")
}
