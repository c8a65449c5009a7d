//! The step's exit code is the bootstrapping tool's exit code.
//!
//! Kept in its own test binary: the stub tool is written and then executed,
//! and no other test in this process may fork while it is open for writing.

mod helpers;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::Command;

use anyhow::Result;

#[test]
fn test_binary_propagates_tool_exit_status() -> Result<()> {
    let bin_dir = tempfile::tempdir()?;
    let stub = bin_dir.path().join("mmdebstrap");
    fs::write(&stub, "#!/bin/sh\nexit 7\n")?;
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))?;

    let path = match std::env::var_os("PATH") {
        Some(orig) => {
            let mut dirs = vec![bin_dir.path().to_path_buf()];
            dirs.extend(std::env::split_paths(&orig));
            std::env::join_paths(dirs)?
        }
        None => bin_dir.path().as_os_str().to_owned(),
    };

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_debstrap-step"));
    for var in helpers::RECIPE_ENV_VARS {
        cmd.env_remove(var);
    }
    let output = cmd
        .args(["apply", "--arch", "arm64", "--suite", "bookworm", "--root-dir", "/tmp/root"])
        .env("PATH", path)
        .output()?;

    assert_eq!(output.status.code(), Some(7));

    Ok(())
}
