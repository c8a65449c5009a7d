//! Tests for shell completion functionality.

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use debstrap_step::cli::{Cli, Commands};

/// Test parsing the completions command for all supported shells.
#[test]
fn test_completions_command_parsing() -> Result<()> {
    let shells = [
        ("bash", Shell::Bash),
        ("zsh", Shell::Zsh),
        ("fish", Shell::Fish),
        ("powershell", Shell::PowerShell),
        ("elvish", Shell::Elvish),
    ];

    for (shell_str, expected_shell) in shells {
        let args = Cli::parse_from(["debstrap-step", "completions", shell_str]);
        match args.command {
            Commands::Completions(opts) => {
                assert_eq!(opts.shell, expected_shell, "Mismatched shell for '{}'", shell_str);
            }
            _ => panic!("Expected Completions command for shell '{}'", shell_str),
        }
    }

    Ok(())
}

/// Test that completions for various shells contain the subcommands and flags.
#[test]
fn test_completion_contents() -> Result<()> {
    let mut cmd = Cli::command();

    let test_cases = [
        (Shell::Bash, &["debstrap-step", "apply", "validate", "--snapshot"] as &[_]),
        (Shell::Zsh, &["#compdef debstrap-step", "apply", "validate"]),
        (Shell::Fish, &["debstrap-step", "apply", "completions", "root-dir"]),
    ];

    for (shell, patterns) in test_cases {
        let mut buffer = Vec::new();
        generate(shell, &mut cmd, "debstrap-step", &mut buffer);
        let output = String::from_utf8(buffer)?;

        for pattern in patterns {
            assert!(
                output.contains(pattern),
                "Pattern '{}' not found in {:?} completions",
                pattern,
                shell
            );
        }
    }

    Ok(())
}

/// Test that generation produces output for every supported shell.
#[test]
fn test_completions_generation() {
    let mut cmd = Cli::command();
    for shell in Shell::value_variants() {
        let mut buffer = Vec::new();
        generate(*shell, &mut cmd, "debstrap-step", &mut buffer);
        assert!(!buffer.is_empty(), "Generated completion for {:?} was empty", shell);
    }
}

/// Test that invalid shell names are rejected.
#[test]
fn test_invalid_shell_rejected() {
    let result = Cli::try_parse_from(["debstrap-step", "completions", "invalid-shell"]);
    assert!(result.is_err(), "Expected parsing to fail for invalid shell");
}
