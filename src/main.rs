use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use debstrap_step::cli::{self, Cli, Commands};
use debstrap_step::executor::RealCommandExecutor;
use tracing::error;

fn run(args: Cli) -> Result<i32> {
    match &args.command {
        Commands::Apply(opts) => {
            debstrap_step::init_logging(opts.common.log_level)?;
            let executor = RealCommandExecutor {
                dry_run: opts.dry_run,
            };
            let result = debstrap_step::run_apply(opts, &executor)?;
            Ok(result.exit_code())
        }
        Commands::Validate(opts) => {
            debstrap_step::init_logging(opts.common.log_level)?;
            debstrap_step::run_validate(opts)?;
            Ok(0)
        }
        Commands::Completions(opts) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opts.shell, &mut cmd, name, &mut io::stdout());
            Ok(0)
        }
    }
}

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        // exit codes outside 0..=255 cannot be represented; report plain failure
        Ok(code) => u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
