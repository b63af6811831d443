//! dupes - Duplicate File Finder
//!
//! Entry point for the dupes CLI application.

use clap::{CommandFactory, Parser};
use dupes::{
    cli::Cli,
    error::{ConfigError, ExitCode},
    logging,
};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match dupes::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;

            match err.downcast_ref::<ConfigError>() {
                Some(ConfigError::NoRoots) => {
                    eprintln!("{}", Cli::command().render_usage());
                }
                Some(config_error) => eprintln!("error: {}", config_error),
                None => eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err),
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
