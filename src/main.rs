//! rpncalc - an interactive stack-based RPN calculator
//!
//! Usage:
//!   rpncalc             Start the interactive calculator
//!   rpncalc -c "expr"   Evaluate a single expression

mod cli;
mod repl;

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }
    if let Some(command) = cli.command {
        return cli::run_command(&command);
    }

    match repl::run_repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
