//! Command-line argument handling and one-shot execution

use rpncalc::{format_number, Evaluator, LineOutcome};
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                }
                break;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            _ => {}
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_usage() {
    println!(
        r#"rpncalc {} - An interactive stack-based RPN calculator

USAGE:
    rpncalc                 Start the interactive calculator
    rpncalc -c <expr>       Evaluate an expression and exit
    rpncalc --help          Show this help message
    rpncalc --version       Show version

EXPRESSIONS:
    Postfix, whitespace-separated: '5 3 + 2 *' evaluates to 16.
    Operators: + - * / sqrt ^ fib pascal sin cos tan
    Commands:  show clear history help q"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("rpncalc {}", VERSION);
}

/// Evaluate input line by line on a single calculator and exit on the
/// first error
pub(crate) fn run_command(input: &str) -> ExitCode {
    let mut calc = Evaluator::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match calc.eval_line(trimmed) {
            Ok(LineOutcome::Value(v)) => println!("Result: {}", format_number(v)),
            Ok(LineOutcome::Show(rendered)) => println!("{}", rendered),
            Ok(LineOutcome::Empty) | Ok(LineOutcome::Cleared) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
