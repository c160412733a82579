//! Interactive read loop
//!
//! Reads one line at a time, dispatches the caller-level commands (`q`,
//! `help`, `history`), and hands everything else to the evaluator. Errors
//! are printed and the loop continues; only `q`/Ctrl-D end it.

use rpncalc::{format_number, Evaluator, LineOutcome};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut calc = Evaluator::new();

    println!("rpncalc {}", VERSION);
    println!("Enter an expression (e.g. '5 5 +'), 'help' for help, 'q' to quit.");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "q" | "quit" | "exit" => break,
                    "help" => {
                        print_help();
                        continue;
                    }
                    "history" => {
                        print_history(&calc);
                        continue;
                    }
                    _ => {}
                }

                match calc.eval_line(trimmed) {
                    Ok(LineOutcome::Value(v)) => println!("Result: {}", format_number(v)),
                    Ok(LineOutcome::Show(rendered)) => println!("{}", rendered),
                    Ok(LineOutcome::Empty) | Ok(LineOutcome::Cleared) => {}
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - discard the line, keep going
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Print the calculation history, 1-indexed, oldest first
fn print_history(calc: &Evaluator) {
    println!("Calculation History:");
    if calc.history().is_empty() {
        println!("No history available");
    } else {
        for (i, entry) in calc.history().iter().enumerate() {
            println!("{}: {}", i + 1, entry);
        }
    }
}

pub(crate) fn print_help() {
    println!("=== RPN Calculator Commands ===");
    println!("number  Push a number onto the stack (e.g. 5, 3.14)");
    println!("+       Add");
    println!("-       Subtract");
    println!("*       Multiply");
    println!("/       Divide");
    println!("sqrt    Square root");
    println!("^       Power");
    println!("fib     Fibonacci number (pops n, pushes F(n))");
    println!("pascal  Sum of row n of Pascal's triangle");
    println!("sin/cos/tan  Trigonometry (degrees)");
    println!("show    Display the current stack");
    println!("clear   Empty the stack");
    println!("history Show calculation history");
    println!("help    Show this help");
    println!("q       Quit");
    println!("===============================");
}
