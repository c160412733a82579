//! rpncalc - an interactive RPN calculator
//!
//! # Overview
//!
//! rpncalc evaluates whitespace-separated postfix expressions against a
//! persistent operand stack. Numbers push themselves; operators pop their
//! operands and push the result.
//!
//! ```text
//! 5 3 +           # Stack: [8]          Result: 8
//! 2 *             # Stack: [16]         Result: 16
//! 16 sqrt         # push 16, take root  Result: 4
//! 90 sin          # degrees in          Result: 1
//! 10 fib          # F(10)               Result: 55
//! ```
//!
//! Two whole-line commands act on the stack directly: `clear` empties it and
//! `show` displays it. Every other successfully evaluated line is recorded
//! in the calculation history.
//!
//! Errors (unknown tokens, missing operands, domain violations) abort the
//! rest of their line only; the stack keeps whatever earlier tokens of that
//! line already did to it.
//!
//! # Example
//!
//! ```rust
//! use rpncalc::{Evaluator, LineOutcome};
//!
//! let mut calc = Evaluator::new();
//! let outcome = calc.eval_line("5 3 + 2 *").unwrap();
//! assert_eq!(outcome, LineOutcome::Value(16.0));
//! ```

pub mod eval;
pub mod lexer;

// Re-export commonly used items
pub use eval::{format_number, EvalError, Evaluator, LineOutcome};
pub use lexer::{lex, Op, Token};

/// Convenience function to evaluate a single line on a fresh calculator
pub fn eval(input: &str) -> Result<Option<f64>, EvalError> {
    let mut evaluator = Evaluator::new();
    match evaluator.eval_line(input)? {
        LineOutcome::Value(v) => Ok(Some(v)),
        _ => Ok(None),
    }
}
