//! Common test utilities for rpncalc integration tests

pub use rpncalc::{lex, EvalError, Evaluator, LineOutcome, Op};

/// Helper to evaluate a single line on a fresh calculator and return the
/// reported value (the peeked stack top), if any
pub fn eval(input: &str) -> Result<Option<f64>, EvalError> {
    let mut calc = Evaluator::new();
    match calc.eval_line(input)? {
        LineOutcome::Value(v) => Ok(Some(v)),
        _ => Ok(None),
    }
}

/// Helper to evaluate and unwrap a reported value
#[allow(dead_code)]
pub fn eval_value(input: &str) -> f64 {
    eval(input)
        .expect("evaluation failed")
        .expect("no value reported")
}
