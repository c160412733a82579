//! Evaluator for the RPN calculator
//!
//! The evaluator owns the operand stack and the calculation history and
//! processes one line at a time:
//! - Number tokens push their value
//! - Operator tokens pop their operands (LIFO) and push the result
//! - `clear` and `show` are handled as whole-line commands before tokenization
//!
//! Errors abort the rest of the current line but are never fatal; the caller
//! prints the message and keeps reading. Stack mutations made by earlier
//! tokens of a failed line are kept, matching the reference behavior.

mod ops;
mod sequences;

use crate::lexer::{lex, Op, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid token '{0}'")]
    InvalidToken(String),
    #[error("Not enough operands for {0}")]
    InsufficientOperands(Op),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number")]
    NegativeSqrt,
    #[error("{0} requires non-negative integer")]
    InvalidDiscreteInput(&'static str),
    #[error("No result available")]
    NoResult,
}

/// What a successfully evaluated line produced
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Top of the stack after evaluation (peeked, not popped)
    Value(f64),
    /// Evaluation succeeded but left the stack empty; nothing to report
    Empty,
    /// `show`: rendered stack contents for the caller to print
    Show(String),
    /// `clear`: the stack was emptied
    Cleared,
}

/// The calculator state: one operand stack, one history log
pub struct Evaluator {
    /// The operand stack
    pub(crate) stack: Vec<f64>,
    /// Lines that evaluated successfully, in submission order
    history: Vec<String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            stack: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Evaluate one line of input
    ///
    /// `clear` and `show` are matched against the whole line before
    /// tokenization and bypass the history log entirely. Any other line is
    /// tokenized and applied left-to-right; on success it is appended to
    /// the history and the top of the stack (if any) is reported.
    pub fn eval_line(&mut self, line: &str) -> Result<LineOutcome, EvalError> {
        if line == "clear" {
            self.stack.clear();
            return Ok(LineOutcome::Cleared);
        }
        if line == "show" {
            return Ok(LineOutcome::Show(self.render_stack()));
        }

        for token in lex(line) {
            match token {
                Token::Number(n) => self.stack.push(n),
                Token::Operator(op) => self.apply(op)?,
                Token::Invalid(raw) => return Err(EvalError::InvalidToken(raw)),
            }
        }

        self.history.push(line.to_string());

        Ok(match self.stack.last() {
            Some(&top) => LineOutcome::Value(top),
            None => LineOutcome::Empty,
        })
    }

    /// Apply an operator to the stack
    ///
    /// The arity check happens before any pop, so an operator that fails it
    /// leaves the stack untouched. Domain preconditions are checked by the
    /// individual operations, after their pops.
    fn apply(&mut self, op: Op) -> Result<(), EvalError> {
        if self.stack.len() < op.arity() {
            return Err(EvalError::InsufficientOperands(op));
        }
        match op {
            Op::Add => self.op_add(),
            Op::Sub => self.op_sub(),
            Op::Mul => self.op_mul(),
            Op::Div => self.op_div(),
            Op::Sqrt => self.op_sqrt(),
            Op::Pow => self.op_pow(),
            Op::Fib => self.op_fib(),
            Op::Pascal => self.op_pascal(),
            Op::Sin => self.op_trig(op, f64::sin),
            Op::Cos => self.op_trig(op, f64::cos),
            Op::Tan => self.op_trig(op, f64::tan),
        }
    }

    /// Pop one operand; callers have already checked the depth via `apply`
    pub(crate) fn pop_operand(&mut self, op: Op) -> Result<f64, EvalError> {
        self.stack.pop().ok_or(EvalError::InsufficientOperands(op))
    }

    /// Peek the current result without popping
    pub fn result(&self) -> Result<f64, EvalError> {
        self.stack.last().copied().ok_or(EvalError::NoResult)
    }

    pub fn has_result(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The operand stack, bottom to top
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// Empty the operand stack; the history is untouched
    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Successfully evaluated lines, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Render the stack for `show`, bottom to top
    pub fn render_stack(&self) -> String {
        if self.stack.is_empty() {
            return "Stack: empty".to_string();
        }
        let values: Vec<String> = self.stack.iter().map(|&n| format_number(n)).collect();
        format!("Stack: {}", values.join(" "))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a value for display - no trailing .0 for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
