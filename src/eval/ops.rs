//! Operator implementations
//!
//! One method per operator, in the reference pop order: binary operators pop
//! `b` (pushed second) first, then `a`, and push `a OP b`. Preconditions are
//! checked exactly where the reference checks them, so a failed precondition
//! leaves the operands it already popped off the stack.

use super::sequences::{fibonacci, pascal_row_sum};
use super::{EvalError, Evaluator};
use crate::lexer::Op;

impl Evaluator {
    pub(crate) fn op_add(&mut self) -> Result<(), EvalError> {
        let b = self.pop_operand(Op::Add)?;
        let a = self.pop_operand(Op::Add)?;
        self.stack.push(a + b);
        Ok(())
    }

    pub(crate) fn op_sub(&mut self) -> Result<(), EvalError> {
        let b = self.pop_operand(Op::Sub)?;
        let a = self.pop_operand(Op::Sub)?;
        self.stack.push(a - b);
        Ok(())
    }

    pub(crate) fn op_mul(&mut self) -> Result<(), EvalError> {
        let b = self.pop_operand(Op::Mul)?;
        let a = self.pop_operand(Op::Mul)?;
        self.stack.push(a * b);
        Ok(())
    }

    /// The zero check sits between the two pops: on failure `b` is gone and
    /// `a` is still on the stack
    pub(crate) fn op_div(&mut self) -> Result<(), EvalError> {
        let b = self.pop_operand(Op::Div)?;
        if b == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        let a = self.pop_operand(Op::Div)?;
        self.stack.push(a / b);
        Ok(())
    }

    pub(crate) fn op_sqrt(&mut self) -> Result<(), EvalError> {
        let a = self.pop_operand(Op::Sqrt)?;
        if a < 0.0 {
            return Err(EvalError::NegativeSqrt);
        }
        self.stack.push(a.sqrt());
        Ok(())
    }

    /// Real power; a negative base with a fractional exponent yields NaN
    /// rather than an error
    pub(crate) fn op_pow(&mut self) -> Result<(), EvalError> {
        let b = self.pop_operand(Op::Pow)?;
        let a = self.pop_operand(Op::Pow)?;
        self.stack.push(a.powf(b));
        Ok(())
    }

    pub(crate) fn op_fib(&mut self) -> Result<(), EvalError> {
        let n = self.pop_index(Op::Fib, "Fibonacci")?;
        self.stack.push(fibonacci(n));
        Ok(())
    }

    pub(crate) fn op_pascal(&mut self) -> Result<(), EvalError> {
        let n = self.pop_index(Op::Pascal, "Pascal triangle")?;
        self.stack.push(pascal_row_sum(n));
        Ok(())
    }

    /// Trig operand is in degrees, converted once via π/180
    pub(crate) fn op_trig(&mut self, op: Op, f: fn(f64) -> f64) -> Result<(), EvalError> {
        let a = self.pop_operand(op)?;
        self.stack.push(f(a.to_radians()));
        Ok(())
    }

    /// Pop an operand that must be a non-negative integer value
    fn pop_index(&mut self, op: Op, what: &'static str) -> Result<u64, EvalError> {
        let n = self.pop_operand(op)?;
        if n < 0.0 || n.fract() != 0.0 {
            return Err(EvalError::InvalidDiscreteInput(what));
        }
        Ok(n as u64)
    }
}
