//! Tokenization for the RPN calculator
//!
//! A line is split into whitespace-delimited words, and every word is
//! classified as exactly one of number, operator, or invalid. Classification
//! is total: lexing itself never fails, and invalid words are carried through
//! so the evaluator can report them with the offending text.

use nom::{
    bytes::complete::take_while1, character::complete::multispace0, combinator::map,
    sequence::preceded, IResult,
};
use std::fmt;

/// A calculator operator, identified by its symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,    // +
    Sub,    // -
    Mul,    // *
    Div,    // /
    Sqrt,   // sqrt
    Pow,    // ^
    Fib,    // fib
    Pascal, // pascal
    Sin,    // sin
    Cos,    // cos
    Tan,    // tan
}

impl Op {
    /// Look up an operator by its exact token text
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "sqrt" => Some(Op::Sqrt),
            "^" => Some(Op::Pow),
            "fib" => Some(Op::Fib),
            "pascal" => Some(Op::Pascal),
            "sin" => Some(Op::Sin),
            "cos" => Some(Op::Cos),
            "tan" => Some(Op::Tan),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Sqrt => "sqrt",
            Op::Pow => "^",
            Op::Fib => "fib",
            Op::Pascal => "pascal",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
        }
    }

    /// Number of operands the operator pops
    pub fn arity(&self) -> usize {
        match self {
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
            Op::Sqrt | Op::Fib | Op::Pascal | Op::Sin | Op::Cos | Op::Tan => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A recognized operator
    Operator(Op),
    /// Anything else, kept verbatim for error reporting
    Invalid(String),
}

/// Parse a single whitespace-delimited word
fn word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace()))(input)
}

/// Parse and classify the next token
fn token(input: &str) -> IResult<&str, Token> {
    map(word, classify)(input)
}

/// Classify a word: the whole word must parse as a float to be a number,
/// so partial parses like "5abc" fall through to invalid
fn classify(word: &str) -> Token {
    if let Ok(n) = word.parse::<f64>() {
        return Token::Number(n);
    }
    match Op::from_symbol(word) {
        Some(op) => Token::Operator(op),
        None => Token::Invalid(word.to_string()),
    }
}

/// Tokenize a complete input line
///
/// Runs of whitespace are discarded; an empty or all-whitespace line
/// produces no tokens.
pub fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while let Ok((remaining, tok)) = token(rest) {
        tokens.push(tok);
        rest = remaining;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_empty_line() {
        assert!(lex("").is_empty());
        assert!(lex("   \t  ").is_empty());
    }

    #[test]
    fn tokenize_numbers() {
        assert_eq!(
            lex("5 3.14 -2"),
            vec![
                Token::Number(5.0),
                Token::Number(3.14),
                Token::Number(-2.0),
            ]
        );
    }

    #[test]
    fn tokenize_scientific_notation() {
        assert_eq!(lex("1e3"), vec![Token::Number(1000.0)]);
    }

    #[test]
    fn tokenize_operators() {
        assert_eq!(
            lex("+ - * / ^"),
            vec![
                Token::Operator(Op::Add),
                Token::Operator(Op::Sub),
                Token::Operator(Op::Mul),
                Token::Operator(Op::Div),
                Token::Operator(Op::Pow),
            ]
        );
    }

    #[test]
    fn tokenize_named_operators() {
        assert_eq!(
            lex("sqrt fib pascal sin cos tan"),
            vec![
                Token::Operator(Op::Sqrt),
                Token::Operator(Op::Fib),
                Token::Operator(Op::Pascal),
                Token::Operator(Op::Sin),
                Token::Operator(Op::Cos),
                Token::Operator(Op::Tan),
            ]
        );
    }

    #[test]
    fn tokenize_expression() {
        assert_eq!(
            lex("5 3 +"),
            vec![
                Token::Number(5.0),
                Token::Number(3.0),
                Token::Operator(Op::Add),
            ]
        );
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(
            lex("  5\t\t3   +  "),
            vec![
                Token::Number(5.0),
                Token::Number(3.0),
                Token::Operator(Op::Add),
            ]
        );
    }

    #[test]
    fn tokenize_invalid_word() {
        assert_eq!(lex("foo"), vec![Token::Invalid("foo".to_string())]);
    }

    #[test]
    fn tokenize_partial_number_is_invalid() {
        // A word that starts numeric but has trailing garbage is not a number
        assert_eq!(lex("5abc"), vec![Token::Invalid("5abc".to_string())]);
        assert_eq!(lex("3.1.4"), vec![Token::Invalid("3.1.4".to_string())]);
    }

    #[test]
    fn arity_matches_operand_count() {
        assert_eq!(Op::Add.arity(), 2);
        assert_eq!(Op::Pow.arity(), 2);
        assert_eq!(Op::Sqrt.arity(), 1);
        assert_eq!(Op::Fib.arity(), 1);
        assert_eq!(Op::Sin.arity(), 1);
    }

    #[test]
    fn symbol_round_trips() {
        for sym in ["+", "-", "*", "/", "sqrt", "^", "fib", "pascal", "sin", "cos", "tan"] {
            let op = Op::from_symbol(sym).unwrap();
            assert_eq!(op.symbol(), sym);
        }
        assert_eq!(Op::from_symbol("mod"), None);
    }
}
