//! Evaluation error types.

use thiserror::Error;

/// Why an expression could not be read as arithmetic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// Characters outside the arithmetic allow-list, in order of first appearance
    #[error("disallowed characters {0:?}")]
    DisallowedCharacters(Vec<char>),

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    /// Groups and signs nested deeper than the parser accepts
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Errors that can occur when evaluating an expression.
///
/// Both variants end up as the same error display; they are kept apart
/// for logging and tests.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] SyntaxError),

    /// The arithmetic ran but produced NaN or an infinity
    #[error("Invalid result: {value}")]
    InvalidResult { value: f64 },
}
