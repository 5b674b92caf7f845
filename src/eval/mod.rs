//! Evaluation of display-form expressions.
//!
//! The pipeline is:
//! 1. Translate display glyphs to computable operators (`×` → `*`,
//!    `÷` → `/`, `%` → `/100`).
//! 2. Close every unmatched `(`.
//! 3. Check the result against the arithmetic allow-list, collecting
//!    every offending character.
//! 4. Parse and compute with standard precedence.
//! 5. Reject NaN and infinite results.
//!
//! Nothing beyond numeric literals, `+ - * /` and parentheses is ever
//! interpreted.

mod error;
mod parser;

pub use error::{EvalError, SyntaxError};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Evaluate a display-form expression with `open_parens` groups left open.
///
/// # Example
///
/// ```rust
/// use reckon::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate("2+2", 0).unwrap(), 4.0);
/// assert_eq!(evaluate("(1+1", 1).unwrap(), 2.0);
/// assert_eq!(evaluate("50%×4", 0).unwrap(), 2.0);
/// assert!(matches!(evaluate("2÷0", 0), Err(EvalError::InvalidResult { .. })));
/// ```
pub fn evaluate(expression: &str, open_parens: usize) -> Result<f64, EvalError> {
    let computable = to_computable(expression, open_parens);
    debug!("Evaluating '{}' as '{}'", expression, computable);

    if let Validation::Failure(rejected) = validate_characters(&computable) {
        let mut characters: Vec<char> = Vec::new();
        for c in rejected.iter() {
            if !characters.contains(c) {
                characters.push(*c);
            }
        }
        return Err(SyntaxError::DisallowedCharacters(characters).into());
    }

    let value = parser::evaluate(&computable)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::InvalidResult { value })
    }
}

/// Translate display glyphs and auto-close unmatched groups.
///
/// Percent is rewritten textually, so it divides whatever literal
/// precedes it by 100.
///
/// ```rust
/// use reckon::eval::to_computable;
///
/// assert_eq!(to_computable("3×(4÷2", 1), "3*(4/2)");
/// assert_eq!(to_computable("25%", 0), "25/100");
/// ```
pub fn to_computable(display: &str, open_parens: usize) -> String {
    let mut computable = String::with_capacity(display.len() + open_parens);
    for c in display.chars() {
        match c {
            '×' => computable.push('*'),
            '÷' => computable.push('/'),
            '%' => computable.push_str("/100"),
            other => computable.push(other),
        }
    }
    computable.extend(std::iter::repeat(')').take(open_parens));
    computable
}

/// Whether a computable-form character is on the arithmetic allow-list.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
        || c.is_whitespace()
}

/// Check every character against the allow-list, accumulating ALL
/// violations instead of stopping at the first.
pub fn validate_characters(expression: &str) -> Validation<(), NonEmptyVec<char>> {
    let checks: Vec<Validation<(), NonEmptyVec<char>>> = expression
        .chars()
        .map(|c| {
            if is_allowed(c) {
                Validation::success(())
            } else {
                Validation::fail(c)
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
