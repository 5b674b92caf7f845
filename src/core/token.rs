//! Input tokens accepted by the expression buffer.
//!
//! Tokens are the unit of user input: one button press or one mapped
//! keystroke produces exactly one token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators as they appear in the display form of an expression.
///
/// The display form uses the visual glyphs `×` and `÷`; the evaluator
/// translates them to `*` and `/` before computing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in button order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The display glyph for this operator.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse a display glyph or its ASCII equivalent.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single unit of user input.
///
/// # Example
///
/// ```rust
/// use reckon::core::{ExpressionBuffer, Operator, Token};
///
/// let mut buffer = ExpressionBuffer::new();
/// buffer.append(Token::Digit(7));
/// buffer.append(Token::Operator(Operator::Multiply));
/// buffer.append(Token::Digit(6));
///
/// assert_eq!(buffer.text(), "7×6");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit in `0..=9`.
    Digit(u8),
    Operator(Operator),
    /// The decimal point.
    Point,
    /// The per-number percent marker.
    Percent,
    /// Paren toggle: opens or closes a group depending on context.
    Paren,
}

impl Token {
    /// Build a digit token, rejecting anything outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// The character this token contributes to the display form.
    ///
    /// Returns `None` for the paren toggle, whose character depends on
    /// the buffer contents.
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Operator(op) => Some(op.glyph()),
            Self::Point => Some('.'),
            Self::Percent => Some('%'),
            Self::Paren => None,
        }
    }
}

/// Check whether a display character is a binary operator.
///
/// Both glyph and ASCII forms count, so buffers seeded from external
/// text are judged the same way as buffers built from tokens.
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '×' | '÷' | '*' | '/')
}
