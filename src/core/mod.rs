//! Pure core of the calculator.
//!
//! This module contains the side-effect free pieces:
//! - Input tokens and operator glyphs
//! - The expression buffer and its append rules
//! - Result formatting
//! - Display states
//!
//! Evaluation, persistence and the session shell are built on top of it.

mod buffer;
mod format;
mod state;
mod token;

pub use buffer::{numeric_run, AppendOutcome, ExpressionBuffer};
pub use format::{format_result, MAX_DISPLAY_LEN, MAX_FRACTION_DIGITS, SCIENTIFIC_DIGITS};
pub use state::DisplayState;
pub use token::{is_operator, Operator, Token};
