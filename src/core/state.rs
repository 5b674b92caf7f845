//! Display states of a calculator session.
//!
//! The state decides what the two display lines show; it never holds the
//! expression itself, which lives in the [`ExpressionBuffer`](super::ExpressionBuffer).

use serde::{Deserialize, Serialize};

/// Where the session is between input events.
///
/// # Example
///
/// ```rust
/// use reckon::core::DisplayState;
///
/// assert_eq!(DisplayState::Idle.name(), "Idle");
/// assert!(DisplayState::Failed.is_error());
/// assert!(!DisplayState::Evaluated.shows_expression());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum DisplayState {
    /// Nothing typed yet, or everything erased.
    #[default]
    Idle,
    /// An expression is being typed.
    Editing,
    /// The last evaluation succeeded; the buffer holds its result.
    Evaluated,
    /// The last evaluation failed; the buffer was discarded.
    Failed,
}

impl DisplayState {
    /// Get the state's name for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Editing => "Editing",
            Self::Evaluated => "Evaluated",
            Self::Failed => "Failed",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Whether the expression line mirrors the buffer.
    ///
    /// Right after an evaluation the buffer is seeded with the result,
    /// which is shown on the result line only.
    pub fn shows_expression(&self) -> bool {
        !matches!(self, Self::Evaluated)
    }
}
