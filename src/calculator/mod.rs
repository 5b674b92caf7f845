//! Calculator session: the command interface a front end drives.
//!
//! A [`Calculator`] owns the expression buffer, the display state and the
//! history store. Every command runs to completion synchronously:
//! input event, buffer mutation, optional evaluation, optional history
//! write, then the caller refreshes its display from [`Calculator::display`].
//!
//! # Example
//!
//! ```rust
//! use reckon::calculator::{Calculator, Evaluation, Input};
//! use reckon::core::{Operator, Token};
//! use reckon::history::MemoryStore;
//!
//! let mut calculator = Calculator::new(MemoryStore::new());
//! calculator.append(Token::Digit(2));
//! calculator.append(Token::Operator(Operator::Add));
//! calculator.append(Token::Digit(2));
//!
//! let evaluation = calculator.evaluate();
//! assert!(matches!(evaluation, Evaluation::Computed { ref result, .. } if result == "4"));
//! assert_eq!(calculator.display().result, "4");
//! assert_eq!(calculator.history().len(), 1);
//! ```

pub mod builder;

pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};

use crate::core::{format_result, AppendOutcome, DisplayState, ExpressionBuffer, Token};
use crate::eval::{self, EvalError};
use crate::history::{HistoryEntry, HistoryError, HistoryStore, KeyValueStore};
use tracing::{debug, info, warn};

/// A command from the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    Token(Token),
    Evaluate,
    Backspace,
    /// Clear the expression (the `Escape` key)
    Clear,
    ClearHistory,
}

/// What a front end should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    /// The in-progress expression line
    pub expression: String,
    /// The result line
    pub result: String,
}

/// Result of an evaluate command.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// The buffer was empty; nothing happened.
    Skipped,
    /// The expression evaluated and was recorded in the history.
    Computed { expression: String, result: String },
    /// The expression was discarded and the error text is showing.
    Failed(EvalError),
}

/// Result of applying one [`Input`].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The input was ignored; the display is unchanged.
    Unchanged,
    /// The display needs a refresh.
    Refreshed,
    Evaluated(Evaluation),
}

/// A single-user calculator session.
#[derive(Debug)]
pub struct Calculator<S: KeyValueStore> {
    buffer: ExpressionBuffer,
    state: DisplayState,
    result_text: String,
    history: HistoryStore<S>,
    config: CalculatorConfig,
}

impl<S: KeyValueStore> Calculator<S> {
    /// Create a session with the default configuration.
    pub fn new(store: S) -> Self {
        Self::from_parts(store, CalculatorConfig::default())
    }

    pub fn builder() -> CalculatorBuilder<S> {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(store: S, config: CalculatorConfig) -> Self {
        let history = HistoryStore::with_settings(
            store,
            config.history_key.clone(),
            config.history_capacity,
        );
        Self {
            buffer: ExpressionBuffer::new(),
            state: DisplayState::Idle,
            result_text: config.placeholder.clone(),
            history,
            config,
        }
    }

    /// Dispatch one command.
    pub fn apply(&mut self, input: Input) -> Outcome {
        let changed = match input {
            Input::Token(token) => self.append(token).changed(),
            Input::Backspace => self.backspace(),
            Input::Clear => self.clear(),
            Input::ClearHistory => self.clear_history().is_ok(),
            Input::Evaluate => return Outcome::Evaluated(self.evaluate()),
        };

        if changed {
            Outcome::Refreshed
        } else {
            Outcome::Unchanged
        }
    }

    /// Append a token to the expression.
    pub fn append(&mut self, token: Token) -> AppendOutcome {
        let outcome = self.buffer.append(token);
        if outcome.changed() {
            self.after_edit();
        } else {
            debug!("Ignored {:?} after '{}'", token, self.buffer.text());
        }
        outcome
    }

    /// Erase the last character. Returns `false` if there was nothing to erase.
    pub fn backspace(&mut self) -> bool {
        let erased = self.buffer.backspace();
        if erased {
            self.after_edit();
        }
        erased
    }

    /// Reset the expression and the result line. Returns `false` if the
    /// session was already idle.
    pub fn clear(&mut self) -> bool {
        let was_idle = self.buffer.is_empty() && self.state == DisplayState::Idle;
        self.buffer.clear();
        self.state = DisplayState::Idle;
        self.result_text = self.config.placeholder.clone();
        !was_idle
    }

    /// Evaluate the expression.
    ///
    /// On success the result is recorded and becomes the seed of the next
    /// expression. On failure the expression is discarded and the error
    /// text is shown. Either way the session stays usable.
    pub fn evaluate(&mut self) -> Evaluation {
        if self.buffer.is_empty() {
            return Evaluation::Skipped;
        }

        let (expression, open_parens) = self.buffer.take();
        match eval::evaluate(&expression, open_parens) {
            Ok(value) => {
                let result = format_result(value);
                info!("Evaluated '{}' = {}", expression, result);

                if let Err(e) = self.history.record(expression.clone(), result.clone()) {
                    warn!("Failed to record history: {}", e);
                }

                self.buffer = ExpressionBuffer::seeded(result.clone());
                self.state = DisplayState::Evaluated;
                self.result_text = result.clone();
                Evaluation::Computed { expression, result }
            }
            Err(error) => {
                info!("Evaluation of '{}' failed: {}", expression, error);
                self.state = DisplayState::Failed;
                self.result_text = self.config.error_text.clone();
                Evaluation::Failed(error)
            }
        }
    }

    /// Delete the stored history.
    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.history.clear().inspect_err(|e| {
            warn!("Failed to clear history: {}", e);
        })
    }

    /// Past calculations, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.get_all()
    }

    pub fn history_store(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn display(&self) -> Display {
        let expression = if self.state.shows_expression() {
            self.buffer.text().to_string()
        } else {
            String::new()
        };
        Display {
            expression,
            result: self.result_text.clone(),
        }
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn after_edit(&mut self) {
        if self.buffer.is_empty() {
            self.state = DisplayState::Idle;
            self.result_text = self.config.placeholder.clone();
        } else {
            self.state = DisplayState::Editing;
        }
    }
}
