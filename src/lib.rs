//! Reckon: a pocket calculator core
//!
//! Reckon builds an arithmetic expression one keystroke at a time,
//! evaluates it without ever interpreting anything but arithmetic, formats
//! the result for a small display, and keeps a short rolling history.
//! It is the logic layer of a calculator widget; rendering and raw key
//! events belong to the front end.
//!
//! # Core Concepts
//!
//! - **Expression buffer**: display-form text plus an open-paren counter,
//!   guarded by append rules
//! - **Evaluator**: glyph translation, auto-balancing, an allow-list check
//!   and a recursive-descent parser
//! - **Formatter**: integer, trimmed decimal or scientific display text
//! - **History**: a bounded, newest-first log persisted as JSON in a
//!   key-value store
//!
//! # Example
//!
//! ```rust
//! use reckon::calculator::{Calculator, Input};
//! use reckon::history::MemoryStore;
//! use reckon::keymap::map_key;
//!
//! let mut calculator = Calculator::new(MemoryStore::new());
//! for key in ["(", "1", "+", "2", ")", "*", "4", "Enter"] {
//!     if let Some(input) = map_key(key) {
//!         calculator.apply(input);
//!     }
//! }
//!
//! assert_eq!(calculator.display().result, "12");
//! assert_eq!(calculator.history()[0].expression, "(1+2)×4");
//! ```

pub mod calculator;
pub mod core;
pub mod eval;
pub mod history;
pub mod keymap;

// Re-export commonly used types
pub use calculator::{Calculator, CalculatorBuilder, Display, Evaluation, Input, Outcome};
pub use crate::core::{format_result, ExpressionBuffer, Operator, Token};
pub use eval::{evaluate, EvalError};
pub use history::{HistoryEntry, HistoryStore, KeyValueStore};
