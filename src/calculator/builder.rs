//! Configuration and builder for calculator sessions.

use super::Calculator;
use crate::history::{KeyValueStore, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result line text shown after a failed evaluation, unless configured.
pub const DEFAULT_ERROR_TEXT: &str = "Erreur";

/// Result line text shown while the expression is empty, unless configured.
pub const DEFAULT_PLACEHOLDER: &str = "0";

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History store not specified. Call .store(store) before .build()")]
    MissingStore,

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("History key must not be empty")]
    EmptyHistoryKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Tunable settings of a calculator session.
///
/// Missing fields take their defaults when deserializing, so a host can
/// ship a partial JSON document:
///
/// ```rust
/// use reckon::calculator::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "error_text": "Error" }"#).unwrap();
/// assert_eq!(config.error_text, "Error");
/// assert_eq!(config.history_capacity, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Key the history blob is stored under
    pub history_key: String,
    /// Maximum number of calculations kept
    pub history_capacity: usize,
    /// Result line text after a failed evaluation
    pub error_text: String,
    /// Result line text while the expression is empty
    pub placeholder: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        if self.history_key.is_empty() {
            return Err(BuildError::EmptyHistoryKey);
        }
        Ok(())
    }
}

/// Builder for calculator sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use reckon::calculator::CalculatorBuilder;
/// use reckon::history::MemoryStore;
///
/// let calculator = CalculatorBuilder::new()
///     .store(MemoryStore::new())
///     .history_capacity(5)
///     .error_text("Error")
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.config().history_capacity, 5);
/// ```
pub struct CalculatorBuilder<S: KeyValueStore> {
    store: Option<S>,
    config: CalculatorConfig,
}

impl<S: KeyValueStore> CalculatorBuilder<S> {
    pub fn new() -> Self {
        Self {
            store: None,
            config: CalculatorConfig::default(),
        }
    }

    /// Set the history backend (required).
    pub fn store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace every setting at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_key(mut self, key: impl Into<String>) -> Self {
        self.config.history_key = key.into();
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn error_text(mut self, text: impl Into<String>) -> Self {
        self.config.error_text = text.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = text.into();
        self
    }

    /// Build the calculator.
    /// Returns an error if the store is missing or a setting is invalid.
    pub fn build(self) -> Result<Calculator<S>, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        self.config.validate()?;
        Ok(Calculator::from_parts(store, self.config))
    }
}

impl<S: KeyValueStore> Default for CalculatorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
