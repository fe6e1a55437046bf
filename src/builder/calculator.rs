//! Configuration and builder for calculators.

use crate::builder::error::BuildError;
use crate::core::{AngleUnit, DEFAULT_HISTORY_CAPACITY, DEFAULT_MAX_ENTRY_LEN};
use crate::engine::Calculator;
use serde::{Deserialize, Serialize};

/// Tunable limits of a calculator.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Example
///
/// ```
/// use calcpad::builder::CalculatorConfig;
/// use calcpad::core::AngleUnit;
///
/// let config = CalculatorConfig::from_json(r#"{ "angle_unit": "radians" }"#).unwrap();
/// assert_eq!(config.angle_unit, AngleUnit::Radians);
/// assert_eq!(config.max_entry_len, 15);
/// assert_eq!(config.history_capacity, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters accepted while typing an entry
    pub max_entry_len: usize,
    /// Computations kept in the history log
    pub history_capacity: usize,
    /// Unit the trigonometric keys read their argument in
    pub angle_unit: AngleUnit,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            angle_unit: AngleUnit::Degrees,
        }
    }
}

impl CalculatorConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_entry_len == 0 {
            return Err(BuildError::ZeroEntryLength);
        }
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```
/// use calcpad::builder::CalculatorBuilder;
/// use calcpad::core::AngleUnit;
///
/// let calculator = CalculatorBuilder::new()
///     .max_entry_len(10)
///     .history_capacity(3)
///     .angle_unit(AngleUnit::Radians)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.display(), "0");
/// assert_eq!(calculator.config().max_entry_len, 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder holding the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Set the maximum typed entry length.
    pub fn max_entry_len(mut self, len: usize) -> Self {
        self.config.max_entry_len = len;
        self
    }

    /// Set how many computations the history keeps.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the unit for trigonometric keys.
    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        self.config.angle_unit = unit;
        self
    }

    /// Build the calculator.
    /// Returns an error if a limit is zero.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        Ok(Calculator::with_config(self.config))
    }
}
