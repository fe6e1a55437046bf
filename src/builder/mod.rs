//! Builder API for configuring calculators.
//!
//! This module provides the fluent `CalculatorBuilder`, its serde-backed
//! `CalculatorConfig`, and the `token_enum!` macro used for keypad
//! vocabularies.

pub mod calculator;
pub mod error;
pub mod macros;

pub use calculator::{CalculatorBuilder, CalculatorConfig};
pub use error::BuildError;
