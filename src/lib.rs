//! Calcpad: a keypad calculator engine
//!
//! Calcpad turns keypad presses into a running arithmetic expression,
//! evaluates it with ordinary `f64` semantics, and produces the two strings
//! a UI shows: the current entry and a short history of results.
//!
//! # Core Concepts
//!
//! - **Entry**: the text being typed, edited by digits and backspace
//! - **Pending operator**: a binary operator waiting for its second operand
//! - **History**: bounded, newest-first log of completed computations
//! - **Memory**: a single register that survives clears
//!
//! Invalid arithmetic never fails: division by zero, `sqrt(-1)` and the
//! like show up as `Infinity` or `NaN` on the display.
//!
//! # Example
//!
//! ```rust
//! use calcpad::engine::Session;
//!
//! let mut session = Session::default();
//! for action in ["3", "add", "4", "add", "5", "equals"] {
//!     session.handle(action).unwrap();
//! }
//!
//! let frame = session.frame();
//! assert_eq!(frame.primary, "12");
//! assert_eq!(frame.history, "7 + 5 = 12\n3 + 4 = 7");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use crate::core::{BinaryOperator, EntryToken, ScientificKey, UnaryFunction};
pub use engine::{Calculator, Command, CommandError, DisplayFrame, Session};
