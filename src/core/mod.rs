//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The state record and its derived input phase
//! - Entry text editing and number parsing/formatting
//! - Operator and function tags with their evaluation rules
//! - Guard predicates and the bounded history log
//!
//! Nothing in this module mutates shared state or performs I/O.

mod entry;
mod guard;
mod history;
mod number;
mod operator;
mod state;

pub use entry::{Entry, EntryToken, DEFAULT_MAX_ENTRY_LEN};
pub use guard::Guard;
pub use history::{HistoryEntry, HistoryLog, HistoryRecord, DEFAULT_HISTORY_CAPACITY};
pub use number::{format_number, parse_float};
pub use operator::{factorial, AngleUnit, BinaryOperator, ScientificKey, UnaryFunction};
pub use state::{CalculatorState, InputPhase};
