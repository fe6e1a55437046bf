//! Calculator engine and its input surface.
//!
//! This module is the "imperative shell" around the pure core:
//!
//! - **Calculator**: owns one `CalculatorState` and mutates it per button
//! - **Command**: the keypad and keyboard input vocabulary
//! - **Session**: binds one calculator to one UI context and returns the
//!   frame to render after every input

mod calculator;
mod command;
mod session;

pub use calculator::Calculator;
pub use command::{Command, CommandError, MemoryAction};
pub use session::{DisplayFrame, Session, SessionId};
