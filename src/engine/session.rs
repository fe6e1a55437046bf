//! Presentation adapter for one UI session.
//!
//! A `Session` owns exactly one calculator and is handed to the UI layer
//! explicitly. Every handled input returns the `DisplayFrame` to render.

use crate::engine::calculator::Calculator;
use crate::core::format_number;
use crate::engine::command::{Command, CommandError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Identifier of a UI session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two strings the UI renders after each input.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Current entry
    pub primary: String,
    /// Newest-first history lines joined by newlines
    pub history: String,
}

/// One calculator bound to one UI context.
///
/// # Example
///
/// ```
/// use calcpad::engine::Session;
///
/// let mut session = Session::default();
/// for action in ["3", "add", "4", "equals"] {
///     session.handle(action).unwrap();
/// }
///
/// let frame = session.frame();
/// assert_eq!(frame.primary, "7");
/// assert_eq!(frame.history, "3 + 4 = 7");
/// ```
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    calculator: Calculator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Calculator::new())
    }
}

impl Session {
    pub fn new(calculator: Calculator) -> Self {
        let id = SessionId::new();
        debug!(session = %id, "session started");
        Self { id, calculator }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn frame(&self) -> DisplayFrame {
        self.calculator.frame()
    }

    /// Handle a keypad action token.
    pub fn handle(&mut self, action: &str) -> Result<DisplayFrame, CommandError> {
        let command = action.parse::<Command>().inspect_err(|err| {
            debug!(session = %self.id, action, error = %err, "rejected action");
        })?;
        Ok(self.apply(command))
    }

    /// Handle a keyboard key. Unmapped keys return `None` and change nothing.
    pub fn handle_key(&mut self, key: &str) -> Option<DisplayFrame> {
        Command::from_key(key).map(|command| self.apply(command))
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, command: Command) -> DisplayFrame {
        let logged_before = self.last_logged_at();
        self.calculator.dispatch(command);
        if let Some(entry) = self
            .calculator
            .last_computation()
            .filter(|entry| Some(entry.recorded_at) != logged_before)
        {
            debug!(
                session = %self.id,
                result = %format_number(entry.record.result()),
                recorded_at = %entry.recorded_at,
                "computation logged"
            );
        }
        let frame = self.calculator.frame();
        debug!(
            session = %self.id,
            command = ?command,
            display = %frame.primary,
            phase = self.calculator.phase().name(),
            "handled"
        );
        frame
    }

    /// When the newest history entry was recorded.
    pub fn last_logged_at(&self) -> Option<DateTime<Utc>> {
        self.calculator
            .last_computation()
            .map(|entry| entry.recorded_at)
    }

    /// Return to a cleared entry, as when the calculator screen is
    /// (re)opened. Memory and history are kept.
    pub fn reset(&mut self) -> DisplayFrame {
        self.calculator.clear_all();
        debug!(session = %self.id, "session reset");
        self.calculator.frame()
    }
}
