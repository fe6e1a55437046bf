//! Keypad input vocabulary.
//!
//! Raw input events arrive as action tokens (the keypad's `data-action`
//! names) or keyboard key names. This module turns both into `Command`s.

use crate::core::{BinaryOperator, EntryToken, ScientificKey};
use std::str::FromStr;
use thiserror::Error;

crate::token_enum! {
    /// Memory register key.
    pub enum MemoryAction {
        Clear => "mc",
        Recall => "mr",
        Add => "mPlus",
        Subtract => "mMinus",
    }
}

/// One keypad press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Digit(EntryToken),
    Operator(BinaryOperator),
    Equals,
    Clear,
    Backspace,
    Memory(MemoryAction),
    Scientific(ScientificKey),
}

/// Errors that can occur when parsing an action token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty action token")]
    Empty,

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        if action.is_empty() {
            return Err(CommandError::Empty);
        }
        let command = match action {
            "equals" => Self::Equals,
            "clear" => Self::Clear,
            "backspace" => Self::Backspace,
            _ => {
                // `pow` is both a scientific key and an operator token; the
                // scientific pad is the only place that sends it.
                if let Some(key) = ScientificKey::from_token(action) {
                    Self::Scientific(key)
                } else if let Some(token) = EntryToken::from_token(action) {
                    Self::Digit(token)
                } else if let Some(operator) = BinaryOperator::from_token(action) {
                    Self::Operator(operator)
                } else if let Some(memory) = MemoryAction::from_token(action) {
                    Self::Memory(memory)
                } else {
                    return Err(CommandError::UnknownAction(action.to_string()));
                }
            }
        };
        Ok(command)
    }
}

impl Command {
    /// Map a keyboard key name to a command.
    ///
    /// # Example
    ///
    /// ```
    /// use calcpad::core::BinaryOperator;
    /// use calcpad::engine::Command;
    ///
    /// assert_eq!(Command::from_key("*"), Some(Command::Operator(BinaryOperator::Multiply)));
    /// assert_eq!(Command::from_key("Enter"), Some(Command::Equals));
    /// assert_eq!(Command::from_key("F5"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key {
            "+" => Self::Operator(BinaryOperator::Add),
            "-" => Self::Operator(BinaryOperator::Subtract),
            "*" | "x" => Self::Operator(BinaryOperator::Multiply),
            "/" => Self::Operator(BinaryOperator::Divide),
            "^" => Self::Operator(BinaryOperator::Power),
            "Enter" | "=" => Self::Equals,
            "Escape" | "Delete" => Self::Clear,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Digit(EntryToken::from_char(c)?),
                    _ => return None,
                }
            }
        };
        Some(command)
    }
}
