//! Calculator state record.
//!
//! `CalculatorState` is plain data. The engine is its only writer; every
//! method here is a pure query.

use super::entry::Entry;
use super::history::HistoryLog;
use super::number::as_text;
use super::operator::BinaryOperator;
use serde::{Deserialize, Serialize};

/// Where the calculator is in composing an expression.
///
/// Derived from the state record, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputPhase {
    /// Nothing pending; the next digit starts a fresh entry.
    Ready,
    /// Composing the first operand.
    Entering,
    /// Operator armed; the second operand has not been started.
    OperatorArmed,
    /// Composing the second operand.
    SecondOperand,
}

impl InputPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::OperatorArmed => "OperatorArmed",
            Self::SecondOperand => "SecondOperand",
        }
    }

    /// Whether `evaluate` would compute something in this phase.
    pub fn can_evaluate(&self) -> bool {
        matches!(self, Self::SecondOperand)
    }
}

/// All arithmetic state of one calculator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub entry: Entry,
    pub pending_operand: Option<Entry>,
    pub pending_operator: Option<BinaryOperator>,
    pub awaiting_new_entry: bool,
    #[serde(with = "as_text")]
    pub memory: f64,
    pub history: HistoryLog,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(HistoryLog::new())
    }
}

impl CalculatorState {
    /// Initial state around an empty `history`.
    pub fn new(history: HistoryLog) -> Self {
        Self {
            entry: Entry::zero(),
            pending_operand: None,
            pending_operator: None,
            awaiting_new_entry: true,
            memory: 0.0,
            history,
        }
    }

    pub fn phase(&self) -> InputPhase {
        match (self.pending_operator.is_some(), self.awaiting_new_entry) {
            (false, true) => InputPhase::Ready,
            (false, false) => InputPhase::Entering,
            (true, true) => InputPhase::OperatorArmed,
            (true, false) => InputPhase::SecondOperand,
        }
    }

    /// Operand text shown for the pending operation, empty when none.
    pub fn pending_operand_text(&self) -> &str {
        self.pending_operand.as_ref().map_or("", Entry::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_reset_values() {
        let state = CalculatorState::default();
        assert_eq!(state.entry.as_str(), "0");
        assert!(state.pending_operand.is_none());
        assert!(state.pending_operator.is_none());
        assert!(state.awaiting_new_entry);
        assert_eq!(state.memory, 0.0);
        assert!(state.history.is_empty());
        assert_eq!(state.pending_operand_text(), "");
    }

    #[test]
    fn phase_follows_operator_and_flag() {
        let mut state = CalculatorState::default();
        assert_eq!(state.phase(), InputPhase::Ready);

        state.awaiting_new_entry = false;
        assert_eq!(state.phase(), InputPhase::Entering);

        state.pending_operator = Some(BinaryOperator::Add);
        state.awaiting_new_entry = true;
        assert_eq!(state.phase(), InputPhase::OperatorArmed);

        state.awaiting_new_entry = false;
        assert_eq!(state.phase(), InputPhase::SecondOperand);
    }

    #[test]
    fn only_second_operand_can_evaluate() {
        assert!(!InputPhase::Ready.can_evaluate());
        assert!(!InputPhase::Entering.can_evaluate());
        assert!(!InputPhase::OperatorArmed.can_evaluate());
        assert!(InputPhase::SecondOperand.can_evaluate());
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(InputPhase::Ready.name(), "Ready");
        assert_eq!(InputPhase::SecondOperand.name(), "SecondOperand");
    }

    #[test]
    fn state_serializes_to_json() {
        let state = CalculatorState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["entry"], "0");
        assert_eq!(json["awaiting_new_entry"], true);
        assert!(json["pending_operator"].is_null());
        assert_eq!(json["memory"], "0");
    }

    #[test]
    fn infinite_memory_round_trips() {
        let state = CalculatorState {
            memory: f64::INFINITY,
            ..CalculatorState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.memory, f64::INFINITY);
    }
}
