//! Guard predicates over calculator state.
//!
//! Guards are pure boolean functions the engine consults before an
//! operation mutates anything.

use super::state::CalculatorState;

/// Pure predicate that decides whether an operation may proceed.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Guard};
///
/// let state = CalculatorState::default();
///
/// // Nothing is pending, so there is nothing to evaluate.
/// assert!(!Guard::can_evaluate().check(&state));
///
/// let has_memory = Guard::new(|s: &CalculatorState| s.memory != 0.0);
/// assert!(!has_memory.check(&state));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&CalculatorState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// An operator is pending and its second operand has been started.
    ///
    /// Used both for `evaluate` and for chaining on a second operator.
    pub fn can_evaluate() -> Self {
        Self::new(|s| s.phase().can_evaluate())
    }

    /// The next digit starts a fresh entry.
    pub fn starts_new_entry() -> Self {
        Self::new(|s| s.awaiting_new_entry)
    }

    pub fn check(&self, state: &CalculatorState) -> bool {
        (self.predicate)(state)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOperator;

    fn armed(awaiting: bool) -> CalculatorState {
        CalculatorState {
            pending_operator: Some(BinaryOperator::Multiply),
            awaiting_new_entry: awaiting,
            ..CalculatorState::default()
        }
    }

    #[test]
    fn can_evaluate_requires_second_operand() {
        let guard = Guard::can_evaluate();
        assert!(!guard.check(&CalculatorState::default()));
        assert!(!guard.check(&armed(true)));
        assert!(guard.check(&armed(false)));
    }

    #[test]
    fn starts_new_entry_follows_flag() {
        let guard = Guard::starts_new_entry();
        assert!(guard.check(&CalculatorState::default()));
        assert!(!guard.check(&armed(false)));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = armed(false);
        let guard = Guard::can_evaluate();
        assert_eq!(guard.check(&state), guard.check(&state));
    }

    #[test]
    fn guard_can_use_custom_predicates() {
        let guard = Guard::new(|s: &CalculatorState| s.memory > 10.0);
        let state = CalculatorState {
            memory: 12.0,
            ..CalculatorState::default()
        };
        assert!(guard.check(&state));
    }
}
