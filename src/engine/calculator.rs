//! Calculator engine that owns the arithmetic state.

use crate::builder::CalculatorConfig;
use crate::core::{
    BinaryOperator, CalculatorState, Entry, EntryToken, Guard, HistoryEntry, HistoryLog,
    HistoryRecord, InputPhase, ScientificKey, UnaryFunction,
};
use crate::engine::command::{Command, MemoryAction};
use crate::engine::session::DisplayFrame;
use tracing::{debug, trace};

/// Keypad calculator.
///
/// Each method corresponds to one class of button. None of them fail:
/// invalid arithmetic shows up as `NaN` or `Infinity` in the entry.
///
/// # Example
///
/// ```
/// use calcpad::core::{BinaryOperator, EntryToken};
/// use calcpad::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.enter_digit_or_decimal(EntryToken::Three);
/// calc.select_operator(BinaryOperator::Add);
/// calc.enter_digit_or_decimal(EntryToken::Four);
/// calc.evaluate();
///
/// assert_eq!(calc.display(), "7");
/// assert_eq!(calc.history_text(), "3 + 4 = 7");
/// ```
#[derive(Debug)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    evaluate_guard: Guard,
    new_entry_guard: Guard,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default config.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(HistoryLog::with_capacity(config.history_capacity)),
            config,
            evaluate_guard: Guard::can_evaluate(),
            new_entry_guard: Guard::starts_new_entry(),
        }
    }

    /// Get the state record (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Text for the primary display.
    pub fn display(&self) -> &str {
        self.state.entry.as_str()
    }

    /// History lines, newest first, joined by newlines.
    pub fn history_text(&self) -> String {
        self.state.history.render()
    }

    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    pub fn phase(&self) -> InputPhase {
        self.state.phase()
    }

    /// Most recent history entry, if any computation has been logged.
    pub fn last_computation(&self) -> Option<&HistoryEntry> {
        self.state.history.latest()
    }

    /// Snapshot of both display strings.
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            primary: self.display().to_string(),
            history: self.history_text(),
        }
    }

    /// Type a digit or decimal point.
    ///
    /// Starts a fresh entry when one is expected, otherwise appends until
    /// the configured maximum length. Extra input is ignored.
    pub fn enter_digit_or_decimal(&mut self, token: EntryToken) {
        if self.new_entry_guard.check(&self.state) {
            self.state.entry = Entry::from_token(token);
            self.state.awaiting_new_entry = false;
        } else if !self.state.entry.push(token, self.config.max_entry_len) {
            trace!(entry = %self.state.entry, "entry full, input ignored");
            return;
        }
        trace!(entry = %self.state.entry, "entry edited");
    }

    /// Arm a binary operator, evaluating any completed pending operation
    /// first so that `3 + 4 +` continues from `7`.
    pub fn select_operator(&mut self, operator: BinaryOperator) {
        if self.evaluate_guard.check(&self.state) {
            self.evaluate();
        }
        self.state.pending_operand = Some(self.state.entry.clone());
        self.state.pending_operator = Some(operator);
        self.state.awaiting_new_entry = true;
        trace!(operand = %self.state.entry, operator = %operator, "operator armed");
    }

    /// Apply the pending operator to the pending operand and the entry.
    ///
    /// Does nothing and returns `None` unless an operator is pending and a
    /// second operand has been started.
    pub fn evaluate(&mut self) -> Option<f64> {
        if !self.evaluate_guard.check(&self.state) {
            return None;
        }
        let operator = self.state.pending_operator.take()?;
        let lhs = self
            .state
            .pending_operand
            .take()
            .map_or(f64::NAN, |operand| operand.value());
        let rhs = self.state.entry.value();
        let result = operator.apply(lhs, rhs);

        let record = HistoryRecord::Binary {
            lhs,
            operator,
            rhs,
            result,
        };
        debug!(lhs, rhs, result, operator = %operator, "evaluate");

        self.state.history = self.state.history.record(record);
        self.state.entry = Entry::from_value(result);
        self.state.awaiting_new_entry = true;
        Some(result)
    }

    /// Reset the entry and any pending operation.
    /// Memory and history are kept.
    pub fn clear_all(&mut self) {
        self.state.entry = Entry::zero();
        self.state.pending_operand = None;
        self.state.pending_operator = None;
        self.state.awaiting_new_entry = true;
        trace!("cleared");
    }

    /// Drop the last typed character, resetting to `"0"` when one remains.
    pub fn backspace(&mut self) {
        if !self.state.entry.pop() {
            self.state.entry = Entry::zero();
            self.state.awaiting_new_entry = true;
        }
        trace!(entry = %self.state.entry, "backspace");
    }

    pub fn memory_clear(&mut self) {
        self.state.memory = 0.0;
        debug!(memory = self.state.memory, "memory cleared");
    }

    /// Copy the memory register into the entry.
    pub fn memory_recall(&mut self) {
        self.state.entry = Entry::from_value(self.state.memory);
        self.state.awaiting_new_entry = true;
        debug!(memory = self.state.memory, "memory recalled");
    }

    pub fn memory_add(&mut self) {
        self.state.memory += self.state.entry.value();
        debug!(memory = self.state.memory, "memory add");
    }

    pub fn memory_subtract(&mut self) {
        self.state.memory -= self.state.entry.value();
        debug!(memory = self.state.memory, "memory subtract");
    }

    /// Press a key on the scientific pad.
    ///
    /// Unary functions replace the entry with their result, log it, and
    /// return it. The pending operator is left alone. `pow` arms the power
    /// operator like [`select_operator`](Self::select_operator) and returns
    /// `None`.
    pub fn apply_unary_function(&mut self, key: impl Into<ScientificKey>) -> Option<f64> {
        match key.into() {
            ScientificKey::Power => {
                self.select_operator(BinaryOperator::Power);
                None
            }
            ScientificKey::Unary(function) => Some(self.apply_function(function)),
        }
    }

    fn apply_function(&mut self, function: UnaryFunction) -> f64 {
        let operand = self.state.entry.value();
        let result = function.apply(operand, self.config.angle_unit);
        debug!(operand, result, function = %function, "unary function");

        self.state.entry = Entry::from_value(result);
        self.state.history = self.state.history.record(HistoryRecord::Unary {
            function,
            operand,
            result,
        });
        result
    }

    /// Route a parsed keypad command to its operation.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Digit(token) => self.enter_digit_or_decimal(token),
            Command::Operator(operator) => self.select_operator(operator),
            Command::Equals => {
                self.evaluate();
            }
            Command::Clear => self.clear_all(),
            Command::Backspace => self.backspace(),
            Command::Memory(action) => match action {
                MemoryAction::Clear => self.memory_clear(),
                MemoryAction::Recall => self.memory_recall(),
                MemoryAction::Add => self.memory_add(),
                MemoryAction::Subtract => self.memory_subtract(),
            },
            Command::Scientific(key) => {
                self.apply_unary_function(key);
            }
        }
    }
}
