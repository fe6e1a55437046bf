//! Bounded history of completed computations.
//!
//! History is immutable: `record` returns a new log with the computation
//! added at the front and the oldest entry dropped once capacity is reached.

use super::number::{as_text, format_number};
use super::operator::{BinaryOperator, UnaryFunction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of computations kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// One completed computation.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{BinaryOperator, HistoryRecord};
///
/// let record = HistoryRecord::Binary {
///     lhs: 3.0,
///     operator: BinaryOperator::Add,
///     rhs: 4.0,
///     result: 7.0,
/// };
/// assert_eq!(record.to_string(), "3 + 4 = 7");
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HistoryRecord {
    Binary {
        #[serde(with = "as_text")]
        lhs: f64,
        operator: BinaryOperator,
        #[serde(with = "as_text")]
        rhs: f64,
        #[serde(with = "as_text")]
        result: f64,
    },
    Unary {
        function: UnaryFunction,
        #[serde(with = "as_text")]
        operand: f64,
        #[serde(with = "as_text")]
        result: f64,
    },
}

impl HistoryRecord {
    pub fn result(&self) -> f64 {
        match self {
            Self::Binary { result, .. } | Self::Unary { result, .. } => *result,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary {
                lhs,
                operator,
                rhs,
                result,
            } => write!(
                f,
                "{} {} {} = {}",
                format_number(*lhs),
                operator.symbol(),
                format_number(*rhs),
                format_number(*result)
            ),
            Self::Unary {
                function,
                operand,
                result,
            } => write!(
                f,
                "{}({}) = {}",
                function.token(),
                format_number(*operand),
                format_number(*result)
            ),
        }
    }
}

/// A record together with when it was made.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub record: HistoryRecord,
    pub recorded_at: DateTime<Utc>,
}

/// Most-recent-first log holding at most `capacity` entries.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{BinaryOperator, HistoryLog, HistoryRecord};
///
/// let log = HistoryLog::with_capacity(2);
/// let log = log.record(HistoryRecord::Binary {
///     lhs: 1.0,
///     operator: BinaryOperator::Add,
///     rhs: 1.0,
///     result: 2.0,
/// });
/// let log = log.record(HistoryRecord::Binary {
///     lhs: 2.0,
///     operator: BinaryOperator::Multiply,
///     rhs: 3.0,
///     result: 6.0,
/// });
///
/// assert_eq!(log.lines(), vec!["2 × 3 = 6", "1 + 1 = 2"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a computation now, returning a new log.
    pub fn record(&self, record: HistoryRecord) -> Self {
        self.record_at(record, Utc::now())
    }

    /// Record a computation at `recorded_at`, returning a new log.
    ///
    /// The original log is left unchanged.
    pub fn record_at(&self, record: HistoryRecord, recorded_at: DateTime<Utc>) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(HistoryEntry {
            record,
            recorded_at,
        });
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Display lines, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.record.to_string()).collect()
    }

    /// Display lines joined by newlines, as shown under the entry.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(lhs: f64, rhs: f64) -> HistoryRecord {
        HistoryRecord::Binary {
            lhs,
            operator: BinaryOperator::Add,
            rhs,
            result: lhs + rhs,
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(log.latest().is_none());
        assert_eq!(log.render(), "");
    }

    #[test]
    fn record_puts_newest_first() {
        let log = HistoryLog::new().record(sum(1.0, 1.0)).record(sum(2.0, 2.0));
        assert_eq!(log.lines(), vec!["2 + 2 = 4", "1 + 1 = 2"]);
        assert_eq!(log.latest().map(|e| e.record.result()), Some(4.0));
    }

    #[test]
    fn record_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.record(sum(1.0, 2.0));
        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let mut log = HistoryLog::new();
        for i in 1..=6 {
            log = log.record(sum(i as f64, 0.0));
        }
        assert_eq!(log.len(), 5);
        assert_eq!(log.lines().first().map(String::as_str), Some("6 + 0 = 6"));
        assert!(!log.lines().contains(&"1 + 0 = 1".to_string()));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let log = HistoryLog::with_capacity(0).record(sum(1.0, 1.0));
        assert!(log.is_empty());
    }

    #[test]
    fn unary_record_uses_function_token() {
        let record = HistoryRecord::Unary {
            function: UnaryFunction::Factorial,
            operand: 5.0,
            result: 120.0,
        };
        assert_eq!(record.to_string(), "fact(5) = 120");

        let record = HistoryRecord::Unary {
            function: UnaryFunction::Sqrt,
            operand: -4.0,
            result: f64::NAN,
        };
        assert_eq!(record.to_string(), "sqrt(-4) = NaN");
    }

    #[test]
    fn binary_record_prints_sentinels() {
        let record = HistoryRecord::Binary {
            lhs: 1.0,
            operator: BinaryOperator::Divide,
            rhs: 0.0,
            result: f64::INFINITY,
        };
        assert_eq!(record.to_string(), "1 ÷ 0 = Infinity");
    }

    #[test]
    fn render_joins_lines_with_newlines() {
        let log = HistoryLog::new().record(sum(1.0, 1.0)).record(sum(2.0, 3.0));
        assert_eq!(log.render(), "2 + 3 = 5\n1 + 1 = 2");
    }

    #[test]
    fn record_at_keeps_timestamp() {
        let at = Utc::now() - chrono::Duration::seconds(30);
        let log = HistoryLog::new().record_at(sum(1.0, 1.0), at);
        assert_eq!(log.latest().map(|e| e.recorded_at), Some(at));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = HistoryLog::new().record(sum(1.0, 2.0));
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.lines(), log.lines());
        assert_eq!(deserialized.capacity(), log.capacity());
    }

    #[test]
    fn nan_and_infinity_survive_json() {
        let log = HistoryLog::new()
            .record(HistoryRecord::Binary {
                lhs: 1.0,
                operator: BinaryOperator::Divide,
                rhs: 0.0,
                result: f64::INFINITY,
            })
            .record(HistoryRecord::Unary {
                function: UnaryFunction::Sqrt,
                operand: -4.0,
                result: f64::NAN,
            });

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["entries"][0]["record"]["result"], "NaN");
        assert_eq!(json["entries"][1]["record"]["result"], "Infinity");

        let back: HistoryLog = serde_json::from_value(json).unwrap();
        assert_eq!(back.lines(), vec!["sqrt(-4) = NaN", "1 ÷ 0 = Infinity"]);
        assert!(back.latest().is_some_and(|e| e.record.result().is_nan()));
    }
}
