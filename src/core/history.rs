//! Immutable log of submitted events and the states they produced.
//!
//! The log follows functional programming principles: `record` returns a
//! new log with the entry appended, leaving the original untouched. A view
//! layer or test harness can replay or audit a whole session from it.

use super::event::InputEvent;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single `submit` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitRecord {
    /// The state before the event.
    pub from: CalculatorState,
    /// The button press that was submitted.
    pub event: InputEvent,
    /// The state after the event.
    pub to: CalculatorState,
    /// When the event was submitted.
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of submits.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tenkey::core::{submit, CalculatorState, InputEvent, SubmitRecord, TransitionLog};
///
/// let from = CalculatorState::new();
/// let to = submit(&from, InputEvent::Decimal);
///
/// let log = TransitionLog::new();
/// let log = log.record(SubmitRecord {
///     from,
///     event: InputEvent::Decimal,
///     to,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.display_trace(), vec!["0", "0."]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<SubmitRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    ///
    /// Pure: the existing log is not mutated.
    pub fn record(&self, record: SubmitRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in submission order.
    pub fn records(&self) -> &[SubmitRecord] {
        &self.records
    }

    /// The sequence of displays the user saw: the initial display, then
    /// the display after each event.
    pub fn display_trace(&self) -> Vec<&str> {
        let mut trace = Vec::new();
        if let Some(first) = self.records.first() {
            trace.push(first.from.display());
        }
        for record in &self.records {
            trace.push(record.to.display());
        }
        trace
    }

    /// Wall-clock time between the first and last record.
    ///
    /// `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
