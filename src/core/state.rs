//! The calculator state entity.
//!
//! One `CalculatorState` holds everything the machine knows: the rendered
//! display, the captured left operand, the pending operator, and whether the
//! next digit starts a fresh number. States are immutable values; the
//! transition function in this module's sibling produces new ones.

use super::event::Operator;
use super::render::{self, ERROR_DISPLAY, INITIAL_DISPLAY};
use serde::{Deserialize, Serialize};

/// Complete state of the input machine.
///
/// States are plain values: `Clone` for history tracking, `PartialEq` for
/// transition logic and tests, `Serialize`/`Deserialize` for checkpoints.
///
/// # Example
///
/// ```rust
/// use tenkey::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display(), "0");
/// assert!(state.accumulator().is_none());
/// assert!(state.pending_operator().is_none());
/// assert!(!state.awaiting_operand());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The exact characters currently rendered.
    pub(crate) display: String,
    /// Left operand of a pending binary operation.
    pub(crate) accumulator: Option<f64>,
    /// The operation waiting for its right operand.
    pub(crate) pending_operator: Option<Operator>,
    /// True immediately after an operator is accepted; the next digit
    /// starts a fresh number instead of extending the display.
    pub(crate) awaiting_operand: bool,
}

impl CalculatorState {
    /// The initial state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: String::from(INITIAL_DISPLAY),
            accumulator: None,
            pending_operator: None,
            awaiting_operand: false,
        }
    }

    /// The display string, the sole value a view layer renders.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The captured left operand, if a binary operation is in flight.
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// The operation waiting for its right operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh number.
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The numeric value of the display, when it has one.
    ///
    /// `None` while the display shows the error sentinel.
    pub fn value(&self) -> Option<f64> {
        render::parse_display(&self.display)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
