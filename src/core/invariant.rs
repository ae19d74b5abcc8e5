//! Structural invariants of the calculator state.
//!
//! The transition function upholds these by construction; `verify` makes
//! them machine-checkable so checkpoint loading and property tests can
//! assert that a state is well-formed.

use super::render::{parse_display, ERROR_DISPLAY};
use super::state::CalculatorState;
use thiserror::Error;

/// A broken state invariant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    /// The display holds no characters at all.
    #[error("display is empty")]
    EmptyDisplay,

    /// The display holds more than one decimal point.
    #[error("display contains more than one decimal point: {display:?}")]
    MultipleDecimalPoints { display: String },

    /// The display is neither a finite number nor the error sentinel.
    #[error("display is neither numeric nor the error sentinel: {display:?}")]
    UnreadableDisplay { display: String },

    /// An operator is pending without a captured left operand.
    #[error("pending operator without a left operand")]
    DanglingOperator,
}

/// Check every invariant, returning the first violation found.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{verify, CalculatorState};
///
/// assert!(verify(&CalculatorState::new()).is_ok());
/// ```
pub fn verify(state: &CalculatorState) -> Result<(), Violation> {
    let display = state.display();

    if display.is_empty() {
        return Err(Violation::EmptyDisplay);
    }

    if display.chars().filter(|c| *c == '.').count() > 1 {
        return Err(Violation::MultipleDecimalPoints {
            display: display.to_string(),
        });
    }

    if display != ERROR_DISPLAY && parse_display(display).is_none() {
        return Err(Violation::UnreadableDisplay {
            display: display.to_string(),
        });
    }

    if state.pending_operator().is_some() && state.accumulator().is_none() {
        return Err(Violation::DanglingOperator);
    }

    Ok(())
}
