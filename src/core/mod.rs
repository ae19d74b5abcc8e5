//! Core calculator input machine.
//!
//! This module contains the pure functional core:
//! - Button events and validated digits
//! - The `CalculatorState` entity
//! - The total `submit` transition function
//! - Canonical display rendering and parsing
//! - Machine-checkable state invariants
//! - Immutable submit logging
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod event;
mod history;
mod invariant;
mod machine;
mod render;
mod state;

pub use event::{Digit, InputEvent, InvalidDigit, Operator};
pub use history::{SubmitRecord, TransitionLog};
pub use invariant::{verify, Violation};
pub use machine::submit;
pub use render::{parse_display, render, ERROR_DISPLAY, INITIAL_DISPLAY};
pub use state::CalculatorState;
