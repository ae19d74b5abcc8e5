//! Tenkey: a pure functional input state machine for calculator-style
//! interfaces.
//!
//! Tenkey follows the "pure core, imperative shell" philosophy. The core
//! transition function is a total pure function from `(state, event)` to the
//! next state: it never panics, never returns an error, and handles every
//! button press in every reachable state. A thin [`Session`] shell wraps it
//! for UI event loops, and checkpoints make sessions resumable.
//!
//! # Core Concepts
//!
//! - **Events**: one [`InputEvent`](core::InputEvent) per button press
//! - **State**: one [`CalculatorState`](core::CalculatorState) holding the
//!   display, the pending operation, and input mode
//! - **Totality**: arithmetic failures degrade to the `"Error"` display,
//!   from which digit input recovers
//! - **Log**: an immutable record of every submit for audit and replay
//!
//! # Example
//!
//! ```rust
//! use tenkey::core::{submit, CalculatorState, InputEvent, Operator};
//! use tenkey::events;
//!
//! let mut state = CalculatorState::new();
//! for event in events!["7", "+", "×", "2", "="] {
//!     state = submit(&state, event);
//! }
//! // The second operator replaced the first: 7 × 2.
//! assert_eq!(state.display(), "14");
//! ```

pub mod checkpoint;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{submit, CalculatorState, Digit, InputEvent, Operator};
pub use session::Session;
