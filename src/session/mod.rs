//! Imperative shell around the pure core.
//!
//! A `Session` owns one [`CalculatorState`] and its [`TransitionLog`] for
//! the lifetime of a UI event loop. Each `submit` runs the pure transition
//! function, records the step, and stores the result; callers read the
//! display back for rendering. The session requires no locking: the
//! surrounding event loop serializes all events.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{submit, CalculatorState, InputEvent, SubmitRecord, TransitionLog};
use chrono::Utc;

/// A running calculator session.
///
/// # Example
///
/// ```rust
/// use tenkey::Session;
/// use tenkey::events;
///
/// let mut session = Session::new();
/// for event in events!["5", "+", "3", "="] {
///     session.submit(event);
/// }
/// assert_eq!(session.display(), "8");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: CalculatorState,
    log: TransitionLog,
}

impl Session {
    /// Start a session in the initial state.
    pub fn new() -> Self {
        Self {
            current: CalculatorState::new(),
            log: TransitionLog::new(),
        }
    }

    /// Submit one button press and return the new display.
    ///
    /// Atomic with respect to state: the pure core builds the complete
    /// next state before anything is stored.
    pub fn submit(&mut self, event: InputEvent) -> &str {
        let from = self.current.clone();
        let to = submit(&from, event);
        self.log = self.log.record(SubmitRecord {
            from,
            event,
            to: to.clone(),
            timestamp: Utc::now(),
        });
        self.current = to;
        self.current.display()
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.current
    }

    /// Current display string (pure)
    pub fn display(&self) -> &str {
        self.current.display()
    }

    /// Submit log (pure)
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Snapshot the session for later resumption.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(&self.current, &self.log)
    }

    /// Resume a session from a checkpoint.
    ///
    /// The checkpoint is validated again here, so a `Checkpoint` built by
    /// hand cannot bypass the state invariants.
    pub fn restore(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        Ok(Self {
            current: checkpoint.state,
            log: checkpoint.log,
        })
    }
}
