//! The input transition function.
//!
//! [`submit`] is a total pure function from `(state, event)` to the next
//! state: no event panics, no event returns an error, and every event is
//! handled in every reachable state. Arithmetic failures (division by zero,
//! overflow) degrade to the `"Error"` display sentinel, from which digit
//! input recovers as if `Clear` had been pressed first.

use super::event::{Digit, InputEvent, Operator};
use super::render::{parse_display, render, ERROR_DISPLAY};
use super::state::CalculatorState;

/// Advance the machine by one button press.
///
/// Pure function of `(state, event)`; the caller decides what to do with
/// the returned state. The previous state is never partially mutated.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{submit, CalculatorState, Digit, InputEvent, Operator};
///
/// let mut state = CalculatorState::new();
/// state = submit(&state, InputEvent::Digit(Digit::new(5).unwrap()));
/// state = submit(&state, InputEvent::Operator(Operator::Add));
/// state = submit(&state, InputEvent::Digit(Digit::new(3).unwrap()));
/// state = submit(&state, InputEvent::Equals);
/// assert_eq!(state.display(), "8");
/// ```
pub fn submit(state: &CalculatorState, event: InputEvent) -> CalculatorState {
    match event {
        InputEvent::Digit(digit) => input_digit(state, digit),
        InputEvent::Decimal => input_decimal(state),
        InputEvent::Operator(op) => push_operator(state, op),
        InputEvent::Equals => equals(state),
        InputEvent::Clear => CalculatorState::new(),
        InputEvent::ToggleSign => toggle_sign(state),
        InputEvent::Percent => percent(state),
    }
}

/// The state after a failed computation. Nothing pending survives an
/// error, so recovery starts from a clean slate.
fn error_state() -> CalculatorState {
    CalculatorState {
        display: String::from(ERROR_DISPLAY),
        accumulator: None,
        pending_operator: None,
        awaiting_operand: false,
    }
}

fn input_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    // The error display reads as the initial "0" for input purposes.
    if state.is_error() {
        return CalculatorState {
            display: digit.to_char().to_string(),
            ..CalculatorState::new()
        };
    }

    let mut next = state.clone();
    if next.awaiting_operand {
        next.display = digit.to_char().to_string();
        next.awaiting_operand = false;
    } else if next.display == "0" {
        next.display = digit.to_char().to_string();
    } else {
        // Entry is capped where the display would stop parsing as a
        // finite number; further digits are ignored.
        let mut candidate = next.display.clone();
        candidate.push(digit.to_char());
        if parse_display(&candidate).is_some() {
            next.display = candidate;
        }
    }
    next
}

fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.is_error() {
        return CalculatorState {
            display: String::from("0."),
            ..CalculatorState::new()
        };
    }

    let mut next = state.clone();
    if next.awaiting_operand {
        next.display = String::from("0.");
        next.awaiting_operand = false;
    } else if !next.display.contains('.') {
        next.display.push('.');
    }
    next
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if let Some(value) = parse_display(&next.display) {
        // Zero stays untouched; there is no "-0" display.
        if value != 0.0 {
            next.display = render(-value);
        }
    }
    next
}

fn percent(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if let Some(value) = parse_display(&next.display) {
        next.display = render(value / 100.0);
    }
    next
}

fn push_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    // While the display shows the error sentinel, operators are no-ops.
    let Some(value) = parse_display(&state.display) else {
        return state.clone();
    };

    let mut next = state.clone();
    match (next.accumulator, next.pending_operator) {
        // First operand captured.
        (None, _) => next.accumulator = Some(value),
        // The user typed a new operand since the last operator: fold it in.
        (Some(acc), Some(pending)) if !next.awaiting_operand => {
            match pending.apply(acc, value) {
                Some(result) => {
                    next.accumulator = Some(result);
                    next.display = render(result);
                }
                None => return error_state(),
            }
        }
        // Operator pressed twice in a row: substitute, no computation.
        _ => {}
    }
    next.pending_operator = Some(op);
    next.awaiting_operand = true;
    next
}

fn equals(state: &CalculatorState) -> CalculatorState {
    // Equals with no freshly typed operand is a defined no-op.
    if state.awaiting_operand {
        return state.clone();
    }
    let (Some(acc), Some(op)) = (state.accumulator, state.pending_operator) else {
        return state.clone();
    };
    let Some(value) = parse_display(&state.display) else {
        return state.clone();
    };

    match op.apply(acc, value) {
        Some(result) => CalculatorState {
            display: render(result),
            accumulator: None,
            pending_operator: None,
            awaiting_operand: false,
        },
        None => error_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::INITIAL_DISPLAY;

    fn press_all(state: CalculatorState, events: Vec<InputEvent>) -> CalculatorState {
        events
            .into_iter()
            .fold(state, |state, event| submit(&state, event))
    }

    fn digit(d: u8) -> InputEvent {
        InputEvent::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn digits_replace_leading_zero() {
        let state = press_all(CalculatorState::new(), vec![digit(0), digit(7)]);
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn digits_append() {
        let state = press_all(CalculatorState::new(), vec![digit(1), digit(2), digit(3)]);
        assert_eq!(state.display(), "123");
    }

    #[test]
    fn decimal_starts_fraction_from_zero() {
        let state = submit(&CalculatorState::new(), InputEvent::Decimal);
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn second_decimal_is_ignored() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(1), InputEvent::Decimal, InputEvent::Decimal, digit(5)],
        );
        assert_eq!(state.display(), "1.5");
    }

    #[test]
    fn digit_after_operator_starts_fresh_number() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(5), InputEvent::Operator(Operator::Add), digit(3)],
        );
        assert_eq!(state.display(), "3");
        assert_eq!(state.accumulator(), Some(5.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn decimal_after_operator_starts_fresh_number() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(5), InputEvent::Operator(Operator::Add), InputEvent::Decimal],
        );
        assert_eq!(state.display(), "0.");
        assert!(!state.awaiting_operand());
    }

    #[test]
    fn equals_computes_pending_operation() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(5),
                InputEvent::Operator(Operator::Add),
                digit(3),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "8");
        assert_eq!(state.accumulator(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_operand());
    }

    #[test]
    fn chained_operators_fold_left() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(5),
                InputEvent::Operator(Operator::Add),
                digit(3),
                InputEvent::Operator(Operator::Subtract),
                digit(2),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "6");
    }

    #[test]
    fn repeated_operator_substitutes() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(7),
                InputEvent::Operator(Operator::Add),
                InputEvent::Operator(Operator::Multiply),
                digit(2),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "14");
    }

    #[test]
    fn equals_without_operator_is_noop() {
        let typed = press_all(CalculatorState::new(), vec![digit(4), digit(2)]);
        let state = submit(&typed, InputEvent::Equals);
        assert_eq!(state, typed);
    }

    #[test]
    fn equals_right_after_operator_is_noop() {
        let pending = press_all(
            CalculatorState::new(),
            vec![digit(4), InputEvent::Operator(Operator::Add)],
        );
        let state = submit(&pending, InputEvent::Equals);
        assert_eq!(state, pending);
    }

    #[test]
    fn repeated_equals_is_noop() {
        let once = press_all(
            CalculatorState::new(),
            vec![
                digit(9),
                InputEvent::Operator(Operator::Multiply),
                digit(2),
                InputEvent::Equals,
            ],
        );
        let twice = submit(&once, InputEvent::Equals);
        assert_eq!(once, twice);
        assert_eq!(twice.display(), "18");
    }

    #[test]
    fn clear_resets_everything() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(5), InputEvent::Operator(Operator::Add), digit(3)],
        );
        let cleared = submit(&state, InputEvent::Clear);
        assert_eq!(cleared, CalculatorState::new());
    }

    #[test]
    fn toggle_sign_negates_nonzero() {
        let state = press_all(CalculatorState::new(), vec![digit(5), InputEvent::ToggleSign]);
        assert_eq!(state.display(), "-5");
        let state = submit(&state, InputEvent::ToggleSign);
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn toggle_sign_leaves_zero_alone() {
        let state = submit(&CalculatorState::new(), InputEvent::ToggleSign);
        assert_eq!(state.display(), INITIAL_DISPLAY);
    }

    #[test]
    fn toggle_sign_leaves_transient_zero_alone() {
        let state = press_all(
            CalculatorState::new(),
            vec![InputEvent::Decimal, InputEvent::ToggleSign],
        );
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn percent_divides_by_hundred() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(5), digit(0), InputEvent::Percent],
        );
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn division_by_zero_degrades_to_error() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(1),
                digit(0),
                InputEvent::Operator(Operator::Divide),
                digit(0),
                InputEvent::Equals,
            ],
        );
        assert!(state.is_error());
        assert_eq!(state.display(), "Error");
        assert_eq!(state.accumulator(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn division_by_zero_mid_chain_degrades_to_error() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(8),
                InputEvent::Operator(Operator::Divide),
                digit(0),
                InputEvent::Operator(Operator::Add),
            ],
        );
        assert!(state.is_error());
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn digit_recovers_from_error() {
        let error = submit(
            &press_all(
                CalculatorState::new(),
                vec![digit(1), InputEvent::Operator(Operator::Divide), digit(0)],
            ),
            InputEvent::Equals,
        );
        assert!(error.is_error());

        let state = submit(&error, digit(5));
        assert_eq!(state.display(), "5");
        assert_eq!(state.accumulator(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn decimal_recovers_from_error() {
        let error = error_state();
        let state = submit(&error, InputEvent::Decimal);
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn non_digit_events_on_error_are_noops() {
        let error = error_state();
        for event in [
            InputEvent::Operator(Operator::Add),
            InputEvent::Equals,
            InputEvent::Percent,
            InputEvent::ToggleSign,
        ] {
            assert_eq!(submit(&error, event), error);
        }
    }

    #[test]
    fn clear_recovers_from_error() {
        let state = submit(&error_state(), InputEvent::Clear);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn overflow_degrades_to_error() {
        // Two 200-digit operands multiply to ~1e400, past f64 range.
        let mut state = CalculatorState::new();
        for _ in 0..200 {
            state = submit(&state, digit(9));
        }
        state = submit(&state, InputEvent::Operator(Operator::Multiply));
        for _ in 0..200 {
            state = submit(&state, digit(9));
        }
        state = submit(&state, InputEvent::Equals);
        assert!(state.is_error());
    }

    #[test]
    fn digit_entry_caps_where_parse_would_overflow() {
        let mut state = CalculatorState::new();
        for _ in 0..400 {
            state = submit(&state, digit(9));
        }
        // The display stopped growing before its parse went non-finite.
        assert!(state.value().is_some());
        assert!(!state.is_error());

        let capped_len = state.display().len();
        let more = submit(&state, digit(9));
        assert_eq!(more.display().len(), capped_len);
    }

    #[test]
    fn capped_entry_still_accepts_operators() {
        let mut state = CalculatorState::new();
        for _ in 0..320 {
            state = submit(&state, digit(9));
        }
        state = submit(&state, InputEvent::Operator(Operator::Add));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(state.accumulator().is_some());
    }

    #[test]
    fn operator_after_equals_reuses_result() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(5),
                InputEvent::Operator(Operator::Add),
                digit(3),
                InputEvent::Equals,
                InputEvent::Operator(Operator::Multiply),
                digit(2),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "16");
    }

    #[test]
    fn digit_after_equals_extends_result() {
        // Equals leaves awaiting_operand false, so typing extends the
        // rendered result.
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(5),
                InputEvent::Operator(Operator::Add),
                digit(3),
                InputEvent::Equals,
                digit(9),
            ],
        );
        assert_eq!(state.display(), "89");
    }

    #[test]
    fn toggle_sign_preserves_pending_operation() {
        let state = press_all(
            CalculatorState::new(),
            vec![digit(5), InputEvent::Operator(Operator::Add), InputEvent::ToggleSign],
        );
        assert_eq!(state.display(), "-5");
        assert_eq!(state.accumulator(), Some(5.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(state.awaiting_operand());
    }

    #[test]
    fn negative_operand_arithmetic() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(5),
                InputEvent::ToggleSign,
                InputEvent::Operator(Operator::Multiply),
                digit(3),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "-15");
    }

    #[test]
    fn fractional_arithmetic() {
        let state = press_all(
            CalculatorState::new(),
            vec![
                digit(1),
                InputEvent::Decimal,
                digit(5),
                InputEvent::Operator(Operator::Multiply),
                digit(2),
                InputEvent::Equals,
            ],
        );
        assert_eq!(state.display(), "3");
    }
}
