//! Input events accepted by the calculator state machine.
//!
//! Events model one button press each. They are plain serializable values
//! with small pure methods, so event streams can be recorded, replayed,
//! and generated in tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when constructing a [`Digit`] from a value outside `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a decimal digit in 0..=9")]
pub struct InvalidDigit;

/// A single decimal digit, `0` through `9`.
///
/// Construction is validated, so a `Digit` always holds an in-range value
/// and the transition function never has to re-check digit bounds.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.to_char(), '7');
///
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// The numeric value, `0..=9`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as its ASCII character.
    pub fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit)
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InvalidDigit)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Binary arithmetic operator of a pending operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Returns `None` for division by zero and for non-finite results
    /// (overflow); the machine degrades those to its error display rather
    /// than surfacing `inf`/`NaN`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenkey::core::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(5.0, 3.0), Some(8.0));
    /// assert_eq!(Operator::Divide.apply(10.0, 0.0), None);
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return None;
                }
                a / b
            }
        };
        result.is_finite().then_some(result)
    }

    /// The button label for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// One button press, as dispatched by a view layer.
///
/// The machine makes no assumption about how events are produced; mouse,
/// touch, and keyboard are equivalent upstream translations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, `0`..`9`.
    Digit(Digit),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// The all-clear key.
    Clear,
    /// The sign toggle key (`+/-`).
    ToggleSign,
    /// The percent key.
    Percent,
}

impl InputEvent {
    /// Translate a button label into an event.
    ///
    /// Labels follow the calculator keypad: `"AC"`, `"+/-"`, `"%"`, `"÷"`,
    /// `"×"`, `"-"`, `"+"`, `"="`, `"."`, and the digits. ASCII `"/"` and
    /// `"*"` are accepted as operator aliases. Unknown labels return `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenkey::core::{InputEvent, Operator};
    ///
    /// assert_eq!(InputEvent::from_label("÷"), Some(InputEvent::Operator(Operator::Divide)));
    /// assert_eq!(InputEvent::from_label("AC"), Some(InputEvent::Clear));
    /// assert_eq!(InputEvent::from_label("what"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "AC" => Some(Self::Clear),
            "+/-" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "×" | "*" => Some(Self::Operator(Operator::Multiply)),
            "÷" | "/" => Some(Self::Operator(Operator::Divide)),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::try_from(c).ok().map(Self::Digit),
                    _ => None,
                }
            }
        }
    }
}

/// Build a `Vec<InputEvent>` from button labels.
///
/// Panics on an unknown label, so typos in test scripts fail loudly.
///
/// # Example
///
/// ```rust
/// use tenkey::events;
/// use tenkey::core::InputEvent;
///
/// let presses = events!["5", "+", "3", "="];
/// assert_eq!(presses.len(), 4);
/// assert_eq!(presses[3], InputEvent::Equals);
/// ```
#[macro_export]
macro_rules! events {
    ($($label:expr),* $(,)?) => {
        vec![
            $($crate::core::InputEvent::from_label($label)
                .unwrap_or_else(|| panic!("unknown button label: {:?}", $label))),*
        ]
    };
}
