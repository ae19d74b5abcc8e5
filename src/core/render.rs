//! Canonical rendering and parsing of display values.

/// The display shown on session start and after `Clear`.
pub const INITIAL_DISPLAY: &str = "0";

/// Sentinel display for the one recoverable error, division by zero.
pub const ERROR_DISPLAY: &str = "Error";

/// Render a value as its canonical decimal string.
///
/// Uses the shortest representation that round-trips through `f64`, so
/// integers render without a trailing fraction (`4`, not `4.0`) and negative
/// zero normalizes to `"0"`. Non-finite values render as the error sentinel.
///
/// Known limitations: no rounding is applied to suppress floating-point
/// artifacts, matching the arithmetic this machine models (`0.1 + 0.2`
/// renders as `0.30000000000000004`), and large magnitudes render in full
/// positional notation where JS `toString` would switch to exponential
/// form at 1e21. Both forms round-trip through [`parse_display`].
///
/// # Example
///
/// ```rust
/// use tenkey::core::render;
///
/// assert_eq!(render(4.0), "4");
/// assert_eq!(render(-2.5), "-2.5");
/// assert_eq!(render(-0.0), "0");
/// ```
pub fn render(value: f64) -> String {
    if !value.is_finite() {
        return String::from(ERROR_DISPLAY);
    }
    if value == 0.0 {
        return String::from(INITIAL_DISPLAY);
    }
    format!("{value}")
}

/// Parse a display string into its numeric value.
///
/// Transient forms like `"0."` or `"1."` parse; the error sentinel and
/// anything else that does not read as a finite number return `None`.
///
/// # Example
///
/// ```rust
/// use tenkey::core::parse_display;
///
/// assert_eq!(parse_display("1.5"), Some(1.5));
/// assert_eq!(parse_display("0."), Some(0.0));
/// assert_eq!(parse_display("Error"), None);
/// ```
pub fn parse_display(display: &str) -> Option<f64> {
    display.parse::<f64>().ok().filter(|v| v.is_finite())
}
