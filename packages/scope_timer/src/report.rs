//! Rendering of report lines.

use std::time::Duration;

use crate::Unit;

/// Expresses `elapsed` as a (possibly fractional) number of `U`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "sub-nanosecond precision is lost only for durations longer than 104 days"
)]
pub(crate) fn value<U: Unit>(elapsed: Duration) -> f64 {
    const { assert!(U::NANOS != 0, "a unit must span at least one nanosecond") };

    elapsed.as_nanos() as f64 / U::NANOS as f64
}

/// Renders the line `"<label>: <value><suffix>\n"`.
///
/// The value uses the default `f64` formatting: the shortest decimal representation that
/// round-trips, without exponent and without a fixed number of decimal places.
#[must_use]
pub(crate) fn render<U: Unit>(label: &str, elapsed: Duration) -> String {
    format!("{label}: {}{}\n", value::<U>(elapsed), U::SUFFIX)
}
