#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for tests and benchmarks of scope timing.

use std::env;
use std::panic;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs a test with a timeout to prevent infinite hangs.
///
/// This function wraps a test closure with a timeout mechanism. If the test
/// takes longer than the timeout to complete, the process will be terminated
/// to prevent CI/build systems from hanging.
///
/// The timeout is 10 seconds under normal conditions and 60 seconds under
/// Miri, where thread synchronization primitives are significantly slower.
///
/// When the `MUTATION_TESTING` environment variable is set to "1", the watchdog
/// is disabled and the test function is executed directly. This allows mutation
/// testing to properly detect hanging mutations.
///
/// # Panics
///
/// Panics if the test exceeds the timeout (when not in mutation testing mode).
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// with_watchdog(|| {
///     // Your test code here
///     assert_eq!(2 + 2, 4);
/// });
/// ```
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    // Check if we are running under mutation testing.
    if env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        // Under mutation testing, disable the watchdog to allow hanging mutations.
        return test_fn();
    }

    let (tx, rx) = mpsc::channel();

    // Run the test in a separate thread
    let test_handle = thread::spawn(move || {
        let result = test_fn();
        // Send the result back - if this fails, the receiver has timed out
        drop(tx.send(result));
    });

    // Miri is dramatically slower for thread synchronization, so we use a
    // longer timeout to avoid false positives while still catching real hangs.
    let timeout = if cfg!(miri) {
        Duration::from_secs(60)
    } else {
        Duration::from_secs(10)
    };

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            test_handle.join().expect("Test thread should not panic");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("Test exceeded {timeout:?} timeout");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            // Thread panicked, join it to get the panic
            match test_handle.join() {
                Ok(()) => panic!("Test thread disconnected unexpectedly"),
                Err(e) => panic::resume_unwind(e),
            }
        }
    }
}

/// Extracts the numeric value from a report line of the form `<label>: <value><suffix>`.
///
/// The label may itself contain `": "`, so the value is taken from after the last separator.
/// Returns `None` if the line has no separator or no leading number after it.
#[must_use]
pub fn report_value(line: &str) -> Option<f64> {
    let (_, measurement) = line.trim_end_matches('\n').rsplit_once(": ")?;

    let number_len = measurement
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(measurement.len());

    measurement.get(..number_len)?.parse().ok()
}

/// Whether `actual` lies in the half-open interval `[expected, expected + max_overshoot)`.
///
/// Measured durations can only exceed a deliberate delay (the scheduler may wake a sleeping
/// thread late but never early), so any undershoot counts as a failure.
#[must_use]
pub fn is_within_overshoot(actual: f64, expected: f64, max_overshoot: f64) -> bool {
    let difference = actual - expected;

    (0.0..max_overshoot).contains(&difference)
}
