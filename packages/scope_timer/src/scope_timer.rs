//! Timing of a single scope.

use std::fmt;
use std::marker::PhantomData;
use std::panic::Location;
use std::time::{Duration, Instant};

use crate::pal::{Clock, ClockFacade};
use crate::{Seconds, Sink, StdoutSink, Unit, report};

/// Measures the time between its creation and its drop, then reports it to a [`Sink`].
///
/// The report is a single line of the form `<label>: <elapsed><suffix>`, where the elapsed time
/// is expressed in the unit `U` (seconds by default) and the line is written to the sink `S`
/// (standard output by default).
///
/// The report is written exactly once, when the timer is dropped. This happens however its scope
/// is left, including early returns, `?` propagation and panics.
///
/// # Examples
///
/// ```
/// use scope_timer::{Milliseconds, ScopeTimer};
///
/// fn checksum(data: &[u8]) -> u32 {
///     let _timer = ScopeTimer::<Milliseconds>::new("checksum");
///
///     data.iter().map(|&b| u32::from(b)).sum()
/// } // Prints e.g. "checksum: 0.0051ms".
/// # checksum(b"hello");
/// ```
///
/// [`ScopeTimer::seconds`] needs no unit at all, and a type annotation also selects seconds:
///
/// ```
/// use scope_timer::ScopeTimer;
///
/// let _timer = ScopeTimer::seconds("whole_program");
/// let _annotated: ScopeTimer = ScopeTimer::new("main_loop");
/// ```
///
/// Moving a timer moves the measurement. Only the final owner reports:
///
/// ```
/// use scope_timer::{Milliseconds, ScopeTimer};
///
/// fn start_measuring(output: &mut Vec<u8>) -> ScopeTimer<Milliseconds, &mut Vec<u8>> {
///     ScopeTimer::with_sink("handed_over", output)
/// }
///
/// let mut output = Vec::new();
/// {
///     let _timer = start_measuring(&mut output);
/// }
///
/// assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
/// ```
#[must_use = "the measurement ends when the timer is dropped; binding it to `_` drops it immediately"]
pub struct ScopeTimer<U: Unit = Seconds, S: Sink = StdoutSink> {
    label: String,
    sink: S,
    start: Instant,
    clock: ClockFacade,

    _unit: PhantomData<U>,
}

impl ScopeTimer<Seconds, StdoutSink> {
    /// Starts a timer that reports in seconds to standard output when dropped.
    ///
    /// Equivalent to `ScopeTimer::<Seconds>::new(label)`, without naming the unit.
    pub fn seconds(label: impl Into<String>) -> Self {
        Self::new(label)
    }
}

impl<U: Unit> ScopeTimer<U, StdoutSink> {
    /// Starts a timer that reports to standard output when dropped.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_sink(label, StdoutSink)
    }

    /// Starts a timer that reports to standard output when dropped, labeled with the source
    /// location of the caller in the form `file:line:column`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_timer::{Microseconds, ScopeTimer};
    ///
    /// let timer = ScopeTimer::<Microseconds>::at_caller();
    /// assert!(timer.label().contains(file!()));
    /// ```
    #[track_caller]
    pub fn at_caller() -> Self {
        Self::at_caller_with_sink(StdoutSink)
    }
}

impl<U: Unit, S: Sink> ScopeTimer<U, S> {
    /// Starts a timer that reports to `sink` when dropped.
    pub fn with_sink(label: impl Into<String>, sink: S) -> Self {
        Self::with_clock(label.into(), sink, ClockFacade::real())
    }

    /// Starts a timer that reports to `sink` when dropped, labeled with the source location of
    /// the caller in the form `file:line:column`.
    #[track_caller]
    pub fn at_caller_with_sink(sink: S) -> Self {
        Self::with_sink(Location::caller().to_string(), sink)
    }

    pub(crate) fn with_clock(label: String, sink: S, clock: ClockFacade) -> Self {
        let start = clock.now();

        Self {
            label,
            sink,
            start,
            clock,
            _unit: PhantomData,
        }
    }

    /// The label that identifies this timer in its report.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The time that has passed since the timer was started.
    ///
    /// This does not write a report. The report is only written when the timer is dropped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }
}

impl<U: Unit, S: Sink> Drop for ScopeTimer<U, S> {
    fn drop(&mut self) {
        let line = report::render::<U>(&self.label, self.elapsed());

        if let Err(error) = self.sink.append(&line) {
            tracing::warn!(
                label = %self.label,
                %error,
                "scope timer report could not be written"
            );
        }
    }
}

impl<U: Unit, S: Sink> fmt::Debug for ScopeTimer<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeTimer")
            .field("label", &self.label)
            .field("start", &self.start)
            .field("unit", &U::SUFFIX)
            .finish_non_exhaustive()
    }
}
