//! Destinations that reports are appended to.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;

/// Something a report line can be appended to.
///
/// A [`ScopeTimer`](crate::ScopeTimer) calls [`append()`](Self::append) exactly once, from its
/// `Drop` implementation, with the complete report line including its trailing newline.
///
/// Implementations are provided for:
///
/// * [`StdoutSink`] and [`StderrSink`], the process standard streams.
/// * `&mut W` for any [`std::io::Write`], for exclusive use of a writer.
/// * `&RefCell<W>`, for sharing one writer between several timers on one thread.
/// * `&Mutex<W>` and `Arc<Mutex<W>>`, for sharing one writer between threads.
/// * [`FnSink`], for handing the line to a closure.
/// * [`TracingSink`], for emitting the line as a `tracing` event.
///
/// When several timers share a destination, it is the sink that keeps their lines from
/// interleaving. Each provided sink writes a line with a single `write_all()` call while holding
/// exclusive access to the destination.
pub trait Sink {
    /// Appends one report line.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination could not accept the line. The timer logs the error
    /// and does not retry.
    fn append(&mut self, report: &str) -> Result<()>;
}

/// Writes reports to the standard output of the process.
///
/// This is the default sink of [`ScopeTimer`](crate::ScopeTimer).
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct StdoutSink;

impl Sink for StdoutSink {
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    fn append(&mut self, report: &str) -> Result<()> {
        io::stdout().lock().write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Writes reports to the standard error of the process.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct StderrSink;

impl Sink for StderrSink {
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stderr output reliably - manually tested.
    fn append(&mut self, report: &str) -> Result<()> {
        io::stderr().lock().write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Emits reports as `tracing` events at the `INFO` level with the target `scope_timer`.
///
/// The trailing newline is removed because subscribers terminate events themselves.
#[derive(Clone, Copy, Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct TracingSink;

impl Sink for TracingSink {
    fn append(&mut self, report: &str) -> Result<()> {
        tracing::info!(target: "scope_timer", "{}", report.trim_end_matches('\n'));
        Ok(())
    }
}

/// Hands each report to a closure.
///
/// # Examples
///
/// ```
/// use scope_timer::{FnSink, Milliseconds, ScopeTimer};
///
/// let mut lines = Vec::new();
///
/// {
///     let _timer = ScopeTimer::<Milliseconds, _>::with_sink(
///         "callback",
///         FnSink::new(|line: &str| lines.push(line.to_owned())),
///     );
/// }
///
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].starts_with("callback: "));
/// ```
pub struct FnSink<F> {
    callback: F,
}

impl<F> FnSink<F>
where
    F: FnMut(&str),
{
    /// Creates a sink that calls `callback` with each report line.
    #[must_use]
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str),
{
    fn append(&mut self, report: &str) -> Result<()> {
        (self.callback)(report);
        Ok(())
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

impl<W> Sink for &mut W
where
    W: Write + ?Sized,
{
    fn append(&mut self, report: &str) -> Result<()> {
        self.write_all(report.as_bytes())?;
        Ok(())
    }
}

impl<W> Sink for &RefCell<W>
where
    W: Write + ?Sized,
{
    fn append(&mut self, report: &str) -> Result<()> {
        self.try_borrow_mut()?.write_all(report.as_bytes())?;
        Ok(())
    }
}

// A panic on another thread while it held the lock cannot leave a writer in a state where
// appending a line is unsafe, so poisoning is ignored.
impl<W> Sink for &Mutex<W>
where
    W: Write + ?Sized,
{
    fn append(&mut self, report: &str) -> Result<()> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(report.as_bytes())?;
        Ok(())
    }
}

impl<W> Sink for Arc<Mutex<W>>
where
    W: Write + ?Sized,
{
    fn append(&mut self, report: &str) -> Result<()> {
        (&**self).append(report)
    }
}
