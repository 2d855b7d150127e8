use std::cell::BorrowMutError;
use std::io;
use std::result;

use thiserror::Error;

/// Errors that can occur when a report is appended to a [`Sink`](crate::Sink).
///
/// These never escape a [`ScopeTimer`](crate::ScopeTimer): the timer logs them and skips the
/// report. Custom [`Sink`](crate::Sink) implementations return them to signal failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The underlying writer failed to accept the report.
    #[error("failed to write report to sink: {0}")]
    Io(#[from] io::Error),

    /// The sink is shared via a `RefCell` and someone else was holding it mutably borrowed
    /// at the moment the report was due.
    #[error("sink is already borrowed by another writer")]
    SinkBusy(#[from] BorrowMutError),
}

/// A specialized `Result` type for sink operations, returning the crate's [`Error`] type as the
/// error value.
pub(crate) type Result<T> = result::Result<T, Error>;
