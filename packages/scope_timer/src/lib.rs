#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Measures how long a scope takes and reports the duration when the scope ends.
//!
//! A [`ScopeTimer`] captures a monotonic timestamp when it is created. When it is dropped, it
//! measures the elapsed time, converts it into the [`Unit`] chosen via its type parameter and
//! appends a single line to its [`Sink`]:
//!
//! ```text
//! <label>: <elapsed><unit suffix>
//! ```
//!
//! There are no explicit start or stop calls. The report is written exactly once, however the
//! scope is left: by falling off the end, by an early `return`, by `?` propagating an error or
//! by a panic unwinding through it.
//!
//! This package is meant for ad-hoc instrumentation during development. It does not aggregate
//! measurements, keep history or calculate statistics.
//!
//! # Simple usage
//!
//! Without a named unit, a timer reports in seconds:
//!
//! ```
//! use scope_timer::ScopeTimer;
//!
//! fn rebuild_index() {
//!     let _timer = ScopeTimer::seconds("rebuild_index");
//!
//!     // Work happens here.
//! } // Prints e.g. "rebuild_index: 0.0000012s" to stdout.
//! # rebuild_index();
//! ```
//!
//! Any other unit is named as a type parameter:
//!
//! ```
//! use scope_timer::{Milliseconds, ScopeTimer};
//!
//! fn load_configuration() {
//!     let _timer = ScopeTimer::<Milliseconds>::new("load_configuration");
//!
//!     // Work happens here.
//! } // Prints e.g. "load_configuration: 0.0423ms" to stdout.
//! # load_configuration();
//! ```
//!
//! # Writing to a buffer
//!
//! Any [`std::io::Write`] implementation can receive the report. Borrowed sinks must outlive the
//! timer, which the borrow checker enforces.
//!
//! ```
//! use scope_timer::{Microseconds, ScopeTimer};
//!
//! let mut output = Vec::new();
//!
//! {
//!     let _timer = ScopeTimer::<Microseconds, _>::with_sink("parse", &mut output);
//!     // Work happens here.
//! }
//!
//! let report = String::from_utf8(output).unwrap();
//! assert!(report.starts_with("parse: "));
//! assert!(report.ends_with("µs\n"));
//! ```
//!
//! # Nested timers
//!
//! To let several timers share one destination, wrap it in a [`RefCell`](std::cell::RefCell)
//! (single thread) or a [`Mutex`](std::sync::Mutex) (multiple threads). Inner scopes end first,
//! so their lines come first.
//!
//! ```
//! use std::cell::RefCell;
//!
//! use scope_timer::{Milliseconds, ScopeTimer};
//!
//! let output = RefCell::new(Vec::new());
//!
//! {
//!     let _outer = ScopeTimer::<Milliseconds, _>::with_sink("outer", &output);
//!     {
//!         let _inner = ScopeTimer::<Milliseconds, _>::with_sink("inner", &output);
//!     }
//! }
//!
//! let report = String::from_utf8(output.into_inner()).unwrap();
//! let labels: Vec<_> = report.lines().map(|line| line.split(": ").next().unwrap()).collect();
//! assert_eq!(labels, ["inner", "outer"]);
//! ```
//!
//! # Ownership
//!
//! A timer represents one unique timing session. It cannot be cloned or copied, because two
//! reports for one measured interval would be meaningless. It can be moved, for example returned
//! from a function, and only its final owner reports.
//!
//! # Failures
//!
//! Reporting happens inside `Drop` and therefore cannot return an error. If the sink fails, the
//! failure is logged as a `tracing` warning and the report is skipped.

mod error;
mod pal;
mod report;
mod scope_timer;
mod sink;
mod unit;

pub use error::Error;
pub use scope_timer::ScopeTimer;
pub use sink::{FnSink, Sink, StderrSink, StdoutSink, TracingSink};
pub use unit::{Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, Unit};
