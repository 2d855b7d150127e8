//! Platform abstraction layer for reading the monotonic clock.
//!
//! Production code reads [`std::time::Instant`]. Unit tests substitute a fake clock whose time
//! only moves when the test advances it, which makes the rendered reports deterministic.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Clock;
pub(crate) use facade::ClockFacade;
#[cfg(test)]
pub(crate) use fake::FakeClock;
pub(crate) use real::RealClock;
