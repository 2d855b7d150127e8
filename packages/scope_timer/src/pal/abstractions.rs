//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides monotonic timestamps.
///
/// Timestamps returned by consecutive calls never decrease and are unaffected by wall clock
/// adjustments.
pub(crate) trait Clock: Debug + Send + Sync + 'static {
    /// Gets the current monotonic timestamp.
    fn now(&self) -> Instant;
}
