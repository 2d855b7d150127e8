use std::time::Instant;

use crate::pal::Clock;

/// Reads the operating system's monotonic clock via the standard library.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RealClock;

impl Clock for RealClock {
    #[cfg_attr(test, mutants::skip)] // Replacing the real clock with a constant is not observable in unit tests.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn never_goes_backwards() {
        let clock = RealClock;

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
