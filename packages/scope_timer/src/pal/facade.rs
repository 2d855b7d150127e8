use std::time::Instant;

#[cfg(test)]
use crate::pal::FakeClock;
use crate::pal::{Clock, RealClock};

/// The clock a timer reads, chosen once when the timer is created.
#[derive(Clone, Debug)]
pub(crate) enum ClockFacade {
    Real(RealClock),

    #[cfg(test)]
    Fake(FakeClock),
}

impl ClockFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(RealClock)
    }

    #[cfg(test)]
    pub(crate) fn fake(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl Clock for ClockFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(clock) => clock.now(),
            #[cfg(test)]
            Self::Fake(clock) => clock.now(),
        }
    }
}
