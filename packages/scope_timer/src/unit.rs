//! Units of time a report can be expressed in.

use std::fmt::Debug;

/// A unit of time used to express the elapsed duration in a report.
///
/// The unit is selected via the type parameter of [`ScopeTimer`](crate::ScopeTimer) and bundles
/// both the divisor applied to the raw elapsed time and the suffix written after the value.
///
/// The provided units use the same suffixes as the C++ `<chrono>` library.
///
/// # Examples
///
/// Custom units can be defined by implementing this trait:
///
/// ```
/// use scope_timer::{ScopeTimer, Unit};
///
/// #[derive(Debug)]
/// struct Frames;
///
/// impl Unit for Frames {
///     // One frame at 60 FPS.
///     const NANOS: u64 = 16_666_667;
///     const SUFFIX: &'static str = " frames";
/// }
///
/// let mut output = Vec::new();
/// drop(ScopeTimer::<Frames, _>::with_sink("render", &mut output));
///
/// assert!(String::from_utf8(output).unwrap().ends_with(" frames\n"));
/// ```
///
/// A unit that spans zero nanoseconds does not compile once a timer uses it:
///
/// ```compile_fail
/// use scope_timer::{ScopeTimer, Unit};
///
/// #[derive(Debug)]
/// struct Zero;
///
/// impl Unit for Zero {
///     const NANOS: u64 = 0;
///     const SUFFIX: &'static str = "!";
/// }
///
/// let mut output = Vec::new();
/// drop(ScopeTimer::<Zero, _>::with_sink("never", &mut output));
/// ```
pub trait Unit: Debug + 'static {
    /// How many nanoseconds make up one of this unit.
    ///
    /// Must not be zero. A zero value is rejected at compile time when the unit is used.
    const NANOS: u64;

    /// Text written directly after the numeric value, e.g. `ms`.
    const SUFFIX: &'static str;
}

macro_rules! units {
    ($($(#[$meta:meta])* $name:ident => $nanos:expr, $suffix:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            #[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
            pub struct $name;

            impl Unit for $name {
                const NANOS: u64 = $nanos;
                const SUFFIX: &'static str = $suffix;
            }
        )*
    };
}

units! {
    /// Reports elapsed time in hours, suffixed with `h`.
    Hours => 3_600_000_000_000, "h";

    /// Reports elapsed time in minutes, suffixed with `min`.
    Minutes => 60_000_000_000, "min";

    /// Reports elapsed time in seconds, suffixed with `s`.
    ///
    /// This is the default unit of [`ScopeTimer`](crate::ScopeTimer).
    Seconds => 1_000_000_000, "s";

    /// Reports elapsed time in milliseconds, suffixed with `ms`.
    Milliseconds => 1_000_000, "ms";

    /// Reports elapsed time in microseconds, suffixed with `µs`.
    Microseconds => 1_000, "µs";

    /// Reports elapsed time in nanoseconds, suffixed with `ns`.
    Nanoseconds => 1, "ns";
}
