//! Integration tests for `scope_timer` against the real monotonic clock.
//!
//! These tests sleep for real, so measured values are compared with an asymmetric tolerance:
//! a report may exceed the sleep duration by scheduling delay but must never undercut it.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use regex::Regex;
use scope_timer::{Milliseconds, ScopeTimer, Seconds};
use testing::{is_within_overshoot, report_value, with_watchdog};

const LABEL: &str = "Stopwatch";
const SLEEP: Duration = Duration::from_millis(42);
const MAX_OVERSHOOT_MS: f64 = 20.0;

fn sleep_ms() -> f64 {
    f64::from(u32::try_from(SLEEP.as_millis()).expect("sleep duration fits in u32"))
}

fn timed_sleep_in_ms() -> String {
    let mut output = Vec::new();

    {
        let _timer = ScopeTimer::<Milliseconds, _>::with_sink(LABEL, &mut output);
        thread::sleep(SLEEP);
    }

    String::from_utf8(output).expect("reports are valid UTF-8")
}

#[test]
#[cfg_attr(miri, ignore)] // Miri is too slow for real-time assertions.
fn elapsed_time_is_accurate() {
    let report = timed_sleep_in_ms();

    let value = report_value(&report).expect("report contains a value");
    assert!(
        is_within_overshoot(value, sleep_ms(), MAX_OVERSHOOT_MS),
        "measured {value}ms for a {SLEEP:?} sleep"
    );
}

#[test]
fn output_is_formatted_correctly() {
    let report = timed_sleep_in_ms();

    let format = Regex::new(r"^Stopwatch: [0-9]+(\.[0-9]+)?ms\n$").unwrap();
    assert!(format.is_match(&report), "unexpected report {report:?}");
}

#[test]
#[cfg_attr(miri, ignore)] // Miri is too slow for real-time assertions.
fn units_scale_proportionally() {
    let output = RefCell::new(Vec::<u8>::new());

    {
        let _timer = ScopeTimer::<Seconds, _>::with_sink("seconds", &output);
        thread::sleep(SLEEP);
    }
    {
        let _timer = ScopeTimer::<Milliseconds, _>::with_sink("milliseconds", &output);
        thread::sleep(SLEEP);
    }

    let report = String::from_utf8(output.into_inner()).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 2);

    let seconds_line = lines.first().unwrap();
    let millis_line = lines.get(1).unwrap();
    assert!(seconds_line.starts_with("seconds: ") && seconds_line.ends_with('s'));
    assert!(!seconds_line.ends_with("ms"));
    assert!(millis_line.starts_with("milliseconds: ") && millis_line.ends_with("ms"));

    let seconds = report_value(seconds_line).unwrap();
    let millis = report_value(millis_line).unwrap();

    assert!(is_within_overshoot(seconds * 1000.0, sleep_ms(), MAX_OVERSHOOT_MS));
    assert!(is_within_overshoot(millis, sleep_ms(), MAX_OVERSHOOT_MS));
}

#[test]
fn nested_timers_report_inner_then_outer() {
    let output = RefCell::new(Vec::<u8>::new());

    {
        let _outer = ScopeTimer::<Milliseconds, _>::with_sink("outer", &output);
        {
            let _inner = ScopeTimer::<Milliseconds, _>::with_sink("inner", &output);
            thread::sleep(Duration::from_millis(5));
        }
        thread::sleep(Duration::from_millis(5));
    }

    let report = String::from_utf8(output.into_inner()).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 2);

    let inner = lines.first().unwrap();
    let outer = lines.get(1).unwrap();
    assert!(inner.starts_with("inner: "));
    assert!(outer.starts_with("outer: "));
    assert!(report_value(outer).unwrap() >= report_value(inner).unwrap());
}

#[test]
fn moved_timer_reports_exactly_once() {
    fn begin(output: &RefCell<Vec<u8>>) -> ScopeTimer<Milliseconds, &RefCell<Vec<u8>>> {
        let timer = ScopeTimer::with_sink("relocated", output);
        thread::sleep(Duration::from_millis(2));
        timer
    }

    let output = RefCell::new(Vec::<u8>::new());

    {
        let first = begin(&output);
        let second = first;
        thread::sleep(Duration::from_millis(2));
        drop(second);
    }

    let report = String::from_utf8(output.into_inner()).unwrap();
    assert_eq!(report.lines().count(), 1);
    assert!(report.starts_with("relocated: "));
    assert!(report_value(&report).unwrap() >= 4.0);
}

#[test]
fn each_label_is_reported_verbatim() {
    for label in ["", "plain", "with spaces", "colon: inside", "unicode ✓"] {
        let mut output = Vec::new();

        drop(ScopeTimer::<Milliseconds, _>::with_sink(label, &mut output));

        let report = String::from_utf8(output).unwrap();
        let expected_prefix = format!("{label}: ");
        assert!(report.starts_with(&expected_prefix), "{report:?}");
        assert_eq!(report.matches('\n').count(), 1);
        assert!(report.ends_with("ms\n"));
    }
}

#[test]
fn concurrent_timers_write_whole_lines() {
    const THREADS: usize = 8;
    const TIMERS_PER_THREAD: usize = 50;

    let output = with_watchdog(|| {
        let output = Arc::new(Mutex::new(Vec::<u8>::new()));

        let handles: Vec<_> = (0..THREADS)
            .map(|thread_index| {
                let output = Arc::clone(&output);
                thread::spawn(move || {
                    for timer_index in 0..TIMERS_PER_THREAD {
                        let _timer = ScopeTimer::<Milliseconds, _>::with_sink(
                            format!("thread {thread_index} timer {timer_index}"),
                            Arc::clone(&output),
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        Arc::try_unwrap(output)
            .expect("all threads have finished")
            .into_inner()
            .unwrap()
    });

    let report = String::from_utf8(output).unwrap();
    let line_format = Regex::new(r"^thread [0-9]+ timer [0-9]+: [0-9]+(\.[0-9]+)?ms$").unwrap();

    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), THREADS * TIMERS_PER_THREAD);
    for line in lines {
        assert!(line_format.is_match(line), "interleaved line {line:?}");
    }
}

#[test]
fn timer_can_be_moved_between_threads() {
    let output = Arc::new(Mutex::new(Vec::<u8>::new()));

    let timer = ScopeTimer::<Milliseconds, _>::with_sink("cross_thread", Arc::clone(&output));

    thread::spawn(move || {
        thread::sleep(Duration::from_millis(2));
        drop(timer);
    })
    .join()
    .unwrap();

    let report = String::from_utf8(output.lock().unwrap().clone()).unwrap();
    assert_eq!(report.lines().count(), 1);
    assert!(report.starts_with("cross_thread: "));
}
