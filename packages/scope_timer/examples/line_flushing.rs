//! Compares writing lines with a flush after each one against letting the writer buffer them.
//!
//! Each variant is timed with a `ScopeTimer`. The timer reports are collected in a shared
//! buffer and printed at the end, so they are not mixed into the measured output.
//!
//! Run with: `cargo run --example line_flushing`.

use std::cell::RefCell;
use std::io::{self, BufWriter, Write};

use scope_timer::{Milliseconds, ScopeTimer};

const LINES: usize = 10_000;

fn write_flushing_each_line(reports: &RefCell<Vec<u8>>) -> io::Result<()> {
    let _timer = ScopeTimer::<Milliseconds, _>::with_sink("write_flushing_each_line", reports);

    let mut out = BufWriter::new(io::stdout().lock());
    for _ in 0..LINES {
        writeln!(out, "Hello world")?;
        out.flush()?;
    }

    Ok(())
}

fn write_buffered(reports: &RefCell<Vec<u8>>) -> io::Result<()> {
    let _timer = ScopeTimer::<Milliseconds, _>::with_sink("write_buffered", reports);

    let mut out = BufWriter::new(io::stdout().lock());
    for _ in 0..LINES {
        writeln!(out, "Hello world")?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> io::Result<()> {
    let reports = RefCell::new(Vec::new());

    write_flushing_each_line(&reports)?;
    write_buffered(&reports)?;

    println!();
    println!("flush per line vs. buffered:");
    io::stdout().write_all(&reports.into_inner())?;

    Ok(())
}
