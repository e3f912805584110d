//! Win32 Process Info
//!
//! Prints every running process with its ID and the full paths of the
//! modules (DLLs) loaded into it, using raw Win32 API calls via the
//! `windows` crate.
//!
//! Processes that cannot be opened are left out of the report. The run
//! only fails if the process list itself cannot be read.
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod constants;
#[cfg(windows)]
mod ffi;
mod system;

use std::io::{self, BufWriter};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER};

fn main() -> Result<()> {
    init_logging();
    tracing::debug!("{} {}", APP_NAME, APP_VERSION);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    report(&mut out)
}

/// Sends tracing output to stderr so it never mixes with the report
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(windows)]
fn report<W: io::Write>(out: &mut W) -> Result<()> {
    app::run(&system::Win32Source, out)?;
    Ok(())
}

#[cfg(not(windows))]
fn report<W: io::Write>(_out: &mut W) -> Result<()> {
    anyhow::bail!("{} only runs on Windows", APP_NAME)
}
