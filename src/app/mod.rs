//! The report loop: enumerate once, then inspect each process in turn

mod report;
mod snapshot;

pub use report::{write_header, write_snapshot};
pub use snapshot::{inspect, ProcessSnapshot};

use std::io::Write;

use anyhow::{Context, Result};

use crate::constants::MAX_PROCESSES;
use crate::system::ProcessSource;

/// Totals for one run. `reported + skipped == found`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Processes returned by enumeration
    pub found: usize,
    /// Processes that were opened and printed
    pub reported: usize,
    /// Processes that could not be opened
    pub skipped: usize,
}

/// Prints the full report for every process `source` knows about.
///
/// Fails only if enumeration fails (or finds nothing) or `out` cannot
/// be written. Individual processes never fail the run.
pub fn run<S: ProcessSource, W: Write>(source: &S, out: &mut W) -> Result<RunSummary> {
    let pids = source
        .process_ids(MAX_PROCESSES)
        .context("Failed to enumerate processes")?;

    let mut summary = RunSummary {
        found: pids.len(),
        ..RunSummary::default()
    };

    write_header(out, pids.len()).context("Failed to write report")?;

    for pid in pids {
        match inspect(source, pid) {
            Some(snapshot) => {
                write_snapshot(out, &snapshot).context("Failed to write report")?;
                summary.reported += 1;
            }
            None => summary.skipped += 1,
        }
    }

    out.flush().context("Failed to write report")?;

    tracing::info!(
        found = summary.found,
        reported = summary.reported,
        skipped = summary.skipped,
        "report complete"
    );
    Ok(summary)
}
