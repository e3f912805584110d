//! Text rendering of the process report
//!
//! Output is line-oriented and deterministic: the same snapshots always
//! produce the same bytes.

use std::io::{self, Write};

use super::ProcessSnapshot;

/// Writes the "Found N processes!" header line
pub fn write_header<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Found {} processes!", count)
}

/// Writes one process block: the header line, one line per module
/// numbered from 1, then a blank separator line.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &ProcessSnapshot) -> io::Result<()> {
    writeln!(out, "Process: {}, ID: {:x}", snapshot.name, snapshot.pid)?;
    for (i, module) in snapshot.modules.iter().enumerate() {
        writeln!(out, "\tModule {}: {}", i + 1, module)?;
    }
    writeln!(out)
}
