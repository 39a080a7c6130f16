//! Terminal report of scraped sections

use std::io::{self, Write};

use crate::types::ResultSet;

/// Records shown per section in normal mode
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Records shown per section in verbose mode
pub const VERBOSE_DISPLAY_LIMIT: usize = 25;

pub fn display_limit(verbose: bool) -> usize {
    if verbose {
        VERBOSE_DISPLAY_LIMIT
    } else {
        DEFAULT_DISPLAY_LIMIT
    }
}

/// Writes the grouped report to `out`
///
/// An empty result set writes nothing. Each section lists up to
/// `display_limit` records numbered from 1, then one "... N more" line if
/// records remain.
pub fn write_report<W: Write>(out: &mut W, results: &ResultSet, display_limit: usize) -> io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    for section in results.sections() {
        writeln!(out, " :: {}", section.label)?;
        for (i, record) in section.records.iter().take(display_limit).enumerate() {
            writeln!(out, "    {}) {}", i + 1, record)?;
        }
        let remaining = section.records.len().saturating_sub(display_limit);
        if remaining > 0 {
            writeln!(out, "{}... {} more", "\t".repeat(8), remaining)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Prints the grouped report to stdout
pub fn print_report(results: &ResultSet, display_limit: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, results, display_limit)?;
    out.flush()
}
