use std::io::Write;

use astu_common::network::outcome::ProbeReport;
use astu_core::prober::OutcomeSink;
use tracing::warn;

use crate::terminal::print;

/// Writes one status line per report.
///
/// The prober hands reports over one at a time, so lines never interleave.
pub struct TerminalSink<W: Write + Send> {
    out: W,
    reported: usize,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl<W: Write + Send> OutcomeSink for TerminalSink<W> {
    fn report(&mut self, report: &ProbeReport) {
        self.reported += 1;
        let line = print::status_line(report);
        if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!("failed to write status for {}: {err}", report.address());
        }
    }
}
