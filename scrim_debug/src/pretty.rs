// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use scrim_core::trace::{
    DecodeSkipEvent, DepthCutoffEvent, InstanceFilteredEvent, SkipReason, SnapshotEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn reason_name(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::MissingSeparator => "no-separator",
        SkipReason::BadInstanceId => "bad-instance-id",
        SkipReason::BadPath => "bad-path",
        SkipReason::BadOrdinal => "bad-ordinal",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        let _ = writeln!(
            self.writer,
            "[snapshot] instances={} entries={}",
            e.instances, e.entries,
        );
    }

    fn on_instance_filtered(&mut self, e: &InstanceFilteredEvent) {
        let _ = writeln!(
            self.writer,
            "[filter] instance={} drawn={} skipped={}",
            e.instance, e.drawn, e.skipped,
        );
    }

    fn on_depth_cutoff(&mut self, e: &DepthCutoffEvent) {
        let _ = writeln!(
            self.writer,
            "[depth] instance={} stopped at level {}",
            e.instance, e.depth,
        );
    }

    fn on_decode_skip(&mut self, e: &DecodeSkipEvent) {
        let _ = writeln!(
            self.writer,
            "[decode:skip] line={} reason={}",
            e.line,
            reason_name(e.reason),
        );
    }
}

#[cfg(test)]
mod tests {
    use scrim_core::id::InstanceId;
    use scrim_core::trace::Tracer;

    use super::*;

    #[test]
    fn pretty_prints_snapshot_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_snapshot(&SnapshotEvent {
            instances: 2,
            entries: 9,
        });
        let output = String::from_utf8(sink.writer).expect("utf8 output");
        assert!(output.contains("[snapshot]"), "got: {output}");
        assert!(output.contains("entries=9"), "got: {output}");
    }

    #[test]
    fn works_as_tracer_sink() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let mut tracer = Tracer::new(&mut sink);
        tracer.instance_filtered(&scrim_core::trace::InstanceFilteredEvent {
            instance: InstanceId::from_u128(5),
            drawn: 3,
            skipped: 1,
        });
        drop(tracer);
        let output = String::from_utf8(sink.writer).expect("utf8 output");
        assert!(output.contains("drawn=3"), "got: {output}");
    }
}
