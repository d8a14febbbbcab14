// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host
//! timestamps are converted to microseconds using a [`Timebase`]; animation
//! times are printed in seconds.

use std::io::Write;

use flapbird_core::time::{HostTime, Timebase};
use flapbird_core::trace::{
    ExpandEvent, FlightUpdateEvent, FrameSummary, JumpEvent, PhaseBeginEvent, PhaseEndEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_jump(&mut self, e: &JumpEvent) {
        let _ = writeln!(
            self.writer,
            "[jump] frame={} t={:.3}s base_y={:.3} at {:.1}µs",
            e.frame_index,
            e.anim_secs,
            e.base_y,
            self.host_us(e.timestamp),
        );
    }

    fn on_flight_update(&mut self, e: &FlightUpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[flight] frame={} t={:.3}s dt={:.3}s y={:.3} angle={:+.4}rad {:?}",
            e.frame_index, e.anim_secs, e.time_after_click, e.height, e.angle, e.phase,
        );
    }

    fn on_expand(&mut self, e: &ExpandEvent) {
        let _ = writeln!(
            self.writer,
            "[expand] frame={} rig={} draws={}",
            e.frame_index,
            e.rig.name(),
            e.draw_count,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:begin] frame={} {} at {:.1}µs",
            e.frame_index,
            e.phase.name(),
            self.host_us(e.timestamp),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:end] frame={} {} at {:.1}µs",
            e.frame_index,
            e.phase.name(),
            self.host_us(e.timestamp),
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] frame={} t={:.3}s {:?} draws={} update={:.1}µs \
             expand={:.1}µs submit={:.1}µs",
            s.frame_index,
            s.anim_secs,
            s.flight_phase,
            s.draw_count,
            self.ticks_to_us(s.update_ticks),
            self.ticks_to_us(s.expand_ticks),
            self.ticks_to_us(s.submit_ticks),
        );
    }
}

#[cfg(test)]
mod tests {
    use flapbird_core::flight::{FlightPhase, FlightState};
    use flapbird_core::trace::{PhaseKind, RigKind};

    use super::*;

    fn lines(sink: PrettyPrintSink<Vec<u8>>) -> Vec<String> {
        String::from_utf8(sink.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn pretty_print_jump_and_update() {
        let mut state = FlightState::default();
        state.on_jump(1.0);
        state.update(1.1);

        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_jump(&JumpEvent::new(60, HostTime(1_000_000_000), &state));
        sink.on_flight_update(&FlightUpdateEvent::new(
            66,
            HostTime(1_100_000_000),
            1.1,
            &state,
        ));

        let out = lines(sink);
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("[jump] frame=60"), "got: {}", out[0]);
        assert!(out[0].contains("t=1.000s"), "got: {}", out[0]);
        assert!(out[1].starts_with("[flight] frame=66"), "got: {}", out[1]);
        assert!(out[1].contains("Ascending"), "got: {}", out[1]);
    }

    #[test]
    fn pretty_print_expand_and_phases() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_phase_begin(&PhaseBeginEvent {
            frame_index: 2,
            phase: PhaseKind::Expand,
            timestamp: HostTime(5_000),
        });
        sink.on_expand(&ExpandEvent {
            frame_index: 2,
            rig: RigKind::Pipe,
            draw_count: 3,
        });
        sink.on_phase_end(&PhaseEndEvent {
            frame_index: 2,
            phase: PhaseKind::Expand,
            timestamp: HostTime(7_500),
        });

        let out = lines(sink);
        assert_eq!(out[0], "[phase:begin] frame=2 expand at 5.0µs");
        assert_eq!(out[1], "[expand] frame=2 rig=pipe draws=3");
        assert_eq!(out[2], "[phase:end] frame=2 expand at 7.5µs");
    }

    #[test]
    fn pretty_print_summary() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_frame_summary(&FrameSummary {
            frame_index: 9,
            now: HostTime(0),
            anim_secs: 0.15,
            flight_phase: FlightPhase::Descending,
            draw_count: 15,
            update_ticks: 2_000,
            expand_ticks: 3_000,
            submit_ticks: 500,
        });
        let out = lines(sink);
        assert!(out[0].contains("Descending draws=15"), "got: {}", out[0]);
        assert!(out[0].contains("expand=3.0µs"), "got: {}", out[0]);
    }
}
