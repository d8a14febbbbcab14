// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for flapbird
//! diagnostics.
//!
//! This crate provides [`TraceSink`](flapbird_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//! - [`Fanout`]: forwards every event to two sinks.

pub mod chrome;
pub mod pretty;
pub mod recorder;

use flapbird_core::trace::{
    ExpandEvent, FlightUpdateEvent, FrameSummary, JumpEvent, PhaseBeginEvent, PhaseEndEvent,
    TraceSink,
};

/// Forwards every event to two sinks, `a` first.
#[derive(Debug)]
pub struct Fanout<A, B> {
    /// First sink.
    pub a: A,
    /// Second sink.
    pub b: B,
}

impl<A: TraceSink, B: TraceSink> TraceSink for Fanout<A, B> {
    fn on_jump(&mut self, e: &JumpEvent) {
        self.a.on_jump(e);
        self.b.on_jump(e);
    }

    fn on_flight_update(&mut self, e: &FlightUpdateEvent) {
        self.a.on_flight_update(e);
        self.b.on_flight_update(e);
    }

    fn on_expand(&mut self, e: &ExpandEvent) {
        self.a.on_expand(e);
        self.b.on_expand(e);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.a.on_phase_begin(e);
        self.b.on_phase_begin(e);
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.a.on_phase_end(e);
        self.b.on_phase_end(e);
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.a.on_frame_summary(s);
        self.b.on_frame_summary(s);
    }
}

#[cfg(test)]
mod tests {
    use flapbird_core::trace::RigKind;

    use super::*;
    use crate::recorder::{RecorderSink, decode};

    #[test]
    fn fanout_reaches_both_sinks() {
        let mut fan = Fanout {
            a: RecorderSink::new(),
            b: RecorderSink::new(),
        };
        fan.on_expand(&ExpandEvent {
            frame_index: 1,
            rig: RigKind::Bird,
            draw_count: 9,
        });
        assert_eq!(decode(fan.a.as_bytes()).count(), 1);
        assert_eq!(fan.a.as_bytes(), fan.b.as_bytes());
    }
}
