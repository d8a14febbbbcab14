// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, each prefixed by a one-byte
//! tag. Floats are stored as their IEEE-754 bit patterns. [`decode`] reads
//! them back as an iterator of [`RecordedEvent`], stopping at the first
//! unknown tag or truncated record.

use flapbird_core::flight::FlightPhase;
use flapbird_core::time::HostTime;
use flapbird_core::trace::{
    ExpandEvent, FlightUpdateEvent, FrameSummary, JumpEvent, PhaseBeginEvent, PhaseEndEvent,
    PhaseKind, RigKind, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_JUMP: u8 = 1;
const TAG_FLIGHT_UPDATE: u8 = 2;
const TAG_EXPAND: u8 = 3;
const TAG_PHASE_BEGIN: u8 = 4;
const TAG_PHASE_END: u8 = 5;
const TAG_FRAME_SUMMARY: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_phase(&mut self, p: PhaseKind) {
        self.write_u8(match p {
            PhaseKind::Update => 0,
            PhaseKind::Expand => 1,
            PhaseKind::Submit => 2,
        });
    }

    fn write_flight_phase(&mut self, p: FlightPhase) {
        self.write_u8(match p {
            FlightPhase::Grounded => 0,
            FlightPhase::Ascending => 1,
            FlightPhase::Descending => 2,
        });
    }

    fn write_rig(&mut self, r: RigKind) {
        self.write_u8(match r {
            RigKind::Bird => 0,
            RigKind::Pipe => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_jump(&mut self, e: &JumpEvent) {
        self.write_u8(TAG_JUMP);
        self.write_u64(e.frame_index);
        self.write_u64(e.timestamp.ticks());
        self.write_f64(e.anim_secs);
        self.write_f64(e.base_y);
    }

    fn on_flight_update(&mut self, e: &FlightUpdateEvent) {
        self.write_u8(TAG_FLIGHT_UPDATE);
        self.write_u64(e.frame_index);
        self.write_u64(e.timestamp.ticks());
        self.write_f64(e.anim_secs);
        self.write_f64(e.time_after_click);
        self.write_f64(e.height);
        self.write_f64(e.angle);
        self.write_flight_phase(e.phase);
    }

    fn on_expand(&mut self, e: &ExpandEvent) {
        self.write_u8(TAG_EXPAND);
        self.write_u64(e.frame_index);
        self.write_rig(e.rig);
        self.write_u32(e.draw_count);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.write_u8(TAG_PHASE_BEGIN);
        self.write_u64(e.frame_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.write_u8(TAG_PHASE_END);
        self.write_u64(e.frame_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.write_u8(TAG_FRAME_SUMMARY);
        self.write_u64(s.frame_index);
        self.write_u64(s.now.ticks());
        self.write_f64(s.anim_secs);
        self.write_flight_phase(s.flight_phase);
        self.write_u32(s.draw_count);
        self.write_u64(s.update_ticks);
        self.write_u64(s.expand_ticks);
        self.write_u64(s.submit_ticks);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`JumpEvent`].
    Jump(JumpEvent),
    /// A [`FlightUpdateEvent`].
    FlightUpdate(FlightUpdateEvent),
    /// An [`ExpandEvent`].
    Expand(ExpandEvent),
    /// A [`PhaseBeginEvent`].
    PhaseBegin(PhaseBeginEvent),
    /// A [`PhaseEndEvent`].
    PhaseEnd(PhaseEndEvent),
    /// A [`FrameSummary`].
    FrameSummary(FrameSummary),
}

impl RecordedEvent {
    /// Frame counter of the event.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        match self {
            Self::Jump(e) => e.frame_index,
            Self::FlightUpdate(e) => e.frame_index,
            Self::Expand(e) => e.frame_index,
            Self::PhaseBegin(e) => e.frame_index,
            Self::PhaseEnd(e) => e.frame_index,
            Self::FrameSummary(s) => s.frame_index,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.read_array::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_host_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_phase(&mut self) -> Option<PhaseKind> {
        Some(match self.read_u8()? {
            0 => PhaseKind::Update,
            1 => PhaseKind::Expand,
            _ => PhaseKind::Submit,
        })
    }

    fn read_flight_phase(&mut self) -> Option<FlightPhase> {
        Some(match self.read_u8()? {
            0 => FlightPhase::Grounded,
            1 => FlightPhase::Ascending,
            _ => FlightPhase::Descending,
        })
    }

    fn read_rig(&mut self) -> Option<RigKind> {
        Some(match self.read_u8()? {
            0 => RigKind::Bird,
            _ => RigKind::Pipe,
        })
    }

    fn decode_jump(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Jump(JumpEvent {
            frame_index: self.read_u64()?,
            timestamp: self.read_host_time()?,
            anim_secs: self.read_f64()?,
            base_y: self.read_f64()?,
        }))
    }

    fn decode_flight_update(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FlightUpdate(FlightUpdateEvent {
            frame_index: self.read_u64()?,
            timestamp: self.read_host_time()?,
            anim_secs: self.read_f64()?,
            time_after_click: self.read_f64()?,
            height: self.read_f64()?,
            angle: self.read_f64()?,
            phase: self.read_flight_phase()?,
        }))
    }

    fn decode_expand(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Expand(ExpandEvent {
            frame_index: self.read_u64()?,
            rig: self.read_rig()?,
            draw_count: self.read_u32()?,
        }))
    }

    fn decode_phase_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseBegin(PhaseBeginEvent {
            frame_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: self.read_host_time()?,
        }))
    }

    fn decode_phase_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseEnd(PhaseEndEvent {
            frame_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: self.read_host_time()?,
        }))
    }

    fn decode_frame_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FrameSummary(FrameSummary {
            frame_index: self.read_u64()?,
            now: self.read_host_time()?,
            anim_secs: self.read_f64()?,
            flight_phase: self.read_flight_phase()?,
            draw_count: self.read_u32()?,
            update_ticks: self.read_u64()?,
            expand_ticks: self.read_u64()?,
            submit_ticks: self.read_u64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_JUMP => self.decode_jump(),
            TAG_FLIGHT_UPDATE => self.decode_flight_update(),
            TAG_EXPAND => self.decode_expand(),
            TAG_PHASE_BEGIN => self.decode_phase_begin(),
            TAG_PHASE_END => self.decode_phase_end(),
            TAG_FRAME_SUMMARY => self.decode_frame_summary(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use flapbird_core::flight::FlightState;

    use super::*;

    fn record_one_frame(rec: &mut RecorderSink) -> (JumpEvent, FlightUpdateEvent, FrameSummary) {
        let mut state = FlightState::default();
        state.on_jump(0.25);
        let jump = JumpEvent::new(3, HostTime(250_000_000), &state);
        state.update(0.3);
        let update = FlightUpdateEvent::new(3, HostTime(300_000_000), 0.3, &state);
        let summary = FrameSummary {
            frame_index: 3,
            now: HostTime(300_000_000),
            anim_secs: 0.3,
            flight_phase: update.phase,
            draw_count: 15,
            update_ticks: 120,
            expand_ticks: 800,
            submit_ticks: 450,
        };

        rec.on_jump(&jump);
        rec.on_flight_update(&update);
        rec.on_phase_begin(&PhaseBeginEvent {
            frame_index: 3,
            phase: PhaseKind::Expand,
            timestamp: HostTime(300_000_120),
        });
        rec.on_expand(&ExpandEvent {
            frame_index: 3,
            rig: RigKind::Bird,
            draw_count: 9,
        });
        rec.on_expand(&ExpandEvent {
            frame_index: 3,
            rig: RigKind::Pipe,
            draw_count: 3,
        });
        rec.on_phase_end(&PhaseEndEvent {
            frame_index: 3,
            phase: PhaseKind::Expand,
            timestamp: HostTime(300_000_920),
        });
        rec.on_frame_summary(&summary);
        (jump, update, summary)
    }

    #[test]
    fn frame_decodes_in_order() {
        let mut rec = RecorderSink::new();
        let (jump, update, summary) = record_one_frame(&mut rec);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 7);
        assert_eq!(events[0], RecordedEvent::Jump(jump));
        assert_eq!(events[1], RecordedEvent::FlightUpdate(update));
        assert!(matches!(
            events[3],
            RecordedEvent::Expand(ExpandEvent {
                rig: RigKind::Bird,
                draw_count: 9,
                ..
            })
        ));
        assert!(matches!(
            events[5],
            RecordedEvent::PhaseEnd(PhaseEndEvent {
                phase: PhaseKind::Expand,
                ..
            })
        ));
        assert_eq!(events[6], RecordedEvent::FrameSummary(summary));
        assert!(events.iter().all(|e| e.frame_index() == 3));
    }

    #[test]
    fn floats_survive_bit_exact() {
        let mut rec = RecorderSink::new();
        let (_, update, _) = record_one_frame(&mut rec);
        let decoded = decode(rec.as_bytes()).find_map(|e| match e {
            RecordedEvent::FlightUpdate(u) => Some(u),
            _ => None,
        });
        let decoded = decoded.expect("flight update recorded");
        assert_eq!(decoded.height.to_bits(), update.height.to_bits());
        assert_eq!(decoded.angle.to_bits(), update.angle.to_bits());
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        record_one_frame(&mut rec);
        let bytes = rec.into_bytes();
        // Chop the summary in half.
        let cut = &bytes[..bytes.len() - 10];
        assert_eq!(decode(cut).count(), 6);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_expand(&ExpandEvent {
            frame_index: 0,
            rig: RigKind::Pipe,
            draw_count: 3,
        });
        let mut bytes = rec.into_bytes();
        bytes.push(0xEE);
        bytes.extend_from_slice(&[0; 32]);
        assert_eq!(decode(&bytes).count(), 1);
    }

    #[test]
    fn empty_recording_decodes_to_nothing() {
        assert_eq!(decode(&[]).count(), 0);
    }
}
