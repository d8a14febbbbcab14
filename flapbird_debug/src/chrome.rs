// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Frame phases become duration slices, jumps become instant markers, and
//! flight updates become `height` and `angle` counter tracks.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use flapbird_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
/// Expand events carry no timestamp of their own and are placed at the most
/// recent timestamp seen in the recording.
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last_ts = 0.0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Jump(e) => {
                last_ts = ticks_to_us(e.timestamp.ticks(), timebase);
                events.push(json!({
                    "ph": "i",
                    "name": "Jump",
                    "cat": "Input",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": e.frame_index,
                        "anim_secs": e.anim_secs,
                        "base_y": e.base_y,
                    }
                }));
            }
            RecordedEvent::FlightUpdate(e) => {
                last_ts = ticks_to_us(e.timestamp.ticks(), timebase);
                events.push(json!({
                    "ph": "C",
                    "name": "height",
                    "cat": "Flight",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": { "height": e.height }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "angle",
                    "cat": "Flight",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": { "angle": e.angle }
                }));
            }
            RecordedEvent::Expand(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("Expand {}", e.rig.name()),
                    "cat": "Compose",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "draw_count": e.draw_count,
                    }
                }));
            }
            RecordedEvent::PhaseBegin(e) => {
                last_ts = ticks_to_us(e.timestamp.ticks(), timebase);
                events.push(json!({
                    "ph": "B",
                    "name": format!("{:?}", e.phase),
                    "cat": "Frame",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::PhaseEnd(e) => {
                last_ts = ticks_to_us(e.timestamp.ticks(), timebase);
                events.push(json!({
                    "ph": "E",
                    "name": format!("{:?}", e.phase),
                    "cat": "Frame",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::FrameSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FrameSummary",
                    "cat": "Summary",
                    "ts": ticks_to_us(s.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": s.frame_index,
                        "anim_secs": s.anim_secs,
                        "flight_phase": format!("{:?}", s.flight_phase),
                        "draw_count": s.draw_count,
                        "update_us": ticks_to_us(s.update_ticks, timebase),
                        "expand_us": ticks_to_us(s.expand_ticks, timebase),
                        "submit_us": ticks_to_us(s.submit_ticks, timebase),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
