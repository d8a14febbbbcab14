// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated flight session that exercises the full frame loop with tracing.
//!
//! Runs 180 synthetic 60 Hz frames with scripted jumps. Each frame advances
//! the [`AnimationClock`], updates the [`FlightState`], expands the bird and
//! two pipes, and submits the draw list into a [`RenderPlan`]. Events go to a
//! [`PrettyPrintSink`] on stdout and a [`RecorderSink`]; the recording is then
//! exported as `flight_trace.json` in Chrome trace format.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use flapbird_core::clock::AnimationClock;
use flapbird_core::compose::{DrawList, expand_into, expand_pipe_into};
use flapbird_core::flight::{FlightConfig, FlightState};
use flapbird_core::time::{HostTime, Timebase};
use flapbird_core::trace::{
    ExpandEvent, FlightUpdateEvent, FrameSummaryBuilder, JumpEvent, PhaseBeginEvent,
    PhaseEndEvent, PhaseKind, RigKind, Tracer,
};
use flapbird_core::transform::Transform3d;
use flapbird_debug::Fanout;
use flapbird_debug::pretty::PrettyPrintSink;
use flapbird_debug::recorder::RecorderSink;
use flapbird_render::RenderPlan;
use flapbird_render::mesh;

const FRAME_COUNT: u64 = 180;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;
/// Frames on which the simulated player taps.
const JUMP_FRAMES: [u64; 5] = [0, 20, 30, 90, 100];

fn main() {
    let timebase = Timebase::NANOS;

    // -- sinks -------------------------------------------------------------
    let mut sinks = Fanout {
        a: PrettyPrintSink::with_writer(std::io::stdout(), timebase),
        b: RecorderSink::new(),
    };
    let mut tracer = Tracer::new(&mut sinks);

    // -- session state -----------------------------------------------------
    let mut clock = AnimationClock::new(timebase);
    let mut flight = FlightState::new(FlightConfig::classic());
    let mut list = DrawList::new();
    let mut plan = RenderPlan::new();
    let pipes = [
        Transform3d::from_translation(-5.0, -4.0, -6.0),
        Transform3d::from_translation(5.0, -4.0, -6.0),
    ];

    let wall = Instant::now();
    let mut now_ticks: u64 = 1_000_000_000; // start at 1s

    for frame_index in 0..FRAME_COUNT {
        let frame_start = HostTime(now_ticks);
        let work_start = wall.elapsed();
        // Phase timestamps are the simulated frame start plus real work time.
        let stamp = || {
            let spent = wall.elapsed().saturating_sub(work_start).as_nanos();
            frame_start.saturating_add_ticks(u64::try_from(spent).unwrap_or(u64::MAX))
        };

        let now = clock.observe(frame_start);
        let mut builder = FrameSummaryBuilder::new(frame_index, frame_start, now);

        // 1. Input
        if JUMP_FRAMES.contains(&frame_index) {
            flight.on_jump(now);
            tracer.jump(&JumpEvent::new(frame_index, frame_start, &flight));
        }

        // 2. Update
        begin(&mut tracer, &mut builder, frame_index, PhaseKind::Update, stamp());
        let pose = flight.update(now);
        tracer.flight_update(&FlightUpdateEvent::new(frame_index, stamp(), now, &flight));
        builder.set_flight_phase(flight.phase(now));
        end(&mut tracer, &mut builder, frame_index, PhaseKind::Update, stamp());

        // 3. Expand
        begin(&mut tracer, &mut builder, frame_index, PhaseKind::Expand, stamp());
        list.clear();
        expand_into(pose, &mut list);
        tracer.expand(&ExpandEvent {
            frame_index,
            rig: RigKind::Bird,
            draw_count: count(list.len()),
        });
        for placement in pipes {
            let before = list.len();
            expand_pipe_into(placement, &mut list);
            tracer.expand(&ExpandEvent {
                frame_index,
                rig: RigKind::Pipe,
                draw_count: count(list.len() - before),
            });
        }
        end(&mut tracer, &mut builder, frame_index, PhaseKind::Expand, stamp());

        // 4. Submit
        begin(&mut tracer, &mut builder, frame_index, PhaseKind::Submit, stamp());
        plan.clear();
        list.submit(&mut plan);
        builder.add_draws(count(plan.len()));
        end(&mut tracer, &mut builder, frame_index, PhaseKind::Submit, stamp());

        // 5. Summary
        tracer.frame_summary(&builder.finish());

        now_ticks += REFRESH_INTERVAL_NS;
    }

    drop(tracer);

    let instances = plan.instances();
    println!(
        "Last frame: {} instances, cube mesh {} vertices / {} indices, final pose {:?}",
        instances.len(),
        mesh::cube_vertices().len(),
        mesh::CUBE_INDICES.len(),
        flight.pose(),
    );

    // -- export Chrome trace -----------------------------------------------
    let path = "flight_trace.json";
    let file = File::create(path).expect("failed to create flight_trace.json");
    let mut writer = BufWriter::new(file);
    flapbird_debug::chrome::export(sinks.b.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({FRAME_COUNT} frames)");
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn begin(
    tracer: &mut Tracer<'_>,
    builder: &mut FrameSummaryBuilder,
    frame_index: u64,
    phase: PhaseKind,
    timestamp: HostTime,
) {
    builder.phase_begin(phase, timestamp);
    tracer.phase_begin(&PhaseBeginEvent {
        frame_index,
        phase,
        timestamp,
    });
}

fn end(
    tracer: &mut Tracer<'_>,
    builder: &mut FrameSummaryBuilder,
    frame_index: u64,
    phase: PhaseKind,
    timestamp: HostTime,
) {
    builder.phase_end(phase, timestamp);
    tracer.phase_end(&PhaseEndEvent {
        frame_index,
        phase,
        timestamp,
    });
}
