// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! host's frame loop calls as it jumps, updates, expands, and submits. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! [`FrameSummaryBuilder`] collects phase timestamps during a frame and
//! produces a [`FrameSummary`] at the end.
//!
//! The flight controller and compositor never emit events themselves; the
//! host decides what to record.

use crate::flight::{FlightPhase, FlightState};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which phase of the frame loop is being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Advancing the flight state to the frame's animation time.
    Update,
    /// Expanding rig roots into draw commands.
    Expand,
    /// Handing draw commands to the renderer.
    Submit,
}

impl PhaseKind {
    /// All phases in frame order.
    pub const ALL: [Self; 3] = [Self::Update, Self::Expand, Self::Submit];

    /// Short identifier for logs and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Expand => "expand",
            Self::Submit => "submit",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Update => 0,
            Self::Expand => 1,
            Self::Submit => 2,
        }
    }
}

/// Which rig an [`ExpandEvent`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RigKind {
    /// The bird.
    Bird,
    /// One pipe.
    Pipe,
}

impl RigKind {
    /// Short identifier for logs and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bird => "bird",
            Self::Pipe => "pipe",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host forwards a jump to the flight controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time of the jump.
    pub timestamp: HostTime,
    /// Animation time of the jump, in seconds.
    pub anim_secs: f64,
    /// Height the new arc starts from.
    pub base_y: f64,
}

impl JumpEvent {
    /// Captures a jump from the state right after
    /// [`on_jump`](FlightState::on_jump).
    #[must_use]
    pub fn new(frame_index: u64, timestamp: HostTime, state: &FlightState) -> Self {
        Self {
            frame_index,
            timestamp,
            anim_secs: state.click_time().unwrap_or(0.0),
            base_y: state.base_y(),
        }
    }
}

/// Emitted after [`FlightState::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightUpdateEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time of the update.
    pub timestamp: HostTime,
    /// Animation time passed to `update`, in seconds.
    pub anim_secs: f64,
    /// Seconds since the last jump.
    pub time_after_click: f64,
    /// Resulting height.
    pub height: f64,
    /// Resulting pitch in radians.
    pub angle: f64,
    /// Motion phase at `anim_secs`.
    pub phase: FlightPhase,
}

impl FlightUpdateEvent {
    /// Captures the state right after `update(anim_secs)`.
    #[must_use]
    pub fn new(frame_index: u64, timestamp: HostTime, anim_secs: f64, state: &FlightState) -> Self {
        Self {
            frame_index,
            timestamp,
            anim_secs,
            time_after_click: state.time_after_click(anim_secs),
            height: state.y(),
            angle: state.angle(),
            phase: state.phase(anim_secs),
        }
    }
}

/// Emitted after a rig is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which rig.
    pub rig: RigKind,
    /// Commands appended by this expansion.
    pub draw_count: u32,
}

/// Marks the beginning of a frame-loop phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseBeginEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which phase is starting.
    pub phase: PhaseKind,
    /// Host time at the start of the phase.
    pub timestamp: HostTime,
}

/// Marks the end of a frame-loop phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseEndEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which phase is ending.
    pub phase: PhaseKind,
    /// Host time at the end of the phase.
    pub timestamp: HostTime,
}

/// Per-frame summary produced by [`FrameSummaryBuilder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSummary {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time at the start of the frame.
    pub now: HostTime,
    /// Animation time of the frame, in seconds.
    pub anim_secs: f64,
    /// Flight phase after the update.
    pub flight_phase: FlightPhase,
    /// Total commands submitted.
    pub draw_count: u32,
    /// Update phase duration in ticks (0 if not measured).
    pub update_ticks: u64,
    /// Expand phase duration in ticks (0 if not measured).
    pub expand_ticks: u64,
    /// Submit phase duration in ticks (0 if not measured).
    pub submit_ticks: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the frame loop.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called when a jump is applied.
    fn on_jump(&mut self, e: &JumpEvent) {
        _ = e;
    }

    /// Called after the flight state is updated.
    fn on_flight_update(&mut self, e: &FlightUpdateEvent) {
        _ = e;
    }

    /// Called after a rig is expanded.
    fn on_expand(&mut self, e: &ExpandEvent) {
        _ = e;
    }

    /// Called at the beginning of a frame-loop phase.
    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        _ = e;
    }

    /// Called at the end of a frame-loop phase.
    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        _ = e;
    }

    /// Called with a per-frame summary.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $hook:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$hook(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`JumpEvent`].
        jump => on_jump(JumpEvent)
    );
    forward!(
        /// Emits a [`FlightUpdateEvent`].
        flight_update => on_flight_update(FlightUpdateEvent)
    );
    forward!(
        /// Emits an [`ExpandEvent`].
        expand => on_expand(ExpandEvent)
    );
    forward!(
        /// Emits a [`PhaseBeginEvent`].
        phase_begin => on_phase_begin(PhaseBeginEvent)
    );
    forward!(
        /// Emits a [`PhaseEndEvent`].
        phase_end => on_phase_end(PhaseEndEvent)
    );
    forward!(
        /// Emits a [`FrameSummary`].
        frame_summary => on_frame_summary(FrameSummary)
    );
}

// ---------------------------------------------------------------------------
// FrameSummaryBuilder
// ---------------------------------------------------------------------------

/// Collects phase timestamps during a frame and produces a [`FrameSummary`].
#[derive(Debug)]
pub struct FrameSummaryBuilder {
    frame_index: u64,
    now: HostTime,
    anim_secs: f64,
    flight_phase: FlightPhase,
    draw_count: u32,
    phase_starts: [Option<HostTime>; 3],
    phase_ends: [Option<HostTime>; 3],
}

impl FrameSummaryBuilder {
    /// Starts building a summary for a frame beginning at `now`.
    #[must_use]
    pub fn new(frame_index: u64, now: HostTime, anim_secs: f64) -> Self {
        Self {
            frame_index,
            now,
            anim_secs,
            flight_phase: FlightPhase::Grounded,
            draw_count: 0,
            phase_starts: [None; 3],
            phase_ends: [None; 3],
        }
    }

    /// Records the start of a phase.
    pub fn phase_begin(&mut self, phase: PhaseKind, t: HostTime) {
        self.phase_starts[phase.index()] = Some(t);
    }

    /// Records the end of a phase.
    pub fn phase_end(&mut self, phase: PhaseKind, t: HostTime) {
        self.phase_ends[phase.index()] = Some(t);
    }

    /// Records the flight phase after the update.
    pub fn set_flight_phase(&mut self, phase: FlightPhase) {
        self.flight_phase = phase;
    }

    /// Adds `count` submitted commands.
    pub fn add_draws(&mut self, count: u32) {
        self.draw_count = self.draw_count.saturating_add(count);
    }

    /// Consumes the builder and produces the final [`FrameSummary`].
    #[must_use]
    pub fn finish(self) -> FrameSummary {
        FrameSummary {
            frame_index: self.frame_index,
            now: self.now,
            anim_secs: self.anim_secs,
            flight_phase: self.flight_phase,
            draw_count: self.draw_count,
            update_ticks: self.phase_duration(PhaseKind::Update),
            expand_ticks: self.phase_duration(PhaseKind::Expand),
            submit_ticks: self.phase_duration(PhaseKind::Submit),
        }
    }

    fn phase_duration(&self, phase: PhaseKind) -> u64 {
        let idx = phase.index();
        match (self.phase_starts[idx], self.phase_ends[idx]) {
            (Some(start), Some(end)) => end.saturating_ticks_since(start),
            _ => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
