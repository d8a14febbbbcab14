// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flight kinematics and pose composition for a flappy-bird character.
//!
//! `flapbird_core` turns elapsed time plus discrete jump input into a root
//! pose for the bird, then expands that pose into one draw command per body
//! part. It is `no_std` compatible (with `alloc`) and has no rendering,
//! windowing, or input-device knowledge.
//!
//! # Architecture
//!
//! ```text
//!   HostTime ──► AnimationClock::observe() ──► now (seconds)
//!                                                │
//!   jump input ──► FlightState::on_jump(now)     │
//!                                                ▼
//!                        FlightState::update(now) ──► Pose
//!                                                      │
//!                 ┌────────────────────────────────────┘
//!                 ▼
//!   expand(pose.transform()) ──► DrawList ──► Renderer::draw() × N
//!   expand_pipe(placement)   ──┘
//! ```
//!
//! **[`flight`]**: The bird's height and pitch as a pure function of
//! animation time and the last jump, with [`FlightConfig`](flight::FlightConfig)
//! tuning and a ground policy.
//!
//! **[`rig`]**: Constant tables placing each body part and pipe segment
//! relative to its rig root.
//!
//! **[`compose`]**: Root-to-world expansion into [`DrawList`](compose::DrawList)s.
//!
//! **[`backend`]**: The [`Renderer`](backend::Renderer) trait hosts implement.
//!
//! **[`clock`]**: [`AnimationClock`](clock::AnimationClock) mapping host
//! ticks to animation seconds.
//!
//! **[`time`]**: Host time and timebase conversion.
//!
//! **[`transform`]**: Column-major 4×4 transform.
//!
//! **[`color`]**: RGBA colors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   uses the platform's trigonometry.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod clock;
pub mod color;
pub mod compose;
pub mod flight;
pub mod rig;
pub mod time;
pub mod trace;
pub mod transform;
