// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer contract.
//!
//! The core never touches GPU resources, shaders, cameras, or windows. A host
//! provides:
//!
//! - **Clock**: host time in ticks plus a [`Timebase`], fed through an
//!   [`AnimationClock`] to get animation seconds.
//!
//! - **Input**: a discrete jump event, forwarded to
//!   [`FlightState::on_jump`].
//!
//! - **Renderer**: implements the [`Renderer`] trait to draw one primitive
//!   mesh with a model transform, color, and shading mode.
//!
//! `flapbird_render` ships a [`Renderer`] that collects GPU-ready instance
//! data; tests use small recording doubles.
//!
//! [`Timebase`]: crate::time::Timebase
//! [`AnimationClock`]: crate::clock::AnimationClock
//! [`FlightState::on_jump`]: crate::flight::FlightState::on_jump

use crate::compose::DrawCommand;

/// Draws primitive meshes.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(host_now: HostTime, jumped: bool) {
///     let now = clock.observe(host_now);
///     if jumped {
///         flight.on_jump(now);
///     }
///
///     // Update: advance kinematics to `now`.
///     let pose = flight.update(now);
///
///     // Expand: derive every part's world transform.
///     list.clear();
///     expand_into(pose, &mut list);
///     for placement in &pipes {
///         expand_pipe_into(*placement, &mut list);
///     }
///
///     // Submit: one draw per command.
///     list.submit(&mut renderer);
/// }
/// ```
pub trait Renderer {
    /// Draws `command.mesh` with its world transform, color, and shading.
    fn draw(&mut self, command: &DrawCommand);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self, command: &DrawCommand) {
        (**self).draw(command);
    }
}
