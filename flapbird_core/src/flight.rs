// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flight kinematics for the bird.
//!
//! [`FlightState`] owns the bird's height and pitch as a function of
//! animation time and the most recent jump. It has no rendering knowledge;
//! [`update`](FlightState::update) produces a [`Pose`] that the
//! [`compose`](crate::compose) module expands into draw commands.
//!
//! # Motion model
//!
//! With `t` the time since the last jump (zero before the first one):
//!
//! ```text
//! height = v0 * t - gravity * t² / 2 + base_y        (floored at 0 by default)
//! angle  = clamp(angle_at_jump + t * delta_angle, -max_angle, max_angle)
//! ```
//!
//! A jump records the current height as the new `base_y`, restarts `t`, and
//! snaps the angle to `-max_angle`. Both formulas depend only on `now` and the
//! state recorded at the last jump, so calling `update` repeatedly with the
//! same time yields the same pose.

use crate::transform::Transform3d;

/// Largest pitch magnitude, in radians.
pub const MAX_ANGLE: f64 = core::f64::consts::PI / 8.0;

/// Pitch recovery rate, in radians per second since the last jump.
pub const DELTA_ANGLE: f64 = core::f64::consts::PI / 64.0;

/// Downward acceleration, in units per second squared.
pub const GRAVITY: f64 = 8.0;

/// Upward speed imparted by each jump, in units per second.
pub const INITIAL_VELOCITY_Y: f64 = 3.0;

/// What happens when the parabola takes the bird below height zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroundPolicy {
    /// Heights below zero read as zero.
    #[default]
    Clamp,
    /// The bird keeps falling below zero.
    FallThrough,
}

/// Tunable flight constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightConfig {
    /// Upward speed imparted by each jump (units/s).
    pub initial_velocity_y: f64,
    /// Downward acceleration (units/s²).
    pub gravity: f64,
    /// Pitch bound in radians; the angle stays within `[-max_angle, max_angle]`.
    pub max_angle: f64,
    /// Pitch recovery rate (radians per second since the last jump).
    pub delta_angle: f64,
    /// Floor behavior.
    pub ground: GroundPolicy,
}

impl FlightConfig {
    /// The stock tuning: launch at 3 units/s against a gravity of 8, pitch
    /// bounded by π/8 and recovering at π/64 per second, floor at zero.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            initial_velocity_y: INITIAL_VELOCITY_Y,
            gravity: GRAVITY,
            max_angle: MAX_ANGLE,
            delta_angle: DELTA_ANGLE,
            ground: GroundPolicy::Clamp,
        }
    }

    /// Returns this configuration with a different ground policy.
    #[must_use]
    pub const fn with_ground(mut self, ground: GroundPolicy) -> Self {
        self.ground = ground;
        self
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Which part of the arc the bird is in.
///
/// Derived from the state and the query time; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlightPhase {
    /// Never jumped, or resting on the floor.
    Grounded,
    /// Moving upward after a jump.
    Ascending,
    /// Past the apex and falling.
    Descending,
}

/// The bird's root frame at one instant: a lift along Y and a pitch about X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Height above the floor.
    pub height: f64,
    /// Pitch in radians.
    pub angle: f64,
}

impl Pose {
    /// Returns `translation(0, height, 0) * rotation_x(angle)`.
    #[must_use]
    pub fn transform(self) -> Transform3d {
        Transform3d::from_translation(0.0, self.height, 0.0)
            * Transform3d::from_rotation_x(self.angle)
    }
}

impl From<Pose> for Transform3d {
    fn from(pose: Pose) -> Self {
        pose.transform()
    }
}

/// Kinematic state of the bird for one session.
///
/// Created grounded and level. Mutated only by [`on_jump`](Self::on_jump) and
/// [`update`](Self::update).
#[derive(Clone, Debug, PartialEq)]
pub struct FlightState {
    config: FlightConfig,
    /// Height recorded at the last jump.
    base_y: f64,
    /// Animation time of the last jump.
    click_time: Option<f64>,
    /// Angle recorded at the last jump; the origin of the recovery ramp.
    jump_angle: f64,
    /// Angle from the latest `on_jump` or `update`.
    angle: f64,
    /// Height from the latest `update`.
    y: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(FlightConfig::classic())
    }
}

impl FlightState {
    /// Creates a grounded, level bird that has never jumped.
    #[must_use]
    pub const fn new(config: FlightConfig) -> Self {
        Self {
            config,
            base_y: 0.0,
            click_time: None,
            jump_angle: 0.0,
            angle: 0.0,
            y: 0.0,
        }
    }

    /// Returns the configuration this state was created with.
    #[must_use]
    pub const fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Height recorded at the last jump (zero before the first jump).
    #[must_use]
    pub const fn base_y(&self) -> f64 {
        self.base_y
    }

    /// Animation time of the last jump, if any.
    #[must_use]
    pub const fn click_time(&self) -> Option<f64> {
        self.click_time
    }

    /// Current pitch in radians.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Height computed by the latest [`update`](Self::update).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Seconds since the last jump, or zero if the bird never jumped.
    #[must_use]
    pub fn time_after_click(&self, now: f64) -> f64 {
        self.click_time.map_or(0.0, |click| now - click)
    }

    /// Height at `now` according to the motion model, without mutating state.
    #[must_use]
    pub fn height_at(&self, now: f64) -> f64 {
        let t = self.time_after_click(now);
        let height =
            self.config.initial_velocity_y * t - 0.5 * self.config.gravity * t * t + self.base_y;
        match self.config.ground {
            GroundPolicy::Clamp if height < 0.0 => 0.0,
            _ => height,
        }
    }

    /// Pitch at `now` according to the motion model, without mutating state.
    #[must_use]
    pub fn angle_at(&self, now: f64) -> f64 {
        let max = self.config.max_angle;
        let t = self.time_after_click(now);
        (self.jump_angle + t * self.config.delta_angle).clamp(-max, max)
    }

    /// Classifies the bird's motion at `now`.
    #[must_use]
    pub fn phase(&self, now: f64) -> FlightPhase {
        if self.click_time.is_none() {
            return FlightPhase::Grounded;
        }
        let t = self.time_after_click(now);
        let velocity = self.config.initial_velocity_y - self.config.gravity * t;
        if velocity > 0.0 {
            FlightPhase::Ascending
        } else if self.config.ground == GroundPolicy::Clamp && self.height_at(now) <= 0.0 {
            FlightPhase::Grounded
        } else {
            FlightPhase::Descending
        }
    }

    /// Records a jump at animation time `now`.
    ///
    /// The arc restarts from the current height and the pitch snaps to
    /// `-max_angle`. Valid at any time, including mid-flight.
    pub fn on_jump(&mut self, now: f64) {
        self.base_y = self.height_at(now);
        self.y = self.base_y;
        self.click_time = Some(now);
        self.jump_angle = -self.config.max_angle;
        self.angle = self.jump_angle;
        self.debug_check_invariants();
    }

    /// Advances the state to animation time `now` and returns the root pose.
    ///
    /// Idempotent for equal `now`: no jump in between means an identical pose.
    pub fn update(&mut self, now: f64) -> Pose {
        self.y = self.height_at(now);
        self.angle = self.angle_at(now);
        self.debug_check_invariants();
        self.pose()
    }

    /// The pose from the latest `on_jump` or `update`.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        Pose {
            height: self.y,
            angle: self.angle,
        }
    }

    fn debug_check_invariants(&self) {
        let max = self.config.max_angle;
        debug_assert!(
            (-max..=max).contains(&self.angle),
            "pitch {} escaped [-{max}, {max}]",
            self.angle
        );
        debug_assert!(
            self.config.ground == GroundPolicy::FallThrough || self.y >= 0.0,
            "height {} below the floor",
            self.y
        );
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn starts_grounded_and_level() {
        let state = FlightState::default();
        assert_eq!(state.click_time(), None);
        assert_eq!(state.y(), 0.0);
        assert_eq!(state.angle(), 0.0);
        assert_eq!(state.base_y(), 0.0);
        assert_eq!(state.phase(10.0), FlightPhase::Grounded);
    }

    #[test]
    fn never_jumping_stays_put() {
        let mut state = FlightState::default();
        for i in 0..100 {
            let pose = state.update(f64::from(i) * 0.37);
            assert_eq!(pose.height, 0.0);
            assert_eq!(pose.angle, 0.0);
        }
        assert_eq!(state.base_y(), 0.0);
    }

    #[test]
    fn jump_snaps_angle_immediately() {
        let mut state = FlightState::default();
        state.update(1.0);
        state.on_jump(1.0);
        assert_eq!(state.angle(), -MAX_ANGLE);
        assert_eq!(state.click_time(), Some(1.0));
    }

    #[test]
    fn parabola_matches_reference_points() {
        let mut state = FlightState::default();
        state.on_jump(0.0);

        let h = state.update(0.1).height;
        assert!(close(h, 3.0 * 0.1 - 4.0 * 0.01), "expected 0.26, got {h}");

        let apex_return = state.update(0.75).height;
        assert!(apex_return.abs() < EPS, "expected 0 at t=0.75, got {apex_return}");

        for t in [0.8, 1.0, 2.5, 100.0] {
            assert_eq!(state.update(t).height, 0.0, "clamped at t={t}");
        }
    }

    #[test]
    fn height_never_negative_with_clamp() {
        let mut state = FlightState::default();
        state.on_jump(0.0);
        let mut now = 0.0;
        while now < 3.0 {
            assert!(state.update(now).height >= 0.0, "negative height at {now}");
            now += 1.0 / 60.0;
        }
    }

    #[test]
    fn fall_through_goes_below_floor() {
        let config = FlightConfig::classic().with_ground(GroundPolicy::FallThrough);
        let mut state = FlightState::new(config);
        state.on_jump(0.0);
        let h = state.update(1.0).height;
        assert!(close(h, 3.0 - 4.0), "expected -1, got {h}");
        assert_eq!(state.phase(1.0), FlightPhase::Descending);
    }

    #[test]
    fn angle_is_monotonic_until_clamped() {
        let mut state = FlightState::default();
        state.on_jump(0.0);
        let mut prev = state.angle();
        let mut now = 0.0;
        while now < 20.0 {
            let angle = state.update(now).angle;
            assert!(angle >= prev, "angle fell from {prev} to {angle} at {now}");
            assert!(angle <= MAX_ANGLE);
            prev = angle;
            now += 0.25;
        }
        // -π/8 + t·π/64 reaches π/8 at t = 16.
        assert_eq!(state.update(16.0).angle, MAX_ANGLE);
        assert_eq!(state.update(50.0).angle, MAX_ANGLE);
    }

    #[test]
    fn update_is_idempotent() {
        let mut state = FlightState::default();
        state.on_jump(0.5);
        let a = state.update(1.3);
        let b = state.update(1.3);
        assert_eq!(a, b);
        assert_eq!(a.transform(), b.transform());
    }

    #[test]
    fn frame_rate_does_not_change_angle() {
        let mut coarse = FlightState::default();
        let mut fine = FlightState::default();
        coarse.on_jump(0.0);
        fine.on_jump(0.0);
        for i in 0..=240 {
            fine.update(f64::from(i) / 240.0);
        }
        assert_eq!(coarse.update(1.0), fine.update(1.0));
    }

    #[test]
    fn mid_flight_jump_restarts_from_current_height() {
        let mut state = FlightState::default();
        state.on_jump(0.0);
        let h = state.update(0.2).height;
        state.on_jump(0.2);
        assert!(close(state.base_y(), h), "base_y should be the height at the jump");
        assert_eq!(state.angle(), -MAX_ANGLE);
        // Immediately after the second jump the bird is still at the same spot.
        assert!(close(state.update(0.2).height, h));
        // And climbs from there.
        assert!(state.update(0.3).height > h);
    }

    #[test]
    fn jump_between_frames_uses_height_at_jump_time() {
        let mut state = FlightState::default();
        state.on_jump(0.0);
        state.update(0.1);
        // Input arrives at 0.15 before the next frame at 0.2.
        state.on_jump(0.15);
        let expected = 3.0 * 0.15 - 4.0 * 0.15 * 0.15;
        assert!(close(state.base_y(), expected), "got {}", state.base_y());
    }

    #[test]
    fn phases_follow_the_arc() {
        let mut state = FlightState::default();
        assert_eq!(state.phase(0.0), FlightPhase::Grounded);
        state.on_jump(1.0);
        assert_eq!(state.phase(1.1), FlightPhase::Ascending);
        // Apex at t = v0 / g = 0.375.
        assert_eq!(state.phase(1.5), FlightPhase::Descending);
        assert_eq!(state.phase(2.0), FlightPhase::Grounded);
    }

    #[test]
    fn pose_transform_lifts_and_pitches() {
        let pose = Pose {
            height: 2.0,
            angle: MAX_ANGLE,
        };
        let xf = Transform3d::from(pose);
        assert_eq!(xf.translation(), [0.0, 2.0, 0.0]);
        let nose = xf.transform_point([0.0, 0.0, 1.0]);
        let (s, c) = (MAX_ANGLE.sin(), MAX_ANGLE.cos());
        assert!(close(nose[1], 2.0 - s));
        assert!(close(nose[2], c));
    }
}
