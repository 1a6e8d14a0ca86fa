//! Jump motor: impulse, timed deceleration, cancellation on landing and a
//! single-slot jump buffer.

use glam::Vec2;

use crate::config::{ConfigError, JumpProfile};
use crate::math::{move_towards, ratio};

use super::broadcast::Transition;
use super::state::{ControllerState, PhysicState};

/// What a jump request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Jumped,
    /// Stored until landing or until the buffer time runs out.
    Buffered,
}

/// Pending buffered jump, as a countdown of the seconds it has left. At most
/// one countdown exists; arming again restarts it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpBuffer {
    remaining: Option<f32>,
}

impl JumpBuffer {
    /// Arm (or re-arm) the buffer. Returns `true` if a pending countdown was replaced.
    pub fn arm(&mut self, buffer_time: f32) -> bool {
        self.remaining.replace(buffer_time).is_some()
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left before the buffered request lapses.
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Count down by `dt` and clear the buffer once it runs out. Returns
    /// `true` on expiry.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }
        self.remaining = None;
        true
    }
}

#[derive(Debug, Clone)]
pub struct JumpMotor {
    profile: JumpProfile,
    duration: f32,
}

impl JumpMotor {
    /// Fails on a zero impulse or any profile that yields a non-finite duration.
    pub fn new(profile: JumpProfile) -> Result<Self, ConfigError> {
        let duration = profile.duration()?;
        Ok(Self { profile, duration })
    }

    /// Seconds of airtime a jump lasts: `height / impulse_force`.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// A jump fires from the ground or inside the coyote window. Otherwise
    /// (still rising, or falling past the coyote window) the request is
    /// buffered for the landing.
    pub fn request(&self, state: &mut ControllerState, velocity: &mut Vec2) -> JumpOutcome {
        if !state.is_jumping && (state.is_grounded() || state.is_in_coyote_time) {
            self.start(state, velocity);
            return JumpOutcome::Jumped;
        }

        let rearmed = state.jump_buffer.arm(self.profile.buffer_time);
        log::debug!(
            "jump buffered for {:.3}s{}",
            self.profile.buffer_time,
            if rearmed { " (re-armed)" } else { "" }
        );
        JumpOutcome::Buffered
    }

    fn start(&self, state: &mut ControllerState, velocity: &mut Vec2) {
        let sign = state.gravity_direction.sign();
        state.current_jump_force = self.profile.impulse_force;
        velocity.y = self.profile.impulse_force * sign;
        state.is_jumping = true;
        state.is_in_coyote_time = false;
        state.jump_start_air_time = state.air_time;
        log::debug!(
            "jump from {:?} at {:.3}s airborne",
            state.physic.state,
            state.air_time
        );
    }

    /// Returns the y velocity change for this step.
    pub fn step(&self, state: &mut ControllerState, velocity_y: f32, dt: f32) -> f32 {
        if !state.is_jumping {
            return 0.0;
        }

        let jump_ratio = ratio(state.air_time - state.jump_start_air_time, self.duration);
        let deceleration = self.profile.deceleration
            * self.profile.deceleration_curve.evaluate(jump_ratio)
            * dt;
        state.current_jump_force = move_towards(state.current_jump_force, 0.0, deceleration);

        let sign = state.gravity_direction.sign();
        let delta = (state.current_jump_force - velocity_y * sign)
            .clamp(-self.profile.max_deceleration, 0.0)
            * sign;

        if jump_ratio >= 1.0 {
            state.is_jumping = false;
            state.current_jump_force = 0.0;
        }
        delta
    }
}

/// Third subscriber: landing ends any jump still rising.
pub fn cancel_on_landing(t: &mut Transition<'_>) {
    if t.to == PhysicState::Air {
        return;
    }
    t.state.is_jumping = false;
    t.state.current_jump_force = 0.0;
}

/// Fourth subscriber: a buffered request fires as soon as we land.
pub fn retry_buffered(t: &mut Transition<'_>) {
    if t.to == PhysicState::Air || !t.state.buffer_jump() {
        return;
    }
    log::debug!("buffered jump fired on landing");
    t.motors.jump.request(t.state, t.velocity);
    t.state.jump_buffer.cancel();
}
