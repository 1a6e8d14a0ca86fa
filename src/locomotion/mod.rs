//! Per-character locomotion: ground sensing, horizontal movement, gravity
//! with coyote time, and jumping with buffering and cancellation.
//!
//! The controller is advanced once per fixed physics step by an external
//! driver. Input and trigger calls land between steps and are read at the
//! next one, last write wins.

mod broadcast;
mod gravity;
mod ground;
mod horizontal;
mod jump;
mod state;

use glam::Vec2;

use crate::config::{ConfigError, ControllerConfig, JumpProfile, MovementProfile};
use crate::math::move_towards;

pub use broadcast::{StateBroadcaster, Transition, TransitionHandler};
pub use gravity::GravityMotor;
pub use horizontal::HorizontalMotor;
pub use jump::{JumpBuffer, JumpMotor, JumpOutcome};
pub use state::{ControllerState, GravityDirection, PhysicState, ProfileKind};

/// Mesh yaw (degrees) when facing right / left.
const FACING_RIGHT: f32 = 90.0;
const FACING_LEFT: f32 = 270.0;

/// The three force producers. Immutable after construction, apart from
/// swapping the jump profile through `LocomotionController::set_jump_profile`.
#[derive(Debug, Clone)]
pub struct Motors {
    pub horizontal: HorizontalMotor,
    pub gravity: GravityMotor,
    pub jump: JumpMotor,
}

impl Motors {
    pub fn new(config: &ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            horizontal: HorizontalMotor::new(
                config.ground.clone(),
                config.air.clone(),
                config.sprint.clone(),
            ),
            gravity: GravityMotor::new(config.gravity.clone()),
            jump: JumpMotor::new(config.jump.clone())?,
        })
    }
}

/// External readings consumed by one physics step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInputs {
    /// Result of the ground contact query for this step.
    pub touching_ground: bool,
}

/// What one physics step did. Every field is a velocity change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub transition: Option<PhysicState>,
    pub horizontal: f32,
    pub gravity: f32,
    pub jump: f32,
}

impl StepReport {
    /// Total change applied to the body this step.
    pub fn force(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.gravity + self.jump)
    }
}

pub struct LocomotionController {
    motors: Motors,
    broadcaster: StateBroadcaster,
    state: ControllerState,
    last_transition: Option<PhysicState>,
    mesh_yaw: f32,
    mesh_rotation_speed: f32,
}

impl LocomotionController {
    /// Validate `config`, compute the jump duration and wire the landing
    /// handlers in their required order.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        let motors = Motors::new(&config)?;

        let mut broadcaster = StateBroadcaster::new();
        broadcaster.subscribe("switch_profile", horizontal::switch_profile);
        broadcaster.subscribe("reset_gravity", gravity::reset_on_landing);
        broadcaster.subscribe("cancel_jump", jump::cancel_on_landing);
        broadcaster.subscribe("retry_buffered_jump", jump::retry_buffered);

        Ok(Self {
            motors,
            broadcaster,
            state: ControllerState::new(),
            last_transition: None,
            mesh_yaw: FACING_RIGHT,
            mesh_rotation_speed: config.mesh_rotation_speed,
        })
    }

    /// Advance one fixed step. `velocity` is the rigid body's velocity; the
    /// summed force is added to it once, at the end.
    pub fn step_physics(&mut self, dt: f32, inputs: StepInputs, velocity: &mut Vec2) -> StepReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.state.physic.tick(dt);
        if self.state.jump_buffer.tick(dt) {
            log::debug!("buffered jump expired");
        }

        let transition = self.state.detect_ground(inputs.touching_ground);
        if let Some(to) = transition {
            self.broadcaster.emit(&mut Transition {
                to,
                motors: &self.motors,
                state: &mut self.state,
                velocity: &mut *velocity,
            });
        }

        if !self.state.is_grounded() {
            self.state.air_time += dt;
        }
        self.motors.gravity.expire_coyote(&mut self.state);

        let report = StepReport {
            transition,
            horizontal: self.motors.horizontal.step(&mut self.state, velocity.x, dt),
            gravity: self.motors.gravity.step(&mut self.state, velocity.y, dt),
            jump: self.motors.jump.step(&mut self.state, velocity.y, dt),
        };
        *velocity += report.force();
        self.last_transition = transition;
        report
    }

    /// Cosmetic: turn the mesh toward the direction of travel.
    pub fn step_render(&mut self, dt: f32) {
        let speed = self.state.horizontal_velocity;
        if speed == 0.0 || !dt.is_finite() {
            return;
        }
        let target = if speed > 0.0 { FACING_RIGHT } else { FACING_LEFT };
        self.mesh_yaw = move_towards(self.mesh_yaw, target, self.mesh_rotation_speed * dt.max(0.0));
    }

    /// Clamped to [-1, 1]; NaN reads as no input.
    pub fn set_movement_input(&mut self, input: f32) {
        self.state.movement_input = if input.is_nan() {
            0.0
        } else {
            input.clamp(-1.0, 1.0)
        };
    }

    pub fn request_jump(&mut self, velocity: &mut Vec2) -> JumpOutcome {
        self.motors.jump.request(&mut self.state, velocity)
    }

    pub fn toggle_sprint(&mut self) {
        let state = &mut self.state;
        state.is_sprinting = !state.is_sprinting;
        state.profile = ProfileKind::select(state.physic.state, state.is_sprinting);
        log::debug!("sprint {}", if state.is_sprinting { "on" } else { "off" });
    }

    pub fn invert_gravity(&mut self) {
        self.state.gravity_direction = self.state.gravity_direction.inverted();
        log::debug!("gravity now {:?}", self.state.gravity_direction);
    }

    /// Swap the jump tuning. The duration is recomputed; an invalid profile
    /// leaves the current one in place.
    pub fn set_jump_profile(&mut self, profile: JumpProfile) -> Result<(), ConfigError> {
        self.motors.jump = JumpMotor::new(profile)?;
        Ok(())
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn physic_state(&self) -> PhysicState {
        self.state.physic.state
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded()
    }

    /// True only for the step that landed.
    pub fn just_landed(&self) -> bool {
        self.last_transition == Some(PhysicState::Ground)
    }

    pub fn just_left_ground(&self) -> bool {
        self.last_transition == Some(PhysicState::Air)
    }

    pub fn is_jumping(&self) -> bool {
        self.state.is_jumping
    }

    pub fn gravity_direction(&self) -> GravityDirection {
        self.state.gravity_direction
    }

    pub fn horizontal_velocity(&self) -> f32 {
        self.state.horizontal_velocity
    }

    pub fn active_profile(&self) -> &MovementProfile {
        self.motors.horizontal.profile(self.state.profile)
    }

    pub fn jump_duration(&self) -> f32 {
        self.motors.jump.duration()
    }

    pub fn mesh_yaw(&self) -> f32 {
        self.mesh_yaw
    }

    pub fn broadcaster(&self) -> &StateBroadcaster {
        &self.broadcaster
    }
}
