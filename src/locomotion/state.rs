use crate::fsm::StateMachine;

use super::jump::JumpBuffer;

/// Grounded/airborne dichotomy tracked by the ground sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicState {
    Ground,
    Air,
}

/// Which movement profile drives the horizontal motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Ground,
    Air,
    Sprint,
}

impl ProfileKind {
    /// Airborne always uses the air profile; sprint only overrides ground.
    pub fn select(physic: PhysicState, sprinting: bool) -> Self {
        match (physic, sprinting) {
            (PhysicState::Air, _) => Self::Air,
            (PhysicState::Ground, true) => Self::Sprint,
            (PhysicState::Ground, false) => Self::Ground,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityDirection {
    Down,
    Up,
}

impl GravityDirection {
    /// +1 for normal gravity, -1 when inverted.
    pub fn sign(self) -> f32 {
        match self {
            Self::Down => 1.0,
            Self::Up => -1.0,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

/// Mutable per-character state. Only `LocomotionController` holds a mutable
/// reference; everyone else reads it through `LocomotionController::state`.
#[derive(Debug, Clone)]
pub struct ControllerState {
    pub physic: StateMachine<PhysicState>,
    pub profile: ProfileKind,
    /// Smoothed target horizontal speed.
    pub horizontal_velocity: f32,
    /// Last external input, read at the next step.
    pub movement_input: f32,
    pub current_gravity: f32,
    pub gravity_direction: GravityDirection,
    /// Seconds since the last ground contact. Reset only on landing.
    pub air_time: f32,
    pub is_in_coyote_time: bool,
    pub current_jump_force: f32,
    pub is_jumping: bool,
    pub jump_start_air_time: f32,
    pub jump_buffer: JumpBuffer,
    pub is_sprinting: bool,
}

impl ControllerState {
    /// Characters spawn grounded, on the ground profile.
    pub fn new() -> Self {
        Self {
            physic: StateMachine::new(PhysicState::Ground),
            profile: ProfileKind::Ground,
            horizontal_velocity: 0.0,
            movement_input: 0.0,
            current_gravity: 0.0,
            gravity_direction: GravityDirection::Down,
            air_time: 0.0,
            is_in_coyote_time: false,
            current_jump_force: 0.0,
            is_jumping: false,
            jump_start_air_time: 0.0,
            jump_buffer: JumpBuffer::default(),
            is_sprinting: false,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.physic.state == PhysicState::Ground
    }

    pub fn buffer_jump(&self) -> bool {
        self.jump_buffer.is_armed()
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
