use crate::config::MovementProfile;
use crate::math::move_towards;

use super::broadcast::Transition;
use super::state::{ControllerState, ProfileKind};

/// Horizontal force from movement input, shaped by the active profile.
#[derive(Debug, Clone)]
pub struct HorizontalMotor {
    ground: MovementProfile,
    air: MovementProfile,
    sprint: MovementProfile,
}

impl HorizontalMotor {
    pub fn new(ground: MovementProfile, air: MovementProfile, sprint: MovementProfile) -> Self {
        Self { ground, air, sprint }
    }

    pub fn profile(&self, kind: ProfileKind) -> &MovementProfile {
        match kind {
            ProfileKind::Ground => &self.ground,
            ProfileKind::Air => &self.air,
            ProfileKind::Sprint => &self.sprint,
        }
    }

    /// Returns the x velocity change for this step.
    pub fn step(&self, state: &mut ControllerState, velocity_x: f32, dt: f32) -> f32 {
        let profile = self.profile(state.profile);

        let target_speed = profile.max_speed * state.movement_input;
        // Not normalised: the curve sees the raw product clamped to [-1, 1].
        let velocity_dot = (velocity_x * target_speed).clamp(-1.0, 1.0);
        let remapped = profile.acceleration_curve.evaluate(velocity_dot);
        let acceleration = profile.acceleration * remapped * dt;

        state.horizontal_velocity =
            move_towards(state.horizontal_velocity, target_speed, acceleration.abs());

        (state.horizontal_velocity - velocity_x)
            .clamp(-profile.max_acceleration, profile.max_acceleration)
    }
}

/// First subscriber: pick the profile for the new state.
pub fn switch_profile(t: &mut Transition<'_>) {
    t.state.profile = ProfileKind::select(t.to, t.state.is_sprinting);
}
