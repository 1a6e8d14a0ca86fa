use crate::config::GravityProfile;
use crate::math::{move_towards, ratio};

use super::broadcast::Transition;
use super::state::{ControllerState, PhysicState};

/// Vertical force while falling. Silent on the ground and during a jump,
/// where the jump motor owns the vertical axis.
#[derive(Debug, Clone)]
pub struct GravityMotor {
    profile: GravityProfile,
}

impl GravityMotor {
    pub fn new(profile: GravityProfile) -> Self {
        Self { profile }
    }

    /// Close the coyote window once the air time passes it.
    pub fn expire_coyote(&self, state: &mut ControllerState) {
        if state.is_in_coyote_time && state.air_time > self.profile.coyote_time {
            log::debug!("coyote time over at {:.3}s airborne", state.air_time);
            state.is_in_coyote_time = false;
        }
    }

    /// Returns the y velocity change for this step.
    pub fn step(&self, state: &mut ControllerState, velocity_y: f32, dt: f32) -> f32 {
        if state.is_grounded() || state.is_jumping {
            return 0.0;
        }

        // The coyote curve shapes the whole fall, not only the coyote window.
        let coyote_ratio = ratio(state.air_time, self.profile.coyote_time);
        let acceleration =
            self.profile.acceleration * self.profile.coyote_curve.evaluate(coyote_ratio) * dt;

        let sign = state.gravity_direction.sign();
        state.current_gravity =
            move_towards(state.current_gravity, self.profile.max_force * sign, acceleration);

        // Evaluated in the gravity-aligned frame so an inverted body is pulled up.
        let delta = ((state.current_gravity - velocity_y) * sign)
            .clamp(-self.profile.max_acceleration, 0.0);
        delta * sign
    }
}

/// Second subscriber: landing clears accumulated gravity, vertical speed and air time.
pub fn reset_on_landing(t: &mut Transition<'_>) {
    if t.to == PhysicState::Air {
        return;
    }
    t.state.current_gravity = 0.0;
    t.velocity.y = 0.0;
    t.state.air_time = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;

    fn airborne(air_time: f32) -> ControllerState {
        let mut state = ControllerState::new();
        state.detect_ground(false);
        state.air_time = air_time;
        state
    }

    fn motor() -> GravityMotor {
        GravityMotor::new(GravityProfile {
            max_force: -20.0,
            acceleration: 100.0,
            max_acceleration: 1.5,
            coyote_time: 0.2,
            coyote_curve: Curve::constant(1.0),
        })
    }

    #[test]
    fn silent_when_grounded_or_jumping() {
        let motor = motor();
        let mut state = ControllerState::new();
        assert_eq!(motor.step(&mut state, 0.0, 0.1), 0.0);

        let mut state = airborne(0.1);
        state.is_jumping = true;
        assert_eq!(motor.step(&mut state, 0.0, 0.1), 0.0);
        assert_eq!(state.current_gravity, 0.0);
    }

    #[test]
    fn pulls_down_at_most_max_acceleration() {
        let motor = motor();
        let mut state = airborne(0.5);

        let delta = motor.step(&mut state, 0.0, 0.1);
        assert_eq!(state.current_gravity, -10.0);
        assert_eq!(delta, -1.5);

        // Already falling faster than the current gravity: no upward push.
        let delta = motor.step(&mut state, -30.0, 0.1);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn inverted_gravity_pulls_up() {
        let motor = motor();
        let mut state = airborne(0.5);
        state.gravity_direction = state.gravity_direction.inverted();

        let delta = motor.step(&mut state, 0.0, 0.1);
        assert_eq!(state.current_gravity, 10.0);
        assert_eq!(delta, 1.5);
    }

    #[test]
    fn coyote_curve_applies_outside_coyote_window() {
        let mut profile = motor().profile;
        profile.coyote_curve = Curve::constant(0.5);
        let motor = GravityMotor::new(profile);

        // Coyote window already closed, the curve still scales acceleration.
        let mut state = airborne(1.0);
        state.is_in_coyote_time = false;
        motor.step(&mut state, 0.0, 0.1);
        assert_eq!(state.current_gravity, -5.0);
    }

    #[test]
    fn coyote_expires_strictly_after_window() {
        let motor = motor();
        let mut state = airborne(0.2);
        motor.expire_coyote(&mut state);
        assert!(state.is_in_coyote_time);

        state.air_time = 0.25;
        motor.expire_coyote(&mut state);
        assert!(!state.is_in_coyote_time);
    }
}
