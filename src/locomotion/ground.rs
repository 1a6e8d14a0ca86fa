//! Ground sensor: turns the external "is touching ground" query into
//! grounded/airborne transitions.

use super::state::{ControllerState, PhysicState};

impl ControllerState {
    /// Compare the contact query against the stored state and return the
    /// transition, if any. Leaving the ground without a jump opens the coyote
    /// window; landing closes it.
    pub fn detect_ground(&mut self, touching_ground: bool) -> Option<PhysicState> {
        let next = if touching_ground {
            PhysicState::Ground
        } else {
            PhysicState::Air
        };

        let was_in_state = self.physic.elapsed;
        if !self.physic.go(next) {
            return None;
        }

        match next {
            PhysicState::Air => self.is_in_coyote_time = !self.is_jumping,
            PhysicState::Ground => self.is_in_coyote_time = false,
        }

        log::debug!(
            "{:?} -> {:?} after {:.3}s",
            self.physic.previous,
            next,
            was_in_state
        );
        Some(next)
    }
}
