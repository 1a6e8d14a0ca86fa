mod collision;
mod physics;
mod player;
mod triggers;

pub use collision::{collision_system, CONTACT_SKIN};
pub use physics::{physics_step, PHYSICS_DT};
pub use player::{facing_system, grounded_system, locomotion_system, player_input_system};
pub use triggers::trigger_system;
