use glam::Vec2;
use hecs::{Entity, World};

use crate::components::TriggerKind;
use crate::config::{ConfigError, ControllerConfig};
use crate::scene::prefabs::{spawn_ground, spawn_player, spawn_static_box, spawn_trigger};

/// Build the playground and return the player entity.
///
/// ```text
///  ############################################## ceiling (y = 9)
///  #                                       |    #
///  # P                                     |flip#
///  #=========                  ^     ###   |    #
///  #         ===================================#
///  -12       4                 20    24    34   40
/// ```
pub fn load_test_scene(world: &mut World, config: ControllerConfig) -> Result<Entity, ConfigError> {
    // Starting ledge, then a half-unit drop onto the main floor.
    spawn_ground(world, -12.0, 4.0, 0.0);
    spawn_ground(world, 4.0, 40.0, -0.5);

    // Walls and a ceiling for inverted gravity to land on.
    spawn_static_box(world, Vec2::new(-12.5, 4.5), Vec2::new(0.5, 5.5));
    spawn_static_box(world, Vec2::new(40.5, 4.5), Vec2::new(0.5, 5.5));
    spawn_static_box(world, Vec2::new(14.0, 9.5), Vec2::new(27.0, 0.5));

    // A one-unit step to hop onto.
    spawn_static_box(world, Vec2::new(24.0, 0.0), Vec2::new(1.5, 0.5));

    spawn_trigger(world, TriggerKind::Jump, Vec2::new(20.0, 0.0), Vec2::new(0.5, 0.5));
    spawn_trigger(world, TriggerKind::InvertGravity, Vec2::new(34.0, 4.0), Vec2::new(0.5, 4.0));

    spawn_player(world, Vec2::new(-8.0, 0.0), config)
}
