use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::config::{ConfigError, ControllerConfig};
use crate::locomotion::LocomotionController;

/// Player collider half size: a 0.8 x 1.8 box.
const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(0.4, 0.9);

/// Static box described by its centre and half size.
pub fn spawn_static_box(world: &mut World, center: Vec2, half_extents: Vec2) -> Entity {
    world.spawn((
        Transform2D::new(center),
        Collider::Box { half_extents },
        Static,
    ))
}

/// Flat ground whose top surface sits at `top`, spanning `[left, right]`.
pub fn spawn_ground(world: &mut World, left: f32, right: f32, top: f32) -> Entity {
    let half_extents = Vec2::new((right - left) * 0.5, 0.5);
    let center = Vec2::new((left + right) * 0.5, top - half_extents.y);
    spawn_static_box(world, center, half_extents)
}

pub fn spawn_trigger(
    world: &mut World,
    kind: TriggerKind,
    center: Vec2,
    half_extents: Vec2,
) -> Entity {
    world.spawn((Transform2D::new(center), TriggerZone::new(kind, half_extents)))
}

/// Spawn the player with its feet at `feet`. Fails if the controller
/// configuration is rejected.
pub fn spawn_player(
    world: &mut World,
    feet: Vec2,
    config: ControllerConfig,
) -> Result<Entity, ConfigError> {
    let controller = LocomotionController::new(config)?;
    let center = feet + Vec2::new(0.0, PLAYER_HALF_EXTENTS.y);
    Ok(world.spawn((
        Player,
        Transform2D::new(center),
        PreviousPosition(center),
        Velocity(Vec2::ZERO),
        Collider::Box {
            half_extents: PLAYER_HALF_EXTENTS,
        },
        controller,
        Facing(90.0),
        LocomotionStats::default(),
    )))
}
