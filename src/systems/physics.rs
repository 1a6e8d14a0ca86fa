use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{PreviousPosition, Static, Transform2D, Velocity};

pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Integrate one fixed step. There is no engine gravity: vertical forces come
/// from the locomotion controller, which has already written into `Velocity`.
pub fn physics_step(world: &mut World) {
    // Snapshot previous positions for render interpolation.
    // Collect first (drops the borrow), then insert/update.
    let prev_snapshots: Vec<(Entity, Vec2)> = world
        .query::<&Transform2D>()
        .with::<&Velocity>()
        .without::<&Static>()
        .iter()
        .map(|(e, t)| (e, t.position))
        .collect();

    // insert_one replaces the component if it already exists.
    for (entity, pos) in prev_snapshots {
        let _ = world.insert_one(entity, PreviousPosition(pos));
    }

    for (_entity, (transform, vel)) in world
        .query_mut::<(&mut Transform2D, &Velocity)>()
        .without::<&Static>()
    {
        transform.position += vel.0 * PHYSICS_DT;
    }
}
