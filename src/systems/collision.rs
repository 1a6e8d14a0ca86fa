use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Collider, CollisionEvent, Static, Transform2D, Velocity};

/// Gap under which two boxes count as touching. Keeps a body resting on the
/// floor in contact even though nothing pushes it into the floor.
pub const CONTACT_SKIN: f32 = 0.01;

struct ColliderEntry {
    entity: Entity,
    position: Vec2,
    half_extents: Vec2,
}

/// All returned normals point from `a` (dynamic) toward `b` (static).
fn test_pair(a: &ColliderEntry, b: &ColliderEntry) -> Option<CollisionEvent> {
    let diff = b.position - a.position;
    let overlap = (a.half_extents + b.half_extents) - diff.abs();
    if overlap.x <= -CONTACT_SKIN || overlap.y <= -CONTACT_SKIN {
        return None;
    }
    // A box that is only inside the skin on both axes is a corner graze.
    if overlap.x <= 0.0 && overlap.y <= 0.0 {
        return None;
    }

    // Separate along the axis of least overlap.
    let (contact_normal, depth) = if overlap.x < overlap.y {
        (Vec2::new(diff.x.signum(), 0.0), overlap.x)
    } else {
        (Vec2::new(0.0, diff.y.signum()), overlap.y)
    };

    Some(CollisionEvent {
        entity_a: a.entity,
        entity_b: b.entity,
        contact_normal,
        penetration_depth: depth.max(0.0),
    })
}

fn gather(world: &World, want_static: bool) -> Vec<ColliderEntry> {
    world
        .query::<(&Transform2D, &Collider, Option<&Static>)>()
        .iter()
        .filter(|(_, (_, _, stat))| stat.is_some() == want_static)
        .map(|(entity, (transform, collider, _))| ColliderEntry {
            entity,
            position: transform.position,
            half_extents: collider.half_extents(),
        })
        .collect()
}

/// Detect dynamic-vs-static box contacts, push dynamic bodies out and remove
/// the velocity component pointing into the surface. Returns every contact,
/// including resting ones with zero depth.
pub fn collision_system(world: &mut World) -> Vec<CollisionEvent> {
    let statics = gather(world, true);
    let mut dynamics = gather(world, false);
    let mut events = Vec::new();

    for body in &mut dynamics {
        for wall in &statics {
            let Some(event) = test_pair(body, wall) else {
                continue;
            };

            // Resolve immediately so later walls see the corrected position.
            body.position -= event.contact_normal * event.penetration_depth;
            events.push(event);
        }
    }

    for body in &dynamics {
        if let Ok(mut transform) = world.get::<&mut Transform2D>(body.entity) {
            transform.position = body.position;
        }
    }

    for event in &events {
        if let Ok(mut vel) = world.get::<&mut Velocity>(event.entity_a) {
            let n = event.contact_normal;
            let vel_along_n = vel.0.dot(n);
            // Positive = A moving toward B (into collision)
            if vel_along_n > 0.0 {
                vel.0 -= vel_along_n * n;
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(world: &mut World) -> Entity {
        world.spawn((
            Transform2D::new(Vec2::new(0.0, -0.5)),
            Collider::Box {
                half_extents: Vec2::new(10.0, 0.5),
            },
            Static,
        ))
    }

    fn body(world: &mut World, y: f32, vy: f32) -> Entity {
        world.spawn((
            Transform2D::new(Vec2::new(0.0, y)),
            Velocity(Vec2::new(1.0, vy)),
            Collider::Box {
                half_extents: Vec2::new(0.5, 0.5),
            },
        ))
    }

    #[test]
    fn pushes_body_out_of_floor() {
        let mut world = World::new();
        let ground = floor(&mut world);
        let player = body(&mut world, 0.3, -5.0);

        let events = collision_system(&mut world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity_b, ground);
        assert_eq!(events[0].contact_normal, Vec2::new(0.0, -1.0));

        let pos = world.get::<&Transform2D>(player).unwrap().position;
        assert!((pos.y - 0.5).abs() < 1e-5);
        assert_eq!(world.get::<&Velocity>(player).unwrap().0, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn resting_contact_is_reported() {
        let mut world = World::new();
        floor(&mut world);
        body(&mut world, 0.505, 0.0);

        let events = collision_system(&mut world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].penetration_depth, 0.0);
    }

    #[test]
    fn separated_body_has_no_contact() {
        let mut world = World::new();
        floor(&mut world);
        body(&mut world, 1.0, 0.0);
        assert!(collision_system(&mut world).is_empty());
    }
}
