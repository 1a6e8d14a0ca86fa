use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    Collider, LocomotionStats, Player, Transform2D, TriggerKind, TriggerZone, Velocity,
};
use crate::locomotion::LocomotionController;

use super::player::record_jump;

fn overlaps(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    let gap = (b_pos - a_pos).abs() - (a_half + b_half);
    gap.x < 0.0 && gap.y < 0.0
}

/// Fire trigger zones on entry. A zone stays quiet while the player remains
/// inside and re-arms once the player leaves.
pub fn trigger_system(world: &mut World) {
    let players: Vec<(Entity, Vec2, Vec2)> = world
        .query::<(&Transform2D, &Collider)>()
        .with::<&Player>()
        .iter()
        .map(|(e, (t, c))| (e, t.position, c.half_extents()))
        .collect();

    let mut fired: Vec<(Entity, TriggerKind)> = Vec::new();
    for (_e, (transform, zone)) in world.query_mut::<(&Transform2D, &mut TriggerZone)>() {
        let inside = players.iter().find(|(_, pos, half)| {
            overlaps(*pos, *half, transform.position, zone.half_extents)
        });
        match inside {
            Some(&(player, _, _)) if !zone.occupied => {
                zone.occupied = true;
                fired.push((player, zone.kind));
            }
            Some(_) => {}
            None => zone.occupied = false,
        }
    }

    for (player, kind) in fired {
        let Ok((controller, vel, stats)) = world.query_one_mut::<(
            &mut LocomotionController,
            &mut Velocity,
            &mut LocomotionStats,
        )>(player) else {
            continue;
        };
        log::debug!("trigger {:?} fired", kind);
        match kind {
            TriggerKind::Jump => record_jump(stats, controller.request_jump(&mut vel.0)),
            TriggerKind::InvertGravity => controller.invert_gravity(),
        }
    }
}
