use glam::Vec2;
use hecs::World;

use crate::components::{CollisionEvent, Facing, Grounded, LocomotionStats, Player, Velocity};
use crate::engine::input::{InputEvent, InputState};
use crate::locomotion::{JumpOutcome, LocomotionController, PhysicState, StepInputs};

/// Minimum alignment between a contact normal and "up" for the contact to
/// count as ground (about 45 degrees).
const GROUND_NORMAL_DOT: f32 = 0.7;

/// Route this frame's input to every player controller. Runs once per render
/// frame, before the fixed ticks; the controller reads it at the next step.
pub fn player_input_system(world: &mut World, input: &InputState) {
    for (_e, (controller, vel, stats)) in world
        .query_mut::<(&mut LocomotionController, &mut Velocity, &mut LocomotionStats)>()
        .with::<&Player>()
    {
        controller.set_movement_input(input.move_axis);
        for event in &input.events {
            match event {
                InputEvent::Move(_) => {}
                InputEvent::Jump => record_jump(stats, controller.request_jump(&mut vel.0)),
                InputEvent::ToggleSprint => controller.toggle_sprint(),
                InputEvent::InvertGravity => controller.invert_gravity(),
            }
        }
    }
}

pub(crate) fn record_jump(stats: &mut LocomotionStats, outcome: JumpOutcome) {
    match outcome {
        JumpOutcome::Jumped => stats.jumps += 1,
        JumpOutcome::Buffered => stats.buffered += 1,
    }
}

/// One fixed step of every locomotion controller. The `Grounded` marker from
/// the previous step's contacts is the ground query.
pub fn locomotion_system(world: &mut World, dt: f32) {
    for (_e, (controller, vel, stats, grounded)) in world.query_mut::<(
        &mut LocomotionController,
        &mut Velocity,
        &mut LocomotionStats,
        Option<&Grounded>,
    )>() {
        let report = controller.step_physics(
            dt,
            StepInputs {
                touching_ground: grounded.is_some(),
            },
            &mut vel.0,
        );

        match report.transition {
            Some(PhysicState::Ground) => {
                stats.landings += 1;
                // Landing cancels any rising jump, so a jump now is the
                // buffered one fired by the landing broadcast.
                if controller.is_jumping() {
                    stats.jumps += 1;
                }
            }
            Some(PhysicState::Air) => stats.takeoffs += 1,
            None => {}
        }
    }
}

/// Rebuild `Grounded` from this step's contacts. A contact counts when the
/// surface faces against the player's current gravity, so an inverted player
/// stands on ceilings.
pub fn grounded_system(world: &mut World, events: &[CollisionEvent]) {
    let players: Vec<_> = world
        .query_mut::<&Player>()
        .with::<&Grounded>()
        .into_iter()
        .map(|(e, _)| e)
        .collect();
    for entity in players {
        let _ = world.remove_one::<Grounded>(entity);
    }

    for event in events {
        let Ok(controller) = world.get::<&LocomotionController>(event.entity_a) else {
            continue;
        };
        let up = Vec2::new(0.0, controller.gravity_direction().sign());
        let grounded = (-event.contact_normal).dot(up) > GROUND_NORMAL_DOT;
        drop(controller);

        if grounded {
            let _ = world.insert_one(event.entity_a, Grounded);
        }
    }
}

/// Render-rate cosmetic update: turn the mesh toward the direction of travel.
pub fn facing_system(world: &mut World, dt: f32) {
    for (_e, (controller, facing)) in
        world.query_mut::<(&mut LocomotionController, &mut Facing)>()
    {
        controller.step_render(dt);
        facing.0 = controller.mesh_yaw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::engine::input::{InputAction, InputScript, ScriptedInput};
    use crate::systems::PHYSICS_DT;

    fn spawn_player(world: &mut World) -> hecs::Entity {
        world.spawn((
            Player,
            LocomotionController::new(ControllerConfig::default()).unwrap(),
            Velocity(Vec2::ZERO),
            LocomotionStats::default(),
            Facing(90.0),
        ))
    }

    fn contact(player: hecs::Entity, other: hecs::Entity, normal: Vec2) -> CollisionEvent {
        CollisionEvent {
            entity_a: player,
            entity_b: other,
            contact_normal: normal,
            penetration_depth: 0.0,
        }
    }

    #[test]
    fn floor_contact_grounds_player() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        let floor = world.spawn(());

        grounded_system(&mut world, &[contact(player, floor, Vec2::NEG_Y)]);
        assert!(world.get::<&Grounded>(player).is_ok());

        // Wall contact only: grounded is cleared.
        grounded_system(&mut world, &[contact(player, floor, Vec2::X)]);
        assert!(world.get::<&Grounded>(player).is_err());
    }

    #[test]
    fn inverted_player_stands_on_ceiling() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        let ceiling = world.spawn(());
        world
            .get::<&mut LocomotionController>(player)
            .unwrap()
            .invert_gravity();

        grounded_system(&mut world, &[contact(player, ceiling, Vec2::Y)]);
        assert!(world.get::<&Grounded>(player).is_ok());

        grounded_system(&mut world, &[contact(player, ceiling, Vec2::NEG_Y)]);
        assert!(world.get::<&Grounded>(player).is_err());
    }

    #[test]
    fn jump_input_reaches_controller() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        let mut script = InputScript::new(vec![
            ScriptedInput::new(0.0, InputAction::Move, 1.0),
            ScriptedInput::new(0.0, InputAction::Jump, 0.0),
        ]);
        let mut input = InputState::new();
        input.update(&mut script, 0.0);

        player_input_system(&mut world, &input);

        let controller = world.get::<&LocomotionController>(player).unwrap();
        assert!(controller.is_jumping());
        assert_eq!(controller.state().movement_input, 1.0);
        assert_eq!(world.get::<&Velocity>(player).unwrap().0.y, 12.0);
        assert_eq!(world.get::<&LocomotionStats>(player).unwrap().jumps, 1);
    }

    #[test]
    fn locomotion_counts_takeoff_and_landing() {
        let mut world = World::new();
        let player = spawn_player(&mut world);

        locomotion_system(&mut world, PHYSICS_DT);
        world.insert_one(player, Grounded).unwrap();
        locomotion_system(&mut world, PHYSICS_DT);

        let stats = *world.get::<&LocomotionStats>(player).unwrap();
        assert_eq!(stats.takeoffs, 1);
        assert_eq!(stats.landings, 1);
    }
}
