use glam::Vec2;
use hecs::{Entity, World};

use coyote::components::TriggerKind;
use coyote::config::{CameraConfig, ControllerConfig, PlaygroundConfig};
use coyote::engine::input::{InputAction, InputScript, ScriptedInput};
use coyote::scene::prefabs::{spawn_ground, spawn_player, spawn_static_box, spawn_trigger};
use coyote::{GameApp, GravityDirection, PhysicState};

const FRAME_RATE: f32 = 60.0;

fn flat_floor(world: &mut World) -> Entity {
    spawn_ground(world, -20.0, 20.0, 0.0);
    spawn_player(world, Vec2::ZERO, ControllerConfig::default()).unwrap()
}

fn app(world: World, player: Entity, script: Vec<ScriptedInput>) -> GameApp {
    GameApp::new(
        world,
        player,
        &CameraConfig::default(),
        InputScript::new(script),
        FRAME_RATE,
    )
}

#[test]
fn resting_player_stays_grounded() {
    let mut world = World::new();
    let player = flat_floor(&mut world);

    let summary = app(world, player, vec![]).run(1.0);
    assert_eq!(summary.final_state, PhysicState::Ground);
    assert_eq!(summary.stats.takeoffs, 0);
    assert_eq!(summary.stats.landings, 0);
    assert!((summary.final_position.y - 0.9).abs() < 1e-3);
}

#[test]
fn jump_takes_off_and_lands() {
    let mut world = World::new();
    let player = flat_floor(&mut world);
    let script = vec![ScriptedInput::new(0.0, InputAction::Jump, 0.0)];

    let summary = app(world, player, script).run(2.0);
    assert_eq!(summary.stats.jumps, 1);
    assert_eq!(summary.stats.takeoffs, 1);
    assert_eq!(summary.stats.landings, 1);
    assert_eq!(summary.final_state, PhysicState::Ground);
    assert!((summary.final_position.y - 0.9).abs() < 1e-3);
}

#[test]
fn walking_off_a_ledge_drops_to_the_floor_below() {
    let mut world = World::new();
    spawn_ground(&mut world, -20.0, 2.0, 0.0);
    spawn_ground(&mut world, 2.0, 20.0, -0.5);
    let player = spawn_player(&mut world, Vec2::ZERO, ControllerConfig::default()).unwrap();
    let script = vec![ScriptedInput::new(0.0, InputAction::Move, 1.0)];

    let summary = app(world, player, script).run(2.0);
    assert_eq!(summary.stats.jumps, 0);
    assert_eq!(summary.stats.takeoffs, 1);
    assert_eq!(summary.stats.landings, 1);
    assert_eq!(summary.final_state, PhysicState::Ground);
    assert!(summary.final_position.x > 2.4);
    assert!((summary.final_position.y - 0.4).abs() < 1e-3);
    // Camera trails within its offset bounds.
    assert!((summary.camera_x - summary.final_position.x).abs() < 3.5);
}

#[test]
fn gravity_zone_puts_player_on_the_ceiling() {
    let mut world = World::new();
    spawn_ground(&mut world, -5.0, 5.0, 0.0);
    spawn_static_box(&mut world, Vec2::new(0.0, 3.5), Vec2::new(5.0, 0.5));
    spawn_trigger(
        &mut world,
        TriggerKind::InvertGravity,
        Vec2::new(0.0, 1.0),
        Vec2::splat(1.0),
    );
    let player = spawn_player(&mut world, Vec2::ZERO, ControllerConfig::default()).unwrap();

    let summary = app(world, player, vec![]).run(1.0);
    assert_eq!(summary.gravity_direction, GravityDirection::Up);
    assert_eq!(summary.final_state, PhysicState::Ground);
    assert_eq!(summary.stats.takeoffs, 1);
    assert_eq!(summary.stats.landings, 1);
    // Head against the ceiling's underside at y = 3.
    assert!((summary.final_position.y - 2.1).abs() < 1e-3);
}

#[test]
fn jump_pad_launches_a_walking_player() {
    let mut world = World::new();
    spawn_ground(&mut world, -10.0, 10.0, 0.0);
    spawn_trigger(
        &mut world,
        TriggerKind::Jump,
        Vec2::new(3.0, 0.5),
        Vec2::splat(0.5),
    );
    let player = spawn_player(&mut world, Vec2::ZERO, ControllerConfig::default()).unwrap();
    let script = vec![ScriptedInput::new(0.0, InputAction::Move, 1.0)];

    let summary = app(world, player, script).run(1.0);
    assert_eq!(summary.stats.jumps, 1);
    assert_eq!(summary.stats.takeoffs, 1);
}

#[test]
fn mesh_turns_to_face_travel() {
    let mut world = World::new();
    let player = flat_floor(&mut world);
    let script = vec![ScriptedInput::new(0.0, InputAction::Move, -1.0)];

    let summary = app(world, player, script).run(1.0);
    assert_eq!(summary.facing, 270.0);
    assert!(summary.final_position.x < 0.0);
}

#[test]
fn built_in_playground_runs_to_completion() {
    let mut app = GameApp::playground(PlaygroundConfig::default(), 144.0).unwrap();
    let summary = app.run(8.0);

    assert!(summary.frames >= 1152);
    assert!(summary.ticks >= 479);
    assert!(summary.stats.jumps >= 1);
    assert!(summary.stats.landings >= 1);
    assert!(summary.final_position.is_finite());
    assert!(summary.final_position.x > -8.0);
}

#[test]
fn sample_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/playground.toml");
    let config = PlaygroundConfig::from_file(&path).unwrap();

    assert_eq!(config.controller, ControllerConfig::default());
    assert_eq!(config.camera, CameraConfig::default());
    assert_eq!(config.input.len(), 6);

    let summary = GameApp::playground(config, FRAME_RATE).unwrap().run(6.0);
    assert!(summary.stats.jumps >= 1);
    assert!(summary.final_position.is_finite());
}
