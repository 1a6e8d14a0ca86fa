use glam::Vec2;
use hecs::{Entity, World};

use crate::camera::FollowCamera;
use crate::components::{Facing, LocomotionStats, PreviousPosition, Transform2D};
use crate::config::{CameraConfig, ConfigError, PlaygroundConfig};
use crate::engine::input::{InputScript, InputState};
use crate::engine::time::FixedTimestep;
use crate::locomotion::{GravityDirection, LocomotionController, PhysicState};
use crate::scene::test_scene::load_test_scene;
use crate::systems::{
    collision_system, facing_system, grounded_system, locomotion_system, physics_step,
    player_input_system, trigger_system, PHYSICS_DT,
};

/// Where the player ended up and what happened on the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub ticks: usize,
    pub stats: LocomotionStats,
    pub final_position: Vec2,
    pub final_state: PhysicState,
    pub gravity_direction: GravityDirection,
    /// Mesh yaw in degrees.
    pub facing: f32,
    pub camera_x: f32,
}

/// Headless game loop: scripted input per render frame, locomotion and
/// physics per fixed tick, cosmetic updates per render frame.
pub struct GameApp {
    world: World,
    player: Entity,
    camera: FollowCamera,
    script: InputScript,
    input: InputState,
    timestep: FixedTimestep,
    frame_dt: f32,
}

impl GameApp {
    pub fn new(
        mut world: World,
        player: Entity,
        camera: &CameraConfig,
        script: InputScript,
        frame_rate: f32,
    ) -> Self {
        // Contact pass before the first tick, so a player spawned on the
        // floor starts grounded.
        let events = collision_system(&mut world);
        grounded_system(&mut world, &events);

        let start = world
            .get::<&Transform2D>(player)
            .map(|t| t.position)
            .unwrap_or(Vec2::ZERO);

        Self {
            world,
            player,
            camera: FollowCamera::new(camera, start),
            script,
            input: InputState::new(),
            timestep: FixedTimestep::new(PHYSICS_DT),
            frame_dt: 1.0 / frame_rate,
        }
    }

    /// The demo playground. An empty input list in `config` falls back to
    /// the built-in script.
    pub fn playground(config: PlaygroundConfig, frame_rate: f32) -> Result<Self, ConfigError> {
        let mut world = World::new();
        let player = load_test_scene(&mut world, config.controller)?;

        let script = if config.input.is_empty() {
            log::debug!("no input script configured, using the built-in playground run");
            InputScript::playground()
        } else {
            InputScript::new(config.input)
        };

        Ok(Self::new(world, player, &config.camera, script, frame_rate))
    }

    /// Run for `duration` simulated seconds and report the outcome.
    pub fn run(&mut self, duration: f32) -> RunSummary {
        let frames = (duration / self.frame_dt).ceil().max(0.0) as usize;
        log::info!(
            "running {} frames at {:.1} Hz ({:.2}s)",
            frames,
            1.0 / self.frame_dt,
            duration
        );

        let mut ticks = 0;
        for _ in 0..frames {
            ticks += self.frame();
        }

        let summary = self.summary(frames, ticks);
        log::info!(
            "done: {} jumps, {} landings, ended {:?} at ({:.2}, {:.2})",
            summary.stats.jumps,
            summary.stats.landings,
            summary.final_state,
            summary.final_position.x,
            summary.final_position.y
        );
        summary
    }

    /// One render frame. Returns the number of physics ticks it ran.
    fn frame(&mut self) -> usize {
        let ticks = self.timestep.advance(self.frame_dt);

        self.input.update(&mut self.script, self.timestep.elapsed);
        player_input_system(&mut self.world, &self.input);

        for _ in 0..ticks {
            locomotion_system(&mut self.world, PHYSICS_DT);
            physics_step(&mut self.world);
            let events = collision_system(&mut self.world);
            grounded_system(&mut self.world, &events);
            trigger_system(&mut self.world);
        }

        facing_system(&mut self.world, self.frame_dt);

        // Follow the interpolated position so the camera moves smoothly
        // between fixed physics ticks.
        let alpha = self.timestep.alpha();
        let player_pos = match (
            self.world.get::<&Transform2D>(self.player),
            self.world.get::<&PreviousPosition>(self.player),
        ) {
            (Ok(current), Ok(prev)) => prev.0.lerp(current.position, alpha),
            (Ok(current), _) => current.position,
            _ => self.camera.position,
        };
        self.camera.follow(player_pos.x, self.frame_dt);

        ticks
    }

    fn summary(&self, frames: usize, ticks: usize) -> RunSummary {
        let position = self
            .world
            .get::<&Transform2D>(self.player)
            .map(|t| t.position)
            .unwrap_or(Vec2::ZERO);
        let stats = self
            .world
            .get::<&LocomotionStats>(self.player)
            .map(|s| *s)
            .unwrap_or_default();
        let facing = self
            .world
            .get::<&Facing>(self.player)
            .map(|f| f.0)
            .unwrap_or(0.0);
        let (final_state, gravity_direction) = self
            .world
            .get::<&LocomotionController>(self.player)
            .map(|c| (c.physic_state(), c.gravity_direction()))
            .unwrap_or((PhysicState::Air, GravityDirection::Down));

        RunSummary {
            frames,
            ticks,
            stats,
            final_position: position,
            final_state,
            gravity_direction,
            facing,
            camera_x: self.camera.position.x,
        }
    }
}
