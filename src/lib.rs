//! 2D platformer locomotion: a per-character controller with ground
//! sensing, coyote time, jump buffering and gravity inversion, plus a small
//! headless `hecs` host that drives it through a scripted playground.

pub mod app;
pub mod camera;
pub mod components;
pub mod config;
pub mod curve;
pub mod engine;
pub mod fsm;
pub mod locomotion;
pub mod math;
pub mod scene;
pub mod systems;

pub use app::{GameApp, RunSummary};
pub use config::{ConfigError, ControllerConfig, PlaygroundConfig};
pub use locomotion::{GravityDirection, JumpOutcome, LocomotionController, PhysicState};
