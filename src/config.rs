//! Tunable profiles and TOML loading.
//!
//! Profiles are plain data. `ControllerConfig::validate` is the only gate
//! between a config file and the step path: anything that would produce
//! NaN or infinity during simulation is rejected here.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::curve::Curve;
use crate::engine::input::ScriptedInput;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("jump.impulse_force must be non-zero")]
    ZeroImpulse,
    #[error("jump duration (height / impulse_force) must be finite and non-negative, got {0}")]
    InvalidJumpDuration(f32),
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Horizontal movement tuning. One of ground / air / sprint is active at a time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementProfile {
    /// Target speed at full input (units/second).
    pub max_speed: f32,
    /// Rate the smoothed velocity approaches the target (units/second²).
    pub acceleration: f32,
    /// Largest velocity change applied to the body in one step.
    pub max_acceleration: f32,
    /// Remaps the clamped velocity dot, range [-1, 1].
    pub acceleration_curve: Curve,
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self::ground()
    }
}

impl MovementProfile {
    pub fn ground() -> Self {
        Self {
            max_speed: 8.0,
            acceleration: 60.0,
            max_acceleration: 2.0,
            acceleration_curve: Curve::constant(1.0),
        }
    }

    pub fn air() -> Self {
        Self {
            max_speed: 6.0,
            acceleration: 30.0,
            max_acceleration: 1.0,
            acceleration_curve: Curve::constant(1.0),
        }
    }

    pub fn sprint() -> Self {
        Self {
            max_speed: 12.0,
            acceleration: 80.0,
            max_acceleration: 3.0,
            acceleration_curve: Curve::constant(1.0),
        }
    }

    fn validate(&self, prefix: &'static [&'static str; 3]) -> Result<(), ConfigError> {
        finite(prefix[0], self.max_speed)?;
        non_negative(prefix[1], self.acceleration)?;
        non_negative(prefix[2], self.max_acceleration)
    }
}

/// Custom gravity tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GravityProfile {
    /// Terminal vertical speed. Negative pulls down when gravity is not inverted.
    pub max_force: f32,
    pub acceleration: f32,
    pub max_acceleration: f32,
    /// Seconds after leaving the ground during which a jump still counts.
    pub coyote_time: f32,
    /// Remaps `air_time / coyote_time`, range [0, 1].
    pub coyote_curve: Curve,
}

impl Default for GravityProfile {
    fn default() -> Self {
        Self {
            max_force: -20.0,
            acceleration: 60.0,
            max_acceleration: 1.5,
            coyote_time: 0.12,
            coyote_curve: Curve::constant(1.0),
        }
    }
}

impl GravityProfile {
    fn validate(&self) -> Result<(), ConfigError> {
        finite("gravity.max_force", self.max_force)?;
        non_negative("gravity.acceleration", self.acceleration)?;
        non_negative("gravity.max_acceleration", self.max_acceleration)?;
        non_negative("gravity.coyote_time", self.coyote_time)
    }
}

/// Jump tuning. `height / impulse_force` gives the jump duration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JumpProfile {
    pub impulse_force: f32,
    pub deceleration: f32,
    pub max_deceleration: f32,
    /// Remaps the elapsed fraction of the jump, range [0, 1].
    pub deceleration_curve: Curve,
    pub height: f32,
    /// Seconds a buffered jump request stays armed.
    pub buffer_time: f32,
}

impl Default for JumpProfile {
    fn default() -> Self {
        Self {
            impulse_force: 12.0,
            deceleration: 40.0,
            max_deceleration: 2.0,
            deceleration_curve: Curve::identity(),
            height: 3.0,
            buffer_time: 0.15,
        }
    }
}

impl JumpProfile {
    /// Validate and return the jump duration in seconds.
    pub fn duration(&self) -> Result<f32, ConfigError> {
        finite("jump.impulse_force", self.impulse_force)?;
        finite("jump.height", self.height)?;
        non_negative("jump.deceleration", self.deceleration)?;
        non_negative("jump.max_deceleration", self.max_deceleration)?;
        non_negative("jump.buffer_time", self.buffer_time)?;
        if self.impulse_force == 0.0 {
            return Err(ConfigError::ZeroImpulse);
        }
        let duration = self.height / self.impulse_force;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidJumpDuration(duration));
        }
        Ok(duration)
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Everything a `LocomotionController` needs at construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub ground: MovementProfile,
    pub air: MovementProfile,
    pub sprint: MovementProfile,
    pub gravity: GravityProfile,
    pub jump: JumpProfile,
    /// Cosmetic mesh turn rate (degrees/second).
    pub mesh_rotation_speed: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ground: MovementProfile::ground(),
            air: MovementProfile::air(),
            sprint: MovementProfile::sprint(),
            gravity: GravityProfile::default(),
            jump: JumpProfile::default(),
            mesh_rotation_speed: 720.0,
        }
    }
}

impl ControllerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ground.validate(&[
            "ground.max_speed",
            "ground.acceleration",
            "ground.max_acceleration",
        ])?;
        self.air
            .validate(&["air.max_speed", "air.acceleration", "air.max_acceleration"])?;
        self.sprint.validate(&[
            "sprint.max_speed",
            "sprint.acceleration",
            "sprint.max_acceleration",
        ])?;
        self.gravity.validate()?;
        self.jump.duration()?;
        non_negative("mesh_rotation_speed", self.mesh_rotation_speed)
    }
}

// ---------------------------------------------------------------------------
// Camera + playground file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// `x` bounds the offset on the left, `y` on the right.
    pub max_offset: Vec2,
    pub follow_speed: f32,
    /// Remaps the absolute offset into a speed factor. Negative values pull
    /// the camera back toward the target.
    pub speed_curve: Curve,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_offset: Vec2::new(3.0, 3.0),
            follow_speed: 4.0,
            speed_curve: Curve::ramp(3.0, 0.0, -2.0),
        }
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("camera.max_offset.x", self.max_offset.x)?;
        non_negative("camera.max_offset.y", self.max_offset.y)?;
        finite("camera.follow_speed", self.follow_speed)
    }
}

/// Top-level file read by the binary: controller tuning, camera tuning and
/// an optional scripted input timeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub controller: ControllerConfig,
    pub camera: CameraConfig,
    pub input: Vec<ScriptedInput>,
}

impl PlaygroundConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.controller.validate()?;
        config.camera.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ControllerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.jump.duration().unwrap(), 0.25);
    }

    #[test]
    fn parse_partial_config() {
        let config = ControllerConfig::from_toml_str(
            r#"
            [jump]
            impulse_force = 10.0
            height = 5.0

            [gravity]
            coyote_time = 0.2
            coyote_curve = [[0.0, 0.5], [1.0, 1.0]]
            "#,
        )
        .unwrap();
        assert_eq!(config.jump.duration().unwrap(), 0.5);
        assert_eq!(config.jump.buffer_time, 0.15);
        assert_eq!(config.gravity.coyote_time, 0.2);
        assert_eq!(config.gravity.coyote_curve.evaluate(0.5), 0.75);
        assert_eq!(config.ground, MovementProfile::ground());
    }

    #[test]
    fn rejects_zero_impulse() {
        let err = ControllerConfig::from_toml_str("[jump]\nimpulse_force = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroImpulse));
    }

    #[test]
    fn rejects_negative_jump_duration() {
        let err = ControllerConfig::from_toml_str("[jump]\nimpulse_force = -4.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJumpDuration(_)));
    }

    #[test]
    fn rejects_malformed_curve() {
        let err = ControllerConfig::from_toml_str("[air]\nacceleration_curve = []").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_negative_coyote_time() {
        let err = ControllerConfig::from_toml_str("[gravity]\ncoyote_time = -0.1").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "gravity.coyote_time",
                ..
            }
        ));
    }

    #[test]
    fn parse_playground_with_script() {
        let config = PlaygroundConfig::from_toml_str(
            r#"
            [controller.jump]
            buffer_time = 0.2

            [camera]
            follow_speed = 2.0

            [[input]]
            at = 0.5
            action = "move"
            value = 1.0

            [[input]]
            at = 1.0
            action = "jump"
            "#,
        )
        .unwrap();
        assert_eq!(config.controller.jump.buffer_time, 0.2);
        assert_eq!(config.camera.follow_speed, 2.0);
        assert_eq!(config.input.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PlaygroundConfig::from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
