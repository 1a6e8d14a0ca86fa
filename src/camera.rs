use glam::Vec2;

use crate::config::CameraConfig;
use crate::curve::Curve;

/// Side-scrolling camera that trails the player horizontally. Only x is
/// driven; y stays where it was placed.
pub struct FollowCamera {
    pub position: Vec2,
    max_offset: Vec2,
    follow_speed: f32,
    speed_curve: Curve,
}

impl FollowCamera {
    pub fn new(config: &CameraConfig, position: Vec2) -> Self {
        Self {
            position,
            max_offset: config.max_offset,
            follow_speed: config.follow_speed,
            speed_curve: config.speed_curve.clone(),
        }
    }

    /// Current horizontal offset from `target_x`.
    pub fn offset(&self, target_x: f32) -> f32 {
        self.position.x - target_x
    }

    /// Advance the offset along its own sign by `follow_speed * curve(|offset|) * dt`,
    /// then clamp it to `[-max_offset.x, max_offset.y]`.
    pub fn follow(&mut self, target_x: f32, dt: f32) {
        let offset = self.offset(target_x);
        let sign = if offset < 0.0 { -1.0 } else { 1.0 };

        let speed = self.follow_speed * self.speed_curve.evaluate(offset * sign) * dt;
        let new_offset = (offset + speed * sign).clamp(-self.max_offset.x, self.max_offset.y);

        self.position.x = target_x + new_offset;
    }
}
