mod character;
mod physics;

pub use character::*;
pub use physics::*;

use glam::Vec2;

/// World-space position of an entity. The playground is flat 2D, so there is
/// no hierarchy and no rotation: facing lives in [`Facing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub position: Vec2,
}

impl Transform2D {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// Previous physics-step position, stored for render interpolation.
/// Updated at the start of each physics step; the camera lerps between prev
/// and current position by the accumulator alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousPosition(pub Vec2);
