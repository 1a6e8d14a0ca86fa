use glam::Vec2;
use hecs::Entity;

/// Linear velocity in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Collision shape attached to an entity. Positions are box centres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Box { half_extents: Vec2 },
}

impl Collider {
    pub fn half_extents(&self) -> Vec2 {
        match self {
            Collider::Box { half_extents } => *half_extents,
        }
    }
}

/// Marker: entity is immovable (infinite mass for collision response).
pub struct Static;

/// Contact produced by the detection phase. `entity_a` is always the
/// dynamic body, `entity_b` the static one.
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub entity_a: Entity,
    pub entity_b: Entity,
    /// Unit axis pointing from `entity_a` toward `entity_b`.
    pub contact_normal: Vec2,
    /// Zero for a resting contact inside the skin tolerance.
    pub penetration_depth: f32,
}

/// Marker: entity is touching the ground (rebuilt every physics step).
pub struct Grounded;

/// What a trigger zone does to the player on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Jump,
    InvertGravity,
}

/// Non-solid box that fires once each time the player enters it.
#[derive(Debug, Clone, Copy)]
pub struct TriggerZone {
    pub kind: TriggerKind,
    pub half_extents: Vec2,
    /// Whether the player overlapped the zone last step.
    pub occupied: bool,
}

impl TriggerZone {
    pub fn new(kind: TriggerKind, half_extents: Vec2) -> Self {
        Self {
            kind,
            half_extents,
            occupied: false,
        }
    }
}
