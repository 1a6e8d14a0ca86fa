/// Marker: this entity is the player.
pub struct Player;

/// Cosmetic mesh yaw in degrees (90 = facing right, 270 = facing left),
/// copied from the locomotion controller every render step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub f32);

/// Per-player counters surfaced in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocomotionStats {
    pub jumps: u32,
    pub buffered: u32,
    pub landings: u32,
    pub takeoffs: u32,
}
