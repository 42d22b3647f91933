use bevy::prelude::*;

/// Rotates its entity toward `target` every frame.
///
/// `target` is written by the owning `MotionController` before orientation runs.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct WeaponPivot {
    /// Aim point in world space.
    pub target: Vec2,
}
