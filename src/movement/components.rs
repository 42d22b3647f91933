//! Movement domain: components for locomotion and pointer aim.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Arena walls and obstacles
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Drives a character from move input and faces it toward the pointer.
///
/// Every link is optional; a missing target skips that behavior.
#[derive(Component, Debug, Clone)]
pub struct MotionController {
    /// Velocity scale for the smoothed move input.
    pub speed: f32,
    /// Entity carrying a `WeaponPivot` that receives the pointer position.
    pub weapon: Option<Entity>,
    /// Sprite to flip horizontally. Falls back to the controller's own sprite.
    pub renderer: Option<Entity>,
}

impl MotionController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            weapon: None,
            renderer: None,
        }
    }

    pub fn with_weapon(mut self, weapon: Entity) -> Self {
        self.weapon = Some(weapon);
        self
    }
}

#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    /// Raw direction from the latest move event.
    pub move_input: Vec2,
    pub smoothed_input: Vec2,
    /// Spring state for `smooth_damp`, kept for the entity's lifetime.
    pub smoothing_velocity: Vec2,
    /// Last resolved pointer position in world space.
    pub pointer_world: Vec2,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Bound pointer source (touch, pen, remapped device) in viewport coordinates.
/// Preferred over the window cursor while enabled and reporting a position.
#[derive(Component, Debug, Clone, Default)]
pub struct PointerBinding {
    pub enabled: bool,
    pub screen_position: Option<Vec2>,
}

impl PointerBinding {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            screen_position: None,
        }
    }

    /// Position to use this frame, if the binding is live.
    pub fn read(&self) -> Option<Vec2> {
        if self.enabled {
            self.screen_position
        } else {
            None
        }
    }
}
