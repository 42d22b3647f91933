//! Data definitions for the player RON config.
//!
//! Mirrors the structure of assets/data/player.ron.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Schema version this build understands.
pub const PLAYER_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ColorDef {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl From<ColorDef> for Color {
    fn from(c: ColorDef) -> Self {
        Color::srgb(c.r, c.g, c.b)
    }
}

/// Player tuning and spawn layout (player.ron).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[reflect(Resource)]
pub struct PlayerConfig {
    pub schema_version: u32,
    /// Velocity scale applied to the smoothed move input.
    pub speed: f32,
    pub spawn: Vec2Def,
    pub body_size: Vec2Def,
    pub body_color: ColorDef,
    /// Pivot-local offset of the weapon sprite along the aim axis.
    pub weapon_offset: f32,
    pub weapon_size: Vec2Def,
    pub weapon_color: ColorDef,
    /// Whether the touch pointer binding starts enabled.
    #[serde(default = "default_true")]
    pub pointer_binding_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            schema_version: PLAYER_SCHEMA_VERSION,
            speed: 220.0,
            spawn: Vec2Def { x: 0.0, y: 0.0 },
            body_size: Vec2Def { x: 28.0, y: 36.0 },
            body_color: ColorDef {
                r: 0.9,
                g: 0.9,
                b: 0.9,
            },
            weapon_offset: 22.0,
            weapon_size: Vec2Def { x: 26.0, y: 6.0 },
            weapon_color: ColorDef {
                r: 0.75,
                g: 0.6,
                b: 0.3,
            },
            pointer_binding_enabled: true,
        }
    }
}
