//! Movement domain: input messages and the main camera marker.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Move event carrying a 2D direction, each axis typically in [-1, 1].
/// Values are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveInput(pub Vec2);

impl Message for MoveInput {}

/// Camera used to project the pointer into the world.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

/// Stick values below this are treated as centered.
pub const GAMEPAD_DEADZONE: f32 = 0.15;
