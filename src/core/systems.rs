//! Core domain: startup systems.

use bevy::prelude::*;

use crate::movement::MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2d, MainCamera));
}
