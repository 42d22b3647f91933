//! Debug overlay for tuning aim and movement (dev-tools builds only).
//!
//! Features:
//! - F3 toggles the aim overlay
//! - Gizmos for the pointer, the pivot aim line and the body velocity
//! - A walled test arena spawned at startup

mod state;
mod systems;


use bevy::prelude::*;

use crate::movement::dev::spawn_test_arena;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_test_arena)
            .add_systems(
                Update,
                (systems::toggle_debug_overlay, systems::draw_aim_gizmos).chain(),
            );
    }
}
