//! Core domain: camera, simulation rate and world setup.

mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Rate of the fixed simulation tick that drives locomotion.
pub const FIXED_HZ: f64 = 64.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            // Top-down: nothing falls
            .insert_resource(Gravity::ZERO)
            .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.14)))
            .add_systems(Startup, systems::setup_camera);
    }
}
