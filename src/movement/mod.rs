//! Movement domain: smoothed top-down locomotion and pointer facing.

pub(crate) mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
pub(crate) mod dev;
mod resources;
mod smoothing;
pub(crate) mod systems;


use bevy::prelude::*;

use crate::weapon::WeaponSet;

pub use components::*;
pub use resources::*;
pub use smoothing::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Move events and pointer binding updates.
    Input,
    /// Pointer resolution, aim handoff and facing. Runs before weapon orientation.
    Aim,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MoveInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (
                    systems::read_move_input,
                    systems::apply_move_input,
                    systems::toggle_pointer_binding,
                    systems::read_touch_pointer,
                )
                    .chain()
                    .in_set(MovementSet::Input),
            )
            .add_systems(FixedUpdate, systems::apply_smoothed_velocity);

        add_aim_systems(app);
    }
}

/// Per-frame aim chain: resolve pointer, hand it to the pivot, face it.
/// Ordered ahead of `WeaponSet::Orient` so the pivot sees this frame's target.
pub(crate) fn add_aim_systems(app: &mut App) {
    app.configure_sets(
        Update,
        (MovementSet::Input, MovementSet::Aim)
            .chain()
            .before(WeaponSet::Orient),
    )
    .add_systems(
        Update,
        (
            systems::resolve_pointer_world,
            systems::publish_aim_target,
            systems::face_pointer,
        )
            .chain()
            .in_set(MovementSet::Aim),
    );
}
