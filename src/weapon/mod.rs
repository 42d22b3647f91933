//! Weapon domain: a pivot that tracks the pointer.

mod components;
pub(crate) mod systems;


use bevy::prelude::*;

pub use components::*;
pub use systems::{aim_direction, vertical_mirror};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeaponSet {
    Orient,
}

pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::orient_weapon_pivots.in_set(WeaponSet::Orient),
        );
    }
}
