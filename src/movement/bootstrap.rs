//! Movement domain: player bootstrap from the loaded config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlayerConfig;
use crate::movement::{GameLayer, MotionController, MovementState, Player, PointerBinding};
use crate::weapon::WeaponPivot;

/// Spawn the player with its weapon pivot as a child.
/// Runs at Startup, after `ContentPlugin` has loaded player.ron.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body_size: Vec2 = config.body_size.into();
    let weapon_size: Vec2 = config.weapon_size.into();
    let spawn: Vec2 = config.spawn.into();

    // Pivot sits at the body center; the weapon sprite hangs off its +X axis
    let pivot = commands
        .spawn((
            Name::new("WeaponPivot"),
            WeaponPivot::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_child((
            Sprite {
                color: config.weapon_color.into(),
                custom_size: Some(weapon_size),
                ..default()
            },
            Transform::from_xyz(config.weapon_offset, 0.0, 0.1),
        ))
        .id();

    let player = commands
        .spawn((
            // Identity & control
            (
                Name::new("Player"),
                Player,
                MotionController::new(config.speed).with_weapon(pivot),
                MovementState::default(),
                PointerBinding::new(config.pointer_binding_enabled),
            ),
            // Rendering
            Sprite {
                color: config.body_color.into(),
                custom_size: Some(body_size),
                ..default()
            },
            Transform::from_translation(spawn.extend(0.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(body_size.x, body_size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Wall]),
            ),
        ))
        .add_child(pivot)
        .id();

    info!(
        "Spawned player {:?} at ({}, {}) with speed {}",
        player, spawn.x, spawn.y, config.speed
    );
}
