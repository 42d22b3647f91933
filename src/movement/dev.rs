//! Movement domain: debug-only arena for trying out locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Component, Debug)]
pub struct Wall;

pub(crate) fn spawn_test_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let pillar_color = Color::srgb(0.5, 0.4, 0.3);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // (center, size, color)
    let blocks = [
        // Outer walls
        (Vec2::new(0.0, 300.0), Vec2::new(840.0, 30.0), wall_color),
        (Vec2::new(0.0, -300.0), Vec2::new(840.0, 30.0), wall_color),
        (Vec2::new(-420.0, 0.0), Vec2::new(30.0, 630.0), wall_color),
        (Vec2::new(420.0, 0.0), Vec2::new(30.0, 630.0), wall_color),
        // Pillars to steer around
        (Vec2::new(-180.0, 120.0), Vec2::new(60.0, 60.0), pillar_color),
        (Vec2::new(200.0, -90.0), Vec2::new(80.0, 40.0), pillar_color),
    ];

    for (center, size, color) in blocks {
        commands.spawn((
            Wall,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }
}
