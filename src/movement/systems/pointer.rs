//! Movement domain: pointer resolution and aim handoff.

use bevy::math::primitives::InfinitePlane3d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::movement::{MainCamera, MotionController, MovementState, PointerBinding};
use crate::weapon::WeaponPivot;

/// Pick the screen position for this frame: a live binding wins over the cursor.
pub(crate) fn pick_screen_position(
    binding: Option<&PointerBinding>,
    cursor: Option<Vec2>,
) -> Option<Vec2> {
    binding.and_then(PointerBinding::read).or(cursor)
}

/// Project a viewport position onto the plane `z = depth`.
pub(crate) fn screen_to_world(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    screen: Vec2,
    depth: f32,
) -> Option<Vec2> {
    let ray = camera.viewport_to_world(camera_transform, screen).ok()?;
    let distance = ray.intersect_plane(
        Vec3::new(0.0, 0.0, depth),
        InfinitePlane3d::new(Vec3::Z),
    )?;
    Some(ray.get_point(distance).truncate())
}

/// Recompute each controller's pointer world position.
/// Without a camera or a pointer the cached position is kept.
pub(crate) fn resolve_pointer_world(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut controllers: Query<
        (&Transform, &mut MovementState, Option<&PointerBinding>),
        With<MotionController>,
    >,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let cursor = windows.single().ok().and_then(Window::cursor_position);

    for (transform, mut state, binding) in &mut controllers {
        let Some(screen) = pick_screen_position(binding, cursor) else {
            continue;
        };

        match screen_to_world(camera, camera_transform, screen, transform.translation.z) {
            Some(world) => state.pointer_world = world,
            None => debug!("Pointer at {:?} did not project into the world", screen),
        }
    }
}

/// Hand the resolved pointer position to the linked weapon pivot.
pub(crate) fn publish_aim_target(
    controllers: Query<(&MotionController, &MovementState)>,
    mut pivots: Query<&mut WeaponPivot>,
) {
    for (controller, state) in &controllers {
        let Some(weapon) = controller.weapon else {
            continue;
        };
        if let Ok(mut pivot) = pivots.get_mut(weapon) {
            pivot.target = state.pointer_world;
        }
    }
}
