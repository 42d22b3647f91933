//! Movement domain: face the character toward the pointer.

use bevy::prelude::*;

use crate::movement::{Facing, MotionController, MovementState};

/// Sprite flip for a pointer at `target_x` seen from `own_x`.
pub(crate) fn sprite_flip(target_x: f32, own_x: f32) -> bool {
    target_x < own_x
}

/// Mirror the magnitude of `scale_x` to the sign of `dx`. Zero keeps the current scale.
pub(crate) fn mirrored_scale_x(scale_x: f32, dx: f32) -> f32 {
    if dx < 0.0 {
        -scale_x.abs()
    } else if dx > 0.0 {
        scale_x.abs()
    } else {
        scale_x
    }
}

fn facing_toward(dx: f32, current: Facing) -> Facing {
    if dx < 0.0 {
        Facing::Left
    } else if dx > 0.0 {
        Facing::Right
    } else {
        current
    }
}

/// Flip the linked renderer (or the controller's own sprite) toward the pointer.
/// With no sprite at all, mirror the horizontal scale instead.
pub(crate) fn face_pointer(
    mut controllers: Query<(
        Entity,
        &MotionController,
        &mut MovementState,
        &mut Transform,
        Option<&mut Sprite>,
    )>,
    mut renderers: Query<&mut Sprite, Without<MotionController>>,
) {
    for (entity, controller, mut state, mut transform, own_sprite) in &mut controllers {
        let target_x = state.pointer_world.x;
        let own_x = transform.translation.x;
        let flip = sprite_flip(target_x, own_x);

        let linked = controller.renderer.and_then(|e| renderers.get_mut(e).ok());
        if let Some(mut sprite) = linked {
            sprite.flip_x = flip;
        } else if let Some(mut sprite) = own_sprite {
            sprite.flip_x = flip;
        } else {
            transform.scale.x = mirrored_scale_x(transform.scale.x, target_x - own_x);
        }

        let facing = facing_toward(target_x - own_x, state.facing);
        if facing != state.facing {
            debug!("{:?} now facing {:?}", entity, facing);
            state.facing = facing;
        }
    }
}
