//! Weapon domain: pivot orientation toward the aim point.

use bevy::prelude::*;

use super::WeaponPivot;

/// Unit direction from `origin` to `target`, or `None` when they coincide.
pub fn aim_direction(origin: Vec2, target: Vec2) -> Option<Vec2> {
    (target - origin).try_normalize()
}

/// Vertical scale that keeps weapon art upright for `direction`.
/// `None` when aiming straight up or down: the previous sign stays.
pub fn vertical_mirror(direction: Vec2) -> Option<f32> {
    if direction.x < 0.0 {
        Some(-1.0)
    } else if direction.x > 0.0 {
        Some(1.0)
    } else {
        None
    }
}

/// World translation of a pivot from this frame's `Transform`s up its parent chain.
///
/// `GlobalTransform` is only refreshed in `PostUpdate`, after the body has moved.
pub(crate) fn current_world_translation(
    local: &Transform,
    child_of: Option<&ChildOf>,
    ancestors: &Query<(&Transform, Option<&ChildOf>), Without<WeaponPivot>>,
) -> Vec3 {
    let mut global = GlobalTransform::from(*local);
    let mut parent = child_of.map(ChildOf::parent);

    while let Some(entity) = parent {
        let Ok((transform, next)) = ancestors.get(entity) else {
            break;
        };
        global = *transform * global;
        parent = next.map(ChildOf::parent);
    }

    global.translation()
}

/// Point each pivot's local +X axis at its target and mirror it vertically
/// when aiming left.
pub(crate) fn orient_weapon_pivots(
    mut pivots: Query<(&WeaponPivot, &mut Transform, Option<&ChildOf>)>,
    ancestors: Query<(&Transform, Option<&ChildOf>), Without<WeaponPivot>>,
) {
    for (pivot, mut transform, child_of) in &mut pivots {
        let origin = current_world_translation(&transform, child_of, &ancestors).truncate();
        // Target on top of the pivot: hold the last pose
        let Some(direction) = aim_direction(origin, pivot.target) else {
            continue;
        };

        transform.rotation = Quat::from_rotation_z(direction.to_angle());
        if let Some(sign) = vertical_mirror(direction) {
            transform.scale.y = sign;
        }
    }
}
