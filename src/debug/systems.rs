//! Debug domain: overlay toggle and gizmo drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::DebugState;
use crate::movement::{MotionController, MovementState};
use crate::weapon::WeaponPivot;

const POINTER_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
const AIM_COLOR: Color = Color::srgb(1.0, 0.35, 0.3);
const VELOCITY_COLOR: Color = Color::srgb(0.3, 0.9, 0.5);

/// Velocity arrows are drawn this many seconds long.
const VELOCITY_ARROW_SECS: f32 = 0.25;

/// Toggle the overlay with F3
pub(crate) fn toggle_debug_overlay(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut debug_state: ResMut<DebugState>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F3) {
        let visible = debug_state.toggle();
        info!("Debug overlay {}", if visible { "on" } else { "off" });
    }
}

pub(crate) fn draw_aim_gizmos(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    controllers: Query<(&Transform, &MovementState, Option<&LinearVelocity>), With<MotionController>>,
    pivots: Query<(&WeaponPivot, &GlobalTransform)>,
) {
    if !debug_state.show_overlay {
        return;
    }

    for (transform, state, velocity) in &controllers {
        let origin = transform.translation.truncate();
        gizmos.circle_2d(state.pointer_world, 6.0, POINTER_COLOR);

        if let Some(velocity) = velocity {
            gizmos.arrow_2d(origin, origin + velocity.0 * VELOCITY_ARROW_SECS, VELOCITY_COLOR);
        }
    }

    for (pivot, global) in &pivots {
        gizmos.line_2d(global.translation().truncate(), pivot.target, AIM_COLOR);
    }
}
