//! Movement domain: fixed-tick smoothing and velocity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MOVE_SMOOTH_TIME, MotionController, MovementState, smooth_damp};

/// Smooth the raw move input and drive the body with it.
/// Smoothing advances even when the entity has no physics body.
pub(crate) fn apply_smoothed_velocity(
    time: Res<Time>,
    mut query: Query<(
        &MotionController,
        &mut MovementState,
        Option<&mut LinearVelocity>,
    )>,
) {
    let dt = time.delta_secs();

    for (controller, mut state, velocity) in &mut query {
        let state = &mut *state;
        state.smoothed_input = smooth_damp(
            state.smoothed_input,
            state.move_input,
            &mut state.smoothing_velocity,
            MOVE_SMOOTH_TIME,
            f32::INFINITY,
            dt,
        );

        if let Some(mut velocity) = velocity {
            velocity.0 = state.smoothed_input * controller.speed;
        }
    }
}
