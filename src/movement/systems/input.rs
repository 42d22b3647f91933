//! Movement domain: input sampling for locomotion and pointer binding.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{GAMEPAD_DEADZONE, MotionController, MoveInput, MovementState, PointerBinding};

/// Digital move axis from WASD / arrow keys, normalized so diagonals are unit length.
pub(crate) fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    Vec2::new(x, y).normalize_or_zero()
}

/// Radial deadzone for analog sticks.
pub(crate) fn stick_axis(raw: Vec2) -> Vec2 {
    if raw.length() < GAMEPAD_DEADZONE {
        Vec2::ZERO
    } else {
        raw.clamp_length_max(1.0)
    }
}

/// Sample keyboard, then the first gamepad, and emit a `MoveInput` when the axis changes.
pub(crate) fn read_move_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    gamepads: Query<&Gamepad>,
    mut last_axis: Local<Vec2>,
    mut writer: MessageWriter<MoveInput>,
) {
    let mut axis = keyboard
        .as_deref()
        .map(keyboard_axis)
        .unwrap_or(Vec2::ZERO);

    if axis == Vec2::ZERO {
        if let Some(gamepad) = gamepads.iter().next() {
            axis = stick_axis(gamepad.left_stick());
        }
    }

    if axis != *last_axis {
        *last_axis = axis;
        writer.write(MoveInput(axis));
    }
}

/// Store the latest move event as the raw smoothing target.
pub(crate) fn apply_move_input(
    mut events: MessageReader<MoveInput>,
    mut controllers: Query<&mut MovementState, With<MotionController>>,
) {
    let Some(MoveInput(axis)) = events.read().last().copied() else {
        return;
    };

    for mut state in &mut controllers {
        state.move_input = axis;
    }
}

/// Feed the first active touch into pointer bindings.
/// When the last finger lifts the binding clears and the cursor takes over again.
pub(crate) fn read_touch_pointer(
    touches: Option<Res<Touches>>,
    mut bindings: Query<&mut PointerBinding>,
) {
    let Some(touches) = touches else {
        return;
    };
    let position = touches.first_pressed_position();

    for mut binding in &mut bindings {
        if binding.screen_position != position {
            binding.screen_position = position;
        }
    }
}

/// F2 toggles the pointer binding on and off.
pub(crate) fn toggle_pointer_binding(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut bindings: Query<&mut PointerBinding>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for mut binding in &mut bindings {
        binding.enabled = !binding.enabled;
        info!(
            "Pointer binding {}",
            if binding.enabled { "enabled" } else { "disabled" }
        );
    }
}
