//! Critically damped smoothing for move input.

use bevy::prelude::*;

/// Time constant used to smooth raw move input. Short enough that direction
/// changes feel immediate.
pub const MOVE_SMOOTH_TIME: f32 = 0.1;

/// Smallest accepted smoothing time.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target` like a critically damped spring.
///
/// `velocity` is the spring state and must be carried between calls.
/// `max_speed` caps how fast the output may change (`f32::INFINITY` for no cap).
/// The result never passes `target`; when it would, it lands exactly on it and
/// `velocity` is zeroed. A non-positive `dt` leaves everything untouched.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec2 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Pade-style approximation of exp(-omega * dt)
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let original_target = target;
    let mut change = current - target;

    let max_change = max_speed * smooth_time;
    if max_change.is_finite() {
        change = change.clamp_length_max(max_change);
    }
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    let to_target = original_target - current;
    let past_target = output - original_target;
    if to_target.dot(past_target) > 0.0 {
        output = original_target;
        *velocity = Vec2::ZERO;
    }

    output
}
