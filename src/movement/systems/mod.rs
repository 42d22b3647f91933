//! Movement domain: system modules for locomotion and aim.

pub(crate) mod facing;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod pointer;

pub(crate) use facing::face_pointer;
pub(crate) use input::{
    apply_move_input, read_move_input, read_touch_pointer, toggle_pointer_binding,
};
pub(crate) use movement::apply_smoothed_velocity;
pub(crate) use pointer::{publish_aim_target, resolve_pointer_world};
