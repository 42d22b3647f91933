use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether aim gizmos are drawn
    pub show_overlay: bool,
}

impl DebugState {
    pub fn toggle(&mut self) -> bool {
        self.show_overlay = !self.show_overlay;
        self.show_overlay
    }
}
