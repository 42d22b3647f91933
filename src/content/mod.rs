//! Content domain: data-driven player config loaded from RON.

pub mod data;
pub mod loader;
pub mod validation;


use bevy::prelude::*;
use std::path::PathBuf;

pub use data::*;
pub use loader::load_player_config;
pub use validation::validate_player_config;

/// Where config files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlayerConfig>()
            .init_resource::<ContentPaths>()
            .init_resource::<PlayerConfig>()
            .add_systems(PreStartup, load_player_content);
    }
}

/// Load and validate player.ron, keeping defaults on any failure.
pub(crate) fn load_player_content(paths: Res<ContentPaths>, mut config: ResMut<PlayerConfig>) {
    let loaded = match load_player_config(&paths.data_dir) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default player config", e);
            return;
        }
    };

    let errors = validate_player_config(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid player config: {}", error);
        }
        warn!("Player config rejected, using defaults");
        return;
    }

    info!(
        "Loaded player config: speed={}, spawn=({}, {}), pointer_binding={}",
        loaded.speed, loaded.spawn.x, loaded.spawn.y, loaded.pointer_binding_enabled
    );
    *config = loaded;
}
