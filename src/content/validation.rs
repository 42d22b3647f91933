//! Range checks for loaded config values.

use super::data::{PLAYER_SCHEMA_VERSION, PlayerConfig};

/// A validation error naming the offending field.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player.{}: {}", self.field, self.message)
    }
}

macro_rules! check_positive {
    ($errors:expr, $value:expr, $field:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be a positive number, got {}", $value),
            });
        }
    };
}

/// Validate a player config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_player_config(config: &PlayerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != PLAYER_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                PLAYER_SCHEMA_VERSION, config.schema_version
            ),
        });
    }

    // Zero speed is allowed (a rooted player still aims)
    if !(config.speed.is_finite() && config.speed >= 0.0) {
        errors.push(ValidationError {
            field: "speed",
            message: format!("must be finite and >= 0, got {}", config.speed),
        });
    }

    check_positive!(errors, config.body_size.x, "body_size.x");
    check_positive!(errors, config.body_size.y, "body_size.y");
    check_positive!(errors, config.weapon_size.x, "weapon_size.x");
    check_positive!(errors, config.weapon_size.y, "weapon_size.y");

    if !config.weapon_offset.is_finite() {
        errors.push(ValidationError {
            field: "weapon_offset",
            message: "must be finite".to_string(),
        });
    }

    errors
}
