//! Sanity checks for loaded tuning and level data.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.source_type, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a numeric field is strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $field:literal, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Validate tuning and level data.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(tuning: &GameplayTuning, level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &tuning.movement;
    check_positive!(errors, "MovementTuning", "base_speed", movement.base_speed);
    check_positive!(errors, "MovementTuning", "boost_multiplier", movement.boost_multiplier);
    check_positive!(errors, "MovementTuning", "dash_multiplier", movement.dash_multiplier);
    check_positive!(errors, "MovementTuning", "jump_velocity", movement.jump_velocity);
    check_positive!(errors, "MovementTuning", "wall_slide_speed", movement.wall_slide_speed);
    check_positive!(errors, "MovementTuning", "dash_duration_ms", movement.dash_duration_ms);
    check_positive!(errors, "MovementTuning", "dash_cooldown_ms", movement.dash_cooldown_ms);
    if movement.max_jumps == 0 || movement.max_jumps > 2 {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            field: "max_jumps",
            message: format!("must be 1 or 2, got {}", movement.max_jumps),
        });
    }

    let lifecycle = &tuning.lifecycle;
    if lifecycle.max_lives == 0 || lifecycle.max_lives > 3 {
        errors.push(ValidationError {
            source_type: "LifecycleTuning",
            field: "max_lives",
            message: format!("must be between 1 and 3, got {}", lifecycle.max_lives),
        });
    }
    check_positive!(errors, "LifecycleTuning", "invulnerability_ms", lifecycle.invulnerability_ms);
    check_positive!(errors, "LifecycleTuning", "boost_duration_ms", lifecycle.boost_duration_ms);
    check_positive!(errors, "LifecycleTuning", "checkpoint_interval", lifecycle.checkpoint_interval);
    check_positive!(errors, "LifecycleTuning", "fall_margin", lifecycle.fall_margin);

    let world = &tuning.world;
    check_positive!(errors, "WorldTuning", "level_width", world.level_width);
    check_positive!(errors, "WorldTuning", "gravity", world.gravity);
    let (start_x, _) = world.player_start;
    if start_x < 0.0 || start_x > world.level_width {
        errors.push(ValidationError {
            source_type: "WorldTuning",
            field: "player_start",
            message: format!("x {} is outside the level", start_x),
        });
    }

    for (index, platform) in level.platforms.iter().enumerate() {
        if platform.width <= 0.0 || platform.height <= 0.0 {
            errors.push(ValidationError {
                source_type: "PlatformDef",
                field: "size",
                message: format!(
                    "platform {} has size {}x{}",
                    index, platform.width, platform.height
                ),
            });
        }
    }

    let collectibles = &level.collectibles;
    if collectibles.count == 0 {
        errors.push(ValidationError {
            source_type: "CollectibleSpawnRule",
            field: "count",
            message: "no collectibles would spawn".to_string(),
        });
    }
    if collectibles.jitter_x < 0.0 || collectibles.jitter_y < 0.0 {
        errors.push(ValidationError {
            source_type: "CollectibleSpawnRule",
            field: "jitter",
            message: "jitter must not be negative".to_string(),
        });
    }

    let enemies = &level.enemies;
    check_positive!(errors, "EnemySpawnRule", "patrol_half_range", enemies.patrol_half_range);
    check_positive!(errors, "EnemySpawnRule", "speed", enemies.speed);
    if enemies.speed_jitter < 0.0 || enemies.speed_jitter >= enemies.speed {
        errors.push(ValidationError {
            source_type: "EnemySpawnRule",
            field: "speed_jitter",
            message: format!(
                "must be in [0, speed), got {} for speed {}",
                enemies.speed_jitter, enemies.speed
            ),
        });
    }

    errors
}
