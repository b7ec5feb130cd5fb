//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Every `Default` impl matches the
//! shipped data so the game stays playable if a file cannot be read.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Resource)]
pub struct GameplayTuning {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub lifecycle: LifecycleTuning,
    pub world: WorldTuning,
    pub presentation: PresentationTuning,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement: MovementTuning::default(),
            lifecycle: LifecycleTuning::default(),
            world: WorldTuning::default(),
            presentation: PresentationTuning::default(),
        }
    }
}

/// Player locomotion constants. Speeds are in world units per second,
/// durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementTuning {
    pub base_speed: f32,
    /// Applied while the battery speed boost is active
    pub boost_multiplier: f32,
    /// Applied on top of the boost while dashing
    pub dash_multiplier: f32,
    pub jump_velocity: f32,
    /// Jumps allowed between two floor contacts
    pub max_jumps: u8,
    /// Maximum fall speed while pressed against a wall
    pub wall_slide_speed: f32,
    pub dash_duration_ms: f32,
    pub dash_cooldown_ms: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_speed: 200.0,
            boost_multiplier: 1.5,
            dash_multiplier: 3.0,
            jump_velocity: 450.0,
            max_jumps: 2,
            wall_slide_speed: 100.0,
            dash_duration_ms: 200.0,
            dash_cooldown_ms: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LifecycleTuning {
    pub max_lives: u8,
    pub invulnerability_ms: f32,
    pub boost_duration_ms: f32,
    /// Width of the x-bins checkpoints snap to
    pub checkpoint_interval: f32,
    /// Fixed height checkpoints are recorded at
    pub checkpoint_y: f32,
    /// Distance below the playfield bottom that counts as a fall
    pub fall_margin: f32,
}

impl Default for LifecycleTuning {
    fn default() -> Self {
        Self {
            max_lives: 3,
            invulnerability_ms: 1500.0,
            boost_duration_ms: 5000.0,
            checkpoint_interval: 500.0,
            checkpoint_y: 150.0,
            fall_margin: 100.0,
        }
    }
}

/// Playfield geometry. The world is y-up with the playfield bottom at y = 0.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorldTuning {
    pub game_width: f32,
    pub game_height: f32,
    pub level_width: f32,
    pub player_start: (f32, f32),
    pub player_size: (f32, f32),
    pub gravity: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            game_width: 800.0,
            game_height: 600.0,
            level_width: 4000.0,
            player_start: (100.0, 150.0),
            player_size: (24.0, 32.0),
            gravity: 900.0,
        }
    }
}

impl WorldTuning {
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PresentationTuning {
    pub splash_ms: f32,
    pub particle_count: u32,
    pub particle_lifetime_ms: f32,
    pub music_cache_key: String,
    pub music_path: String,
}

impl Default for PresentationTuning {
    fn default() -> Self {
        Self {
            splash_ms: 2000.0,
            particle_count: 12,
            particle_lifetime_ms: 450.0,
            music_cache_key: "voltrun.theme".to_string(),
            music_path: "audio/theme.ogg".to_string(),
        }
    }
}

// ============================================================================
// Level layout (level.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Resource)]
pub struct LevelDef {
    pub schema_version: u32,
    /// Seed for spawn jitter. Reused on every reset so the layout is stable.
    pub seed: u64,
    pub platforms: Vec<PlatformDef>,
    pub collectibles: CollectibleSpawnRule,
    pub enemies: EnemySpawnRule,
}

/// Axis-aligned platform given by its center and size
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Evenly spaced collectibles with a bounded random offset each.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CollectibleSpawnRule {
    pub count: u32,
    pub start_x: f32,
    pub spacing: f32,
    pub base_y: f32,
    pub jitter_x: f32,
    pub jitter_y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnemySpawnRule {
    pub count: u32,
    pub start_x: f32,
    pub spacing: f32,
    pub y: f32,
    /// Patrol extends this far either side of the spawn point
    pub patrol_half_range: f32,
    pub speed: f32,
    pub speed_jitter: f32,
    pub size: (f32, f32),
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            seed: 0x5EED_0B01,
            platforms: vec![
                PlatformDef { x: 600.0, y: -20.0, width: 1200.0, height: 40.0 },
                PlatformDef { x: 1750.0, y: -20.0, width: 900.0, height: 40.0 },
                PlatformDef { x: 3150.0, y: -20.0, width: 1700.0, height: 40.0 },
                PlatformDef { x: 500.0, y: 130.0, width: 160.0, height: 20.0 },
                PlatformDef { x: 900.0, y: 220.0, width: 160.0, height: 20.0 },
                PlatformDef { x: 1400.0, y: 160.0, width: 200.0, height: 20.0 },
                PlatformDef { x: 1900.0, y: 260.0, width: 40.0, height: 320.0 },
                PlatformDef { x: 2500.0, y: 180.0, width: 220.0, height: 20.0 },
                PlatformDef { x: 3000.0, y: 240.0, width: 180.0, height: 20.0 },
                PlatformDef { x: 3500.0, y: 150.0, width: 200.0, height: 20.0 },
                PlatformDef { x: -20.0, y: 300.0, width: 40.0, height: 600.0 },
                PlatformDef { x: 4020.0, y: 300.0, width: 40.0, height: 600.0 },
            ],
            collectibles: CollectibleSpawnRule {
                count: 10,
                start_x: 300.0,
                spacing: 360.0,
                base_y: 80.0,
                jitter_x: 40.0,
                jitter_y: 40.0,
            },
            enemies: EnemySpawnRule {
                count: 5,
                start_x: 800.0,
                spacing: 620.0,
                y: 30.0,
                patrol_half_range: 120.0,
                speed: 80.0,
                speed_jitter: 20.0,
                size: (28.0, 24.0),
            },
        }
    }
}
