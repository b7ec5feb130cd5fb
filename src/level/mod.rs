//! Level domain: builds the playfield from `LevelDef` and keeps it current.

mod components;
mod layout;
mod spawn;
mod systems;


pub use components::{Collectible, LevelEntity, LevelPopulation};
pub use layout::{EnemySpawn, collectible_positions, enemy_layout};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::spawn_level;
use crate::level::systems::{cleanup_level, sync_level_population};
use crate::movement::MovementSystemSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Gameplay), spawn_level)
            .add_systems(OnExit(GameState::Gameplay), cleanup_level)
            .add_systems(
                Update,
                sync_level_population
                    .after(MovementSystemSet)
                    .run_if(in_state(GameState::Gameplay)),
            );
    }
}
