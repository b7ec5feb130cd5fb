//! Enemies domain: patrolling hazards.

mod components;
mod systems;

pub use components::{Enemy, EnemyHurtbox};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::enemies::systems::apply_patrol;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_patrol
                .run_if(in_state(GameState::Gameplay))
                .run_if(gameplay_active),
        );
    }
}
