//! Effects domain: cosmetic particle bursts requested by the gameplay step.

mod particles;


pub use particles::{Particle, burst_color, fade};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::effects::particles::{age_particles, cleanup_particles, spawn_particle_bursts};
use crate::movement::MovementSystemSet;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(GameState::Gameplay), cleanup_particles)
            .add_systems(
                Update,
                (
                    spawn_particle_bursts.after(MovementSystemSet),
                    age_particles.run_if(gameplay_active),
                )
                    .run_if(in_state(GameState::Gameplay)),
            );
    }
}
