//! Level domain: markers for spawned level content.

use bevy::prelude::*;

/// Everything spawned for the gameplay scene; despawned on exit
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Collectibles and enemies, rebuilt from the spawn rules on a full reset
#[derive(Component, Debug)]
pub struct LevelPopulation;

/// A battery pickup
#[derive(Component, Debug)]
pub struct Collectible;
