//! Enemies domain: enemy markers.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// Sensor that hurts the player on contact. Child of the enemy it belongs to.
#[derive(Component, Debug)]
pub struct EnemyHurtbox {
    pub enemy: Entity,
}
