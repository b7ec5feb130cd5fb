//! Movement domain: player marker and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms and level bounds
    Ground,
    /// Player character
    Player,
    /// Enemy bodies (collide with ground only)
    Enemy,
    /// Battery sensors
    Pickup,
    /// Sensor around each enemy that hurts the player
    EnemyHurtbox,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for solid level geometry
#[derive(Component, Debug)]
pub struct Ground;
