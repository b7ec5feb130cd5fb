//! Movement domain: messages emitted by the gameplay step.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::sim::EffectColor;

/// Spawn a short particle burst at `position`
#[derive(Debug)]
pub struct ParticleBurstRequested {
    pub position: Vec2,
    pub color: EffectColor,
}

impl Message for ParticleBurstRequested {}

/// Lives or battery count changed
#[derive(Debug)]
pub struct HudChanged {
    pub lives: u8,
    pub batteries: u32,
}

impl Message for HudChanged {}

/// A battery was picked up and must leave the world
#[derive(Debug)]
pub struct CollectibleTaken {
    pub entity: Entity,
}

impl Message for CollectibleTaken {}

/// Player ran out of lives; rebuild collectibles and enemies
#[derive(Debug)]
pub struct LevelResetRequested;

impl Message for LevelResetRequested {}

#[derive(Debug)]
pub struct PlayerRespawned {
    pub at: Vec2,
}

impl Message for PlayerRespawned {}

#[derive(Debug)]
pub struct PauseChanged {
    pub paused: bool,
}

impl Message for PauseChanged {}
