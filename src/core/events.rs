//! Core domain: events for scene flow.

use bevy::ecs::message::Message;

use crate::core::state::GameState;

/// Request to leave the current scene for `to`
#[derive(Debug)]
pub struct SceneTransitionRequested {
    pub to: GameState,
}

impl Message for SceneTransitionRequested {}
