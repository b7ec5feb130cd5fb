//! Core domain: scene state definitions.

use bevy::prelude::*;

use crate::sim::Scene;

/// The three linear scenes. Each has an enter (`OnEnter`), per-frame
/// (`Update` gated by `in_state`) and exit (`OnExit`) handler set.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Splash,
    Menu,
    Gameplay,
}

impl From<Scene> for GameState {
    fn from(scene: Scene) -> Self {
        match scene {
            Scene::Splash => GameState::Splash,
            Scene::Menu => GameState::Menu,
            Scene::Gameplay => GameState::Gameplay,
        }
    }
}
