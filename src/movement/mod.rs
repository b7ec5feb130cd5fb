//! Movement domain: player input, body probes and the per-frame gameplay step.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, Player};
pub use events::{
    CollectibleTaken, HudChanged, LevelResetRequested, ParticleBurstRequested, PauseChanged,
    PlayerRespawned,
};
pub use resources::{GameSession, MovementInput, PlayerBody, PlayerContacts};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    blink_invulnerable_player, drain_stale_collision_events, end_session, gather_overlaps,
    read_body_state, read_input, run_gameplay_frame, start_session, track_player_contacts,
};

/// Input sampling, body probes and the gameplay step, in that order
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MovementSystemSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<PlayerBody>()
            .init_resource::<PlayerContacts>()
            .add_message::<ParticleBurstRequested>()
            .add_message::<HudChanged>()
            .add_message::<CollectibleTaken>()
            .add_message::<LevelResetRequested>()
            .add_message::<PlayerRespawned>()
            .add_message::<PauseChanged>()
            .add_systems(
                OnEnter(GameState::Gameplay),
                (drain_stale_collision_events, start_session).chain(),
            )
            .add_systems(OnExit(GameState::Gameplay), end_session)
            .add_systems(
                Update,
                (
                    read_input,
                    read_body_state,
                    track_player_contacts,
                    gather_overlaps,
                    run_gameplay_frame,
                    blink_invulnerable_player,
                )
                    .chain()
                    .in_set(MovementSystemSet)
                    .run_if(in_state(GameState::Gameplay)),
            );
    }
}
