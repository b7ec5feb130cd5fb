//! Debug domain: overlay toggle and refresh.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, describe_session, spawn_debug_info_overlay};
use crate::movement::{GameSession, Player};

/// Toggle the counters overlay with F3
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        debug!("Debug overlay {}", if debug_state.show_info { "on" } else { "off" });
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    session: Option<Res<GameSession>>,
    player_query: Query<&Transform, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let Some(session) = session.filter(|_| debug_state.show_info) else {
        // Hidden or no run in progress
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    };

    // Text is filled in from the next frame
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let position = player_query
        .iter()
        .next()
        .map(|t| t.translation.truncate())
        .unwrap_or_default();
    if let Ok(mut text) = overlay_query.single_mut() {
        **text = describe_session(&session.0, position);
    }
}
