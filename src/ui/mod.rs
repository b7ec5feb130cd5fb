//! UI domain: in-run HUD and pause overlay.

mod hud;
mod pause;


pub use hud::{format_batteries, format_elapsed};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::MovementSystemSet;
use crate::ui::hud::{cleanup_hud, spawn_hud, update_hud_clock, update_hud_counters};
use crate::ui::pause::{cleanup_pause_overlay, sync_pause_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Gameplay), spawn_hud)
            .add_systems(
                OnExit(GameState::Gameplay),
                (cleanup_hud, cleanup_pause_overlay),
            )
            .add_systems(
                Update,
                (update_hud_counters, update_hud_clock, sync_pause_overlay)
                    .after(MovementSystemSet)
                    .run_if(in_state(GameState::Gameplay)),
            );
    }
}
