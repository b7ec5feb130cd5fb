//! Core domain: scene flow plugin wiring and public exports.

mod events;
mod resources;
mod state;
mod systems;
mod ui;


pub use events::SceneTransitionRequested;
pub use resources::{GameplayPaused, SplashTimer, gameplay_active};
pub use state::GameState;
pub use ui::{MenuScreenUI, SplashScreenUI};

use bevy::prelude::*;

use crate::core::systems::{
    advance_splash, apply_scene_transitions, clear_pause, follow_player, remove_splash_timer,
    reset_camera, setup_camera, start_from_menu, start_splash_timer,
};
use crate::core::ui::menu::{cleanup_menu_screen, spawn_menu_screen};
use crate::core::ui::splash::{cleanup_splash_screen, spawn_splash_screen};
use crate::movement::MovementSystemSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_message::<SceneTransitionRequested>()
            .add_systems(Startup, setup_camera)
            // Splash
            .add_systems(
                OnEnter(GameState::Splash),
                (start_splash_timer, spawn_splash_screen),
            )
            .add_systems(Update, advance_splash.run_if(in_state(GameState::Splash)))
            .add_systems(
                OnExit(GameState::Splash),
                (remove_splash_timer, cleanup_splash_screen),
            )
            // Menu
            .add_systems(OnEnter(GameState::Menu), spawn_menu_screen)
            .add_systems(Update, start_from_menu.run_if(in_state(GameState::Menu)))
            .add_systems(OnExit(GameState::Menu), cleanup_menu_screen)
            // Gameplay
            .add_systems(OnEnter(GameState::Gameplay), clear_pause)
            .add_systems(
                Update,
                follow_player
                    .after(MovementSystemSet)
                    .run_if(in_state(GameState::Gameplay)),
            )
            .add_systems(OnExit(GameState::Gameplay), (clear_pause, reset_camera))
            .add_systems(Last, apply_scene_transitions);
    }
}
