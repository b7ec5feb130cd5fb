//! Debug overlay for tuning the movement feel (dev-tools builds only).

mod state;
mod systems;
mod ui;


pub use state::DebugState;
pub use ui::describe_session;

use bevy::prelude::*;

use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay).chain(),
        );
    }
}
