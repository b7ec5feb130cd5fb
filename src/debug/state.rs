//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the session counters overlay is shown
    pub show_info: bool,
}
