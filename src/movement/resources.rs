//! Movement domain: per-frame input, body state and the running session.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::content::GameplayTuning;
use crate::sim::{BodyReadout, FrameInput, Overlap, Session};

/// Keys sampled this frame
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub frame: FrameInput,
}

/// Player body as seen by the physics engine this frame
#[derive(Resource, Debug, Default)]
pub struct PlayerBody {
    pub readout: BodyReadout,
}

/// Sensors the player is currently inside.
///
/// `touching` follows collision start/end messages; `overlaps` is rebuilt
/// every frame from it and handed to the gameplay step.
#[derive(Resource, Debug, Default)]
pub struct PlayerContacts {
    pub touching: HashSet<Entity>,
    pub overlaps: Vec<Overlap>,
}

impl PlayerContacts {
    pub fn clear(&mut self) {
        self.touching.clear();
        self.overlaps.clear();
    }
}

/// Gameplay state for the running scene. Only present during gameplay.
#[derive(Resource, Debug)]
pub struct GameSession(pub Session);

impl GameSession {
    pub fn new(tuning: &GameplayTuning) -> Self {
        Self(Session::new(tuning))
    }
}
