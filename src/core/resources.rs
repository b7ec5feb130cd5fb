//! Core domain: shared resources for scene flow and pause.

use bevy::prelude::*;

use crate::content::GameplayTuning;

/// Resource tracking if gameplay is paused.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub paused: bool,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// How long the splash card stays up before moving on to the menu
#[derive(Resource, Debug)]
pub struct SplashTimer {
    pub timer: Timer,
}

impl SplashTimer {
    pub fn from_tuning(tuning: &GameplayTuning) -> Self {
        Self {
            timer: Timer::from_seconds(
                tuning.presentation.splash_ms.max(0.0) / 1000.0,
                TimerMode::Once,
            ),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn is_done(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }
}
