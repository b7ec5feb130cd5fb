//! Lives, batteries, checkpoints and the damage grace window.

use bevy::math::Vec2;

use crate::content::LifecycleTuning;
use crate::sim::motion::MotionState;
use crate::sim::schedule::{DeferredEffect, Schedule};

#[derive(Debug, Clone, PartialEq)]
pub struct LifeState {
    pub lives: u8,
    pub batteries: u32,
    pub invulnerable: bool,
    pub checkpoint: Vec2,
}

/// What the caller has to do after a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    /// Nothing changed that affects the player's body
    Unchanged,
    /// Move the player back to the checkpoint
    Respawn,
    /// Out of lives: rebuild the whole level
    Reset,
}

impl LifeState {
    pub fn new(tuning: &LifecycleTuning, start: Vec2) -> Self {
        Self {
            lives: tuning.max_lives,
            batteries: 0,
            invulnerable: false,
            checkpoint: start,
        }
    }

    /// Snap `x` down to its checkpoint bin and keep it if it is further
    /// right than the stored checkpoint. Returns true when it moved.
    pub fn advance_checkpoint(&mut self, x: f32, tuning: &LifecycleTuning) -> bool {
        if tuning.checkpoint_interval <= 0.0 || !x.is_finite() {
            return false;
        }

        let bin_x = (x / tuning.checkpoint_interval).floor() * tuning.checkpoint_interval;
        if bin_x > self.checkpoint.x {
            self.checkpoint = Vec2::new(bin_x, tuning.checkpoint_y);
            true
        } else {
            false
        }
    }

    fn lose_life(&mut self) -> LifeOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            LifeOutcome::Reset
        } else {
            LifeOutcome::Respawn
        }
    }

    /// Player touched an enemy.
    pub fn on_enemy_overlap(
        &mut self,
        tuning: &LifecycleTuning,
        schedule: &mut Schedule,
    ) -> LifeOutcome {
        if self.invulnerable {
            return LifeOutcome::Unchanged;
        }

        self.invulnerable = true;
        schedule.schedule(tuning.invulnerability_ms, DeferredEffect::EndInvulnerability);
        self.lose_life()
    }

    /// Player fell below the playfield. No grace window applies.
    pub fn on_out_of_bounds(&mut self) -> LifeOutcome {
        self.lose_life()
    }

    /// Player picked up a battery.
    pub fn on_collectible_overlap(&mut self, motion: &mut MotionState, tuning: &LifecycleTuning) {
        self.batteries = self.batteries.saturating_add(1);
        motion.grant_boost(tuning.boost_duration_ms);
    }

    /// Restore level-start values. The grace window is left to its
    /// scheduled expiry.
    pub fn reset(&mut self, tuning: &LifecycleTuning, start: Vec2) {
        self.lives = tuning.max_lives;
        self.batteries = 0;
        self.checkpoint = start;
    }
}

/// Whether `position` is far enough below the playfield to count as a fall.
pub fn is_out_of_bounds(position: Vec2, tuning: &LifecycleTuning) -> bool {
    position.y < -tuning.fall_margin
}
