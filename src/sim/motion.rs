//! Player locomotion rules: run, jump, wall slide, dash and their timers.

use bevy::math::Vec2;

use crate::content::MovementTuning;
use crate::sim::frame::{BodyReadout, FrameInput};
use crate::sim::schedule::{DeferredEffect, Schedule};

#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub jumps_used: u8,
    pub is_dashing: bool,
    pub dash_timer_ms: f32,
    pub can_dash: bool,
    pub speed_boost_timer_ms: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            jumps_used: 0,
            is_dashing: false,
            dash_timer_ms: 0.0,
            can_dash: true,
            speed_boost_timer_ms: 0.0,
        }
    }
}

/// Result of one motion update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutcome {
    pub velocity: Vec2,
    pub jumped: bool,
    pub dashed: bool,
}

impl MotionState {
    pub fn boost_active(&self) -> bool {
        self.speed_boost_timer_ms > 0.0
    }

    /// Horizontal speed before direction: base, then boost, then dash.
    pub fn current_speed(&self, tuning: &MovementTuning) -> f32 {
        let mut speed = tuning.base_speed;
        if self.boost_active() {
            speed *= tuning.boost_multiplier;
        }
        if self.is_dashing {
            speed *= tuning.dash_multiplier;
        }
        speed
    }

    /// Count down the dash and boost timers, flooring both at zero.
    pub fn tick_timers(&mut self, delta_ms: f32) {
        let delta_ms = delta_ms.max(0.0);

        if self.dash_timer_ms > 0.0 {
            self.dash_timer_ms = (self.dash_timer_ms - delta_ms).max(0.0);
        }
        if self.dash_timer_ms <= 0.0 {
            self.is_dashing = false;
        }

        self.speed_boost_timer_ms = (self.speed_boost_timer_ms - delta_ms).max(0.0);
    }

    /// Refresh the battery boost to its full duration.
    pub fn grant_boost(&mut self, duration_ms: f32) {
        self.speed_boost_timer_ms = duration_ms.max(0.0);
    }

    /// Back to level-start values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Advance the player's locomotion by one frame.
///
/// `body.velocity` is the velocity the physics step left on the body; the
/// returned velocity replaces it.
pub fn update(
    state: &mut MotionState,
    input: &FrameInput,
    body: &BodyReadout,
    tuning: &MovementTuning,
    delta_ms: f32,
    schedule: &mut Schedule,
) -> MotionOutcome {
    state.tick_timers(delta_ms);

    let mut velocity = body.velocity;

    // Left is checked first and wins when both are held
    let speed = state.current_speed(tuning);
    if input.left {
        velocity.x = -speed;
    } else if input.right {
        velocity.x = speed;
    } else {
        velocity.x = 0.0;
    }

    let mut jumped = false;
    if input.jump_pressed && (body.on_floor || state.jumps_used < tuning.max_jumps) {
        velocity.y = tuning.jump_velocity;
        state.jumps_used = state.jumps_used.saturating_add(1).min(tuning.max_jumps);
        jumped = true;
    }

    // Floor contact clears the count after the jump is taken, so a jump
    // from the ground leaves both air jumps available
    if body.on_floor {
        state.jumps_used = 0;
    }

    let pressing_into_wall =
        (input.left && body.blocked_left) || (input.right && body.blocked_right);
    if !body.on_floor && pressing_into_wall && velocity.y < -tuning.wall_slide_speed {
        velocity.y = -tuning.wall_slide_speed;
    }

    let mut dashed = false;
    if input.dash_pressed && state.can_dash {
        let direction = if input.right {
            1.0
        } else if input.left {
            -1.0
        } else {
            1.0
        };

        let mut speed = tuning.base_speed;
        if state.boost_active() {
            speed *= tuning.boost_multiplier;
        }
        velocity.x = direction * speed * tuning.dash_multiplier;

        state.is_dashing = true;
        state.can_dash = false;
        state.dash_timer_ms = tuning.dash_duration_ms;
        schedule.schedule(tuning.dash_cooldown_ms, DeferredEffect::RestoreDash);
        dashed = true;
    }

    MotionOutcome {
        velocity,
        jumped,
        dashed,
    }
}
