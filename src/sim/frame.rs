//! Per-frame entry point for the gameplay scene.

use bevy::math::Vec2;
use bevy::prelude::Entity;

use crate::content::GameplayTuning;
use crate::sim::lifecycle::{self, LifeOutcome, LifeState};
use crate::sim::motion::{self, MotionState};
use crate::sim::schedule::{DeferredEffect, Schedule};

/// Keyboard state sampled for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
    pub pause_pressed: bool,
    pub quit_pressed: bool,
}

/// What the physics engine reports about the player's body
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyReadout {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_floor: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
}

/// A sensor overlap involving the player, reported by the physics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    Enemy(Entity),
    Collectible(Entity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Splash,
    Menu,
    Gameplay,
}

/// Palette for particle bursts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectColor {
    Pickup,
    Damage,
    Dash,
    Respawn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    ParticleEffect { position: Vec2, color: EffectColor },
    HudChanged { lives: u8, batteries: u32 },
    CollectibleTaken(Entity),
    CheckpointReached(Vec2),
    Respawned { at: Vec2 },
    FullReset,
    SceneTransition(Scene),
    PauseChanged(bool),
}

/// Timer values after the frame, for presentation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerSnapshot {
    pub dash_ms: f32,
    pub boost_ms: f32,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// New player velocity; `None` leaves the body untouched
    pub velocity: Option<Vec2>,
    /// Position the player must be moved to
    pub teleport: Option<Vec2>,
    pub timers: TimerSnapshot,
    pub events: Vec<FrameEvent>,
}

/// All gameplay state owned by the running scene.
#[derive(Debug, Clone)]
pub struct Session {
    pub motion: MotionState,
    pub life: LifeState,
    pub schedule: Schedule,
    /// Unpaused time since the level (re)started
    pub elapsed_ms: f64,
    pub paused: bool,
}

impl Session {
    pub fn new(tuning: &GameplayTuning) -> Self {
        Self {
            motion: MotionState::default(),
            life: LifeState::new(&tuning.lifecycle, tuning.world.start_position()),
            schedule: Schedule::default(),
            elapsed_ms: 0.0,
            paused: false,
        }
    }

    /// Flip between paused and running. Returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Rebuild the level-start state. Pending deferred effects are kept.
    pub fn reset(&mut self, tuning: &GameplayTuning) {
        self.motion.reset();
        self.life
            .reset(&tuning.lifecycle, tuning.world.start_position());
        self.elapsed_ms = 0.0;
    }

    pub fn timers(&self) -> TimerSnapshot {
        TimerSnapshot {
            dash_ms: self.motion.dash_timer_ms,
            boost_ms: self.motion.speed_boost_timer_ms,
            elapsed_ms: self.elapsed_ms,
        }
    }

    fn apply_deferred(&mut self, effect: DeferredEffect) {
        match effect {
            DeferredEffect::RestoreDash => self.motion.can_dash = true,
            DeferredEffect::EndInvulnerability => self.life.invulnerable = false,
        }
    }
}

/// Run one gameplay frame.
pub fn step(
    session: &mut Session,
    input: &FrameInput,
    body: &BodyReadout,
    overlaps: &[Overlap],
    delta_ms: f32,
    tuning: &GameplayTuning,
) -> FrameOutput {
    let mut out = FrameOutput::default();

    if input.pause_pressed {
        let paused = session.toggle_pause();
        out.events.push(FrameEvent::PauseChanged(paused));
    }
    if session.paused {
        out.timers = session.timers();
        return out;
    }

    if input.quit_pressed {
        out.events.push(FrameEvent::SceneTransition(Scene::Menu));
        out.timers = session.timers();
        return out;
    }

    let counters_before = (session.life.lives, session.life.batteries);

    for effect in session.schedule.advance(delta_ms) {
        session.apply_deferred(effect);
    }
    session.elapsed_ms += f64::from(delta_ms.max(0.0));

    let moved = motion::update(
        &mut session.motion,
        input,
        body,
        &tuning.movement,
        delta_ms,
        &mut session.schedule,
    );
    out.velocity = Some(moved.velocity);
    if moved.dashed {
        out.events.push(FrameEvent::ParticleEffect {
            position: body.position,
            color: EffectColor::Dash,
        });
    }

    if session
        .life
        .advance_checkpoint(body.position.x, &tuning.lifecycle)
    {
        out.events
            .push(FrameEvent::CheckpointReached(session.life.checkpoint));
    }

    let mut outcome = LifeOutcome::Unchanged;
    let mut taken: Vec<Entity> = Vec::new();
    for overlap in overlaps {
        match *overlap {
            Overlap::Collectible(entity) => {
                if taken.contains(&entity) {
                    continue;
                }
                taken.push(entity);
                session
                    .life
                    .on_collectible_overlap(&mut session.motion, &tuning.lifecycle);
                out.events.push(FrameEvent::CollectibleTaken(entity));
                out.events.push(FrameEvent::ParticleEffect {
                    position: body.position,
                    color: EffectColor::Pickup,
                });
            }
            Overlap::Enemy(_) => {
                let hit = session
                    .life
                    .on_enemy_overlap(&tuning.lifecycle, &mut session.schedule);
                if hit != LifeOutcome::Unchanged {
                    out.events.push(FrameEvent::ParticleEffect {
                        position: body.position,
                        color: EffectColor::Damage,
                    });
                    outcome = hit;
                }
            }
        }
        if outcome == LifeOutcome::Reset {
            break;
        }
    }

    if outcome == LifeOutcome::Unchanged
        && lifecycle::is_out_of_bounds(body.position, &tuning.lifecycle)
    {
        outcome = session.life.on_out_of_bounds();
    }

    match outcome {
        LifeOutcome::Unchanged => {}
        LifeOutcome::Respawn => {
            let at = session.life.checkpoint;
            session.motion.jumps_used = 0;
            out.velocity = Some(Vec2::ZERO);
            out.teleport = Some(at);
            out.events.push(FrameEvent::Respawned { at });
            out.events.push(FrameEvent::ParticleEffect {
                position: at,
                color: EffectColor::Respawn,
            });
        }
        LifeOutcome::Reset => {
            session.reset(tuning);
            out.velocity = Some(Vec2::ZERO);
            out.teleport = Some(tuning.world.start_position());
            out.events.push(FrameEvent::FullReset);
        }
    }

    let counters_after = (session.life.lives, session.life.batteries);
    if counters_after != counters_before || outcome == LifeOutcome::Reset {
        out.events.push(FrameEvent::HudChanged {
            lives: counters_after.0,
            batteries: counters_after.1,
        });
    }

    out.timers = session.timers();
    out
}
