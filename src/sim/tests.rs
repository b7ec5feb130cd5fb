//! Gameplay rules: unit and property tests for the per-frame core.

use bevy::math::Vec2;
use bevy::prelude::{Entity, World};
use proptest::prelude::*;

use super::lifecycle::is_out_of_bounds;
use super::motion::{self, MotionState};
use super::{
    BodyReadout, DeferredEffect, EffectColor, FrameEvent, FrameInput, LifeOutcome, Overlap,
    Patrol, Scene, Schedule, Session, steer, step,
};
use crate::content::GameplayTuning;

const FRAME_MS: f32 = 16.0;

fn tuning() -> GameplayTuning {
    GameplayTuning::default()
}

fn grounded_at(x: f32) -> BodyReadout {
    BodyReadout {
        position: Vec2::new(x, 16.0),
        on_floor: true,
        ..Default::default()
    }
}

fn airborne_at(x: f32, y: f32) -> BodyReadout {
    BodyReadout {
        position: Vec2::new(x, y),
        ..Default::default()
    }
}

fn spawn_entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

fn idle() -> FrameInput {
    FrameInput::default()
}

// -----------------------------------------------------------------------------
// Schedule tests
// -----------------------------------------------------------------------------

#[test]
fn test_schedule_never_fires_in_scheduling_frame() {
    let mut schedule = Schedule::default();
    schedule.advance(FRAME_MS);
    schedule.schedule(0.0, DeferredEffect::RestoreDash);

    assert_eq!(schedule.pending().len(), 1);
    assert_eq!(schedule.advance(FRAME_MS), vec![DeferredEffect::RestoreDash]);
    assert!(schedule.pending().is_empty());
}

#[test]
fn test_schedule_waits_for_delay() {
    let mut schedule = Schedule::default();
    schedule.schedule(100.0, DeferredEffect::EndInvulnerability);

    assert!(schedule.advance(50.0).is_empty());
    assert!(schedule.advance(49.0).is_empty());
    assert_eq!(
        schedule.advance(1.0),
        vec![DeferredEffect::EndInvulnerability]
    );
}

#[test]
fn test_schedule_ignores_negative_delta() {
    let mut schedule = Schedule::default();
    schedule.advance(-500.0);
    assert_eq!(schedule.now_ms(), 0.0);
    assert_eq!(schedule.frame(), 1);
}

// -----------------------------------------------------------------------------
// Motion tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_left_wins_when_both_held() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        left: true,
        right: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert_eq!(out.velocity.x, -tuning.movement.base_speed);
}

#[test]
fn test_run_stops_instantly_without_input() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let mut body = grounded_at(100.0);
    body.velocity = Vec2::new(200.0, 0.0);

    let out = motion::update(
        &mut state,
        &idle(),
        &body,
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert_eq!(out.velocity.x, 0.0);
}

#[test]
fn test_boost_multiplies_run_speed() {
    let tuning = tuning();
    let mut state = MotionState::default();
    state.grant_boost(1000.0);
    let mut schedule = Schedule::default();
    let input = FrameInput {
        right: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    let expected = tuning.movement.base_speed * tuning.movement.boost_multiplier;
    assert!((out.velocity.x - expected).abs() < 1e-3);
}

#[test]
fn test_double_jump_then_blocked() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let jump = FrameInput {
        jump_pressed: true,
        ..Default::default()
    };

    let ground = motion::update(
        &mut state,
        &jump,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(ground.jumped);
    assert_eq!(state.jumps_used, 0);

    for (expected_used, y) in [(1, 80.0), (2, 120.0)] {
        let air = motion::update(
            &mut state,
            &jump,
            &airborne_at(100.0, y),
            &tuning.movement,
            FRAME_MS,
            &mut schedule,
        );
        assert!(air.jumped);
        assert_eq!(air.velocity.y, tuning.movement.jump_velocity);
        assert_eq!(state.jumps_used, expected_used);
    }

    let blocked = motion::update(
        &mut state,
        &jump,
        &airborne_at(100.0, 160.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(!blocked.jumped);
    assert_eq!(state.jumps_used, 2);
}

#[test]
fn test_floor_contact_and_jump_in_same_frame() {
    let tuning = tuning();
    let mut state = MotionState {
        jumps_used: 2,
        ..Default::default()
    };
    let mut schedule = Schedule::default();
    let jump = FrameInput {
        jump_pressed: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &jump,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(out.jumped);
    assert_eq!(out.velocity.y, tuning.movement.jump_velocity);
    assert_eq!(state.jumps_used, 0);
}

#[test]
fn test_wall_slide_clamps_fall_speed() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        right: true,
        ..Default::default()
    };
    let body = BodyReadout {
        position: Vec2::new(500.0, 200.0),
        velocity: Vec2::new(0.0, -400.0),
        blocked_right: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &body,
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert_eq!(out.velocity.y, -tuning.movement.wall_slide_speed);
}

#[test]
fn test_wall_slide_needs_input_toward_wall() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        left: true,
        ..Default::default()
    };
    let body = BodyReadout {
        position: Vec2::new(500.0, 200.0),
        velocity: Vec2::new(0.0, -400.0),
        blocked_right: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &body,
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert_eq!(out.velocity.y, -400.0);
}

#[test]
fn test_dash_right_sets_velocity_and_cooldown() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        right: true,
        dash_pressed: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    let expected = tuning.movement.base_speed * tuning.movement.dash_multiplier;
    assert!((out.velocity.x - expected).abs() < 1e-3);
    assert!(out.dashed);
    assert!(state.is_dashing);
    assert!(!state.can_dash);
    assert_eq!(state.dash_timer_ms, tuning.movement.dash_duration_ms);
}

#[test]
fn test_dash_defaults_rightward() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        dash_pressed: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(out.velocity.x > 0.0);
}

#[test]
fn test_neutral_dash_stops_on_next_idle_frame() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let dash = FrameInput {
        dash_pressed: true,
        ..Default::default()
    };

    let dashing = motion::update(
        &mut state,
        &dash,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(dashing.velocity.x > 0.0);

    let mut body = grounded_at(104.0);
    body.velocity = dashing.velocity;
    let next = motion::update(
        &mut state,
        &idle(),
        &body,
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(state.is_dashing);
    assert_eq!(next.velocity.x, 0.0);
}

#[test]
fn test_dash_direction_prefers_right() {
    let tuning = tuning();
    let mut state = MotionState::default();
    let mut schedule = Schedule::default();
    let input = FrameInput {
        left: true,
        right: true,
        dash_pressed: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(out.velocity.x > 0.0);
}

#[test]
fn test_dash_blocked_during_cooldown() {
    let tuning = tuning();
    let mut state = MotionState {
        can_dash: false,
        ..Default::default()
    };
    let mut schedule = Schedule::default();
    let input = FrameInput {
        dash_pressed: true,
        ..Default::default()
    };

    let out = motion::update(
        &mut state,
        &input,
        &grounded_at(100.0),
        &tuning.movement,
        FRAME_MS,
        &mut schedule,
    );
    assert!(!out.dashed);
    assert!(!state.is_dashing);
    assert!(schedule.pending().is_empty());
}

#[test]
fn test_timers_floor_at_zero() {
    let mut state = MotionState {
        is_dashing: true,
        dash_timer_ms: 10.0,
        speed_boost_timer_ms: 5.0,
        ..Default::default()
    };
    state.tick_timers(1000.0);

    assert_eq!(state.dash_timer_ms, 0.0);
    assert_eq!(state.speed_boost_timer_ms, 0.0);
    assert!(!state.is_dashing);

    state.tick_timers(1000.0);
    assert_eq!(state.dash_timer_ms, 0.0);
    assert_eq!(state.speed_boost_timer_ms, 0.0);
}

// -----------------------------------------------------------------------------
// Lifecycle tests
// -----------------------------------------------------------------------------

#[test]
fn test_checkpoint_snaps_to_bins_and_only_moves_right() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    let life = &mut session.life;

    assert!(!life.advance_checkpoint(480.0, &tuning.lifecycle));
    assert!(life.advance_checkpoint(1234.0, &tuning.lifecycle));
    assert_eq!(
        life.checkpoint,
        Vec2::new(1000.0, tuning.lifecycle.checkpoint_y)
    );

    assert!(!life.advance_checkpoint(700.0, &tuning.lifecycle));
    assert_eq!(life.checkpoint.x, 1000.0);
}

#[test]
fn test_enemy_overlap_with_one_life_resets() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.life.lives = 1;

    let outcome = session
        .life
        .on_enemy_overlap(&tuning.lifecycle, &mut session.schedule);
    assert_eq!(outcome, LifeOutcome::Reset);
    assert_eq!(session.life.lives, 0);
    assert!(session.life.invulnerable);
}

#[test]
fn test_enemy_overlap_ignored_while_invulnerable() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.life.invulnerable = true;

    let outcome = session
        .life
        .on_enemy_overlap(&tuning.lifecycle, &mut session.schedule);
    assert_eq!(outcome, LifeOutcome::Unchanged);
    assert_eq!(session.life.lives, tuning.lifecycle.max_lives);
}

#[test]
fn test_out_of_bounds_threshold() {
    let tuning = tuning();
    assert!(!is_out_of_bounds(Vec2::new(0.0, -100.0), &tuning.lifecycle));
    assert!(is_out_of_bounds(Vec2::new(0.0, -100.5), &tuning.lifecycle));
}

#[test]
fn test_collectible_refreshes_boost_without_stacking() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.motion.speed_boost_timer_ms = 1200.0;

    session
        .life
        .on_collectible_overlap(&mut session.motion, &tuning.lifecycle);
    session
        .life
        .on_collectible_overlap(&mut session.motion, &tuning.lifecycle);

    assert_eq!(session.life.batteries, 2);
    assert_eq!(
        session.motion.speed_boost_timer_ms,
        tuning.lifecycle.boost_duration_ms
    );
}

// -----------------------------------------------------------------------------
// Patrol tests
// -----------------------------------------------------------------------------

#[test]
fn test_patrol_reverses_at_bounds_only() {
    let patrol = Patrol::around(500.0, 100.0, 80.0);

    assert_eq!(steer(400.0, -80.0, &patrol), 80.0);
    assert_eq!(steer(380.0, 0.0, &patrol), 80.0);
    assert_eq!(steer(600.0, 80.0, &patrol), -80.0);
    assert_eq!(steer(650.0, 0.0, &patrol), -80.0);
    assert_eq!(steer(500.0, -80.0, &patrol), -80.0);
    assert_eq!(steer(500.0, 0.0, &patrol), 0.0);
}

// -----------------------------------------------------------------------------
// Frame tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_enemy_hit_on_last_life_resets_level() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.life.lives = 1;
    session.life.batteries = 4;
    session.motion.speed_boost_timer_ms = 3000.0;
    session.elapsed_ms = 12_345.0;
    let enemy = spawn_entities(1)[0];

    let out = step(
        &mut session,
        &idle(),
        &grounded_at(1800.0),
        &[Overlap::Enemy(enemy)],
        FRAME_MS,
        &tuning,
    );

    assert!(out.events.contains(&FrameEvent::FullReset));
    assert!(out.events.contains(&FrameEvent::HudChanged {
        lives: tuning.lifecycle.max_lives,
        batteries: 0,
    }));
    assert_eq!(out.teleport, Some(tuning.world.start_position()));
    assert_eq!(out.velocity, Some(Vec2::ZERO));
    assert_eq!(session.life.lives, tuning.lifecycle.max_lives);
    assert_eq!(session.life.batteries, 0);
    assert_eq!(session.life.checkpoint, tuning.world.start_position());
    assert_eq!(session.motion.speed_boost_timer_ms, 0.0);
    assert!(session.motion.can_dash);
    assert_eq!(session.motion.jumps_used, 0);
    assert_eq!(session.elapsed_ms, 0.0);
}

#[test]
fn test_frame_fall_respawns_at_checkpoint() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.life.lives = 2;
    session.life.checkpoint = Vec2::new(1000.0, tuning.lifecycle.checkpoint_y);
    session.motion.jumps_used = 2;
    let body = BodyReadout {
        position: Vec2::new(1250.0, -150.0),
        velocity: Vec2::new(120.0, -600.0),
        ..Default::default()
    };

    let out = step(&mut session, &idle(), &body, &[], FRAME_MS, &tuning);

    let checkpoint = Vec2::new(1000.0, tuning.lifecycle.checkpoint_y);
    assert_eq!(session.life.lives, 1);
    assert_eq!(out.teleport, Some(checkpoint));
    assert_eq!(out.velocity, Some(Vec2::ZERO));
    assert_eq!(session.motion.jumps_used, 0);
    assert!(out.events.contains(&FrameEvent::Respawned { at: checkpoint }));
    assert!(!session.life.invulnerable);
}

#[test]
fn test_frame_enemy_hit_grants_grace_window() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    let enemy = spawn_entities(1)[0];

    step(
        &mut session,
        &idle(),
        &grounded_at(300.0),
        &[Overlap::Enemy(enemy)],
        FRAME_MS,
        &tuning,
    );
    assert_eq!(session.life.lives, tuning.lifecycle.max_lives - 1);
    assert!(session.life.invulnerable);

    let second = step(
        &mut session,
        &idle(),
        &grounded_at(300.0),
        &[Overlap::Enemy(enemy)],
        FRAME_MS,
        &tuning,
    );
    assert_eq!(session.life.lives, tuning.lifecycle.max_lives - 1);
    assert!(second.teleport.is_none());

    let frames = (tuning.lifecycle.invulnerability_ms / FRAME_MS).ceil() as usize;
    for _ in 0..frames {
        step(
            &mut session,
            &idle(),
            &grounded_at(300.0),
            &[],
            FRAME_MS,
            &tuning,
        );
    }
    assert!(!session.life.invulnerable);
}

#[test]
fn test_frame_collectible_taken_once() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    let battery = spawn_entities(1)[0];

    let out = step(
        &mut session,
        &idle(),
        &grounded_at(300.0),
        &[Overlap::Collectible(battery), Overlap::Collectible(battery)],
        FRAME_MS,
        &tuning,
    );

    assert_eq!(session.life.batteries, 1);
    let taken = out
        .events
        .iter()
        .filter(|e| matches!(e, FrameEvent::CollectibleTaken(_)))
        .count();
    assert_eq!(taken, 1);
    assert!(out.events.contains(&FrameEvent::ParticleEffect {
        position: Vec2::new(300.0, 16.0),
        color: EffectColor::Pickup,
    }));
}

#[test]
fn test_frame_dash_cooldown_outlasts_dash() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    let dash = FrameInput {
        right: true,
        dash_pressed: true,
        ..Default::default()
    };

    let out = step(&mut session, &dash, &grounded_at(300.0), &[], FRAME_MS, &tuning);
    let expected = tuning.movement.base_speed * tuning.movement.dash_multiplier;
    assert!((out.velocity.unwrap().x - expected).abs() < 1e-3);
    assert!(session.motion.is_dashing);
    assert!(!session.motion.can_dash);

    let mut elapsed = 0.0;
    while elapsed < tuning.movement.dash_cooldown_ms {
        step(&mut session, &idle(), &grounded_at(300.0), &[], FRAME_MS, &tuning);
        elapsed += FRAME_MS;
    }
    assert!(session.motion.can_dash);
    assert!(!session.motion.is_dashing);
}

#[test]
fn test_frame_cooldown_restores_dash_before_dash_ends() {
    let mut tuning = tuning();
    tuning.movement.dash_duration_ms = 2000.0;
    tuning.movement.dash_cooldown_ms = 100.0;
    let mut session = Session::new(&tuning);
    let dash = FrameInput {
        dash_pressed: true,
        ..Default::default()
    };

    step(&mut session, &dash, &grounded_at(300.0), &[], FRAME_MS, &tuning);
    for _ in 0..10 {
        step(&mut session, &idle(), &grounded_at(300.0), &[], FRAME_MS, &tuning);
    }

    assert!(session.motion.can_dash);
    assert!(session.motion.is_dashing);
    assert!(session.motion.dash_timer_ms > 0.0);
}

#[test]
fn test_frame_pause_freezes_timers() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    session.motion.speed_boost_timer_ms = 1000.0;
    let pause = FrameInput {
        pause_pressed: true,
        ..Default::default()
    };

    let out = step(&mut session, &pause, &grounded_at(300.0), &[], FRAME_MS, &tuning);
    assert!(out.events.contains(&FrameEvent::PauseChanged(true)));
    assert!(out.velocity.is_none());

    let enemy = spawn_entities(1)[0];
    for _ in 0..100 {
        step(
            &mut session,
            &idle(),
            &airborne_at(300.0, -500.0),
            &[Overlap::Enemy(enemy)],
            FRAME_MS,
            &tuning,
        );
    }
    assert_eq!(session.motion.speed_boost_timer_ms, 1000.0);
    assert_eq!(session.elapsed_ms, 0.0);
    assert_eq!(session.life.lives, tuning.lifecycle.max_lives);

    let frozen = step(&mut session, &idle(), &grounded_at(300.0), &[], FRAME_MS, &tuning);
    assert_eq!(frozen.timers.boost_ms, 1000.0);
    assert_eq!(frozen.timers.dash_ms, 0.0);
    assert_eq!(frozen.timers.elapsed_ms, 0.0);

    let out = step(&mut session, &pause, &grounded_at(300.0), &[], FRAME_MS, &tuning);
    assert!(out.events.contains(&FrameEvent::PauseChanged(false)));
    assert_eq!(session.motion.speed_boost_timer_ms, 1000.0 - FRAME_MS);
}

#[test]
fn test_pause_toggle_twice_is_identity() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);

    session.toggle_pause();
    session.toggle_pause();
    assert!(!session.paused);

    session.paused = true;
    session.toggle_pause();
    session.toggle_pause();
    assert!(session.paused);
}

#[test]
fn test_frame_quit_requests_menu() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);
    let quit = FrameInput {
        quit_pressed: true,
        ..Default::default()
    };

    let out = step(&mut session, &quit, &grounded_at(300.0), &[], FRAME_MS, &tuning);
    assert!(
        out.events
            .contains(&FrameEvent::SceneTransition(Scene::Menu))
    );
}

#[test]
fn test_frame_checkpoint_event() {
    let tuning = tuning();
    let mut session = Session::new(&tuning);

    let out = step(
        &mut session,
        &idle(),
        &grounded_at(520.0),
        &[],
        FRAME_MS,
        &tuning,
    );
    let checkpoint = Vec2::new(500.0, tuning.lifecycle.checkpoint_y);
    assert!(out.events.contains(&FrameEvent::CheckpointReached(checkpoint)));
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct FrameCase {
    input: FrameInput,
    body: BodyReadout,
    enemy_hit: bool,
    delta_ms: f32,
}

fn frame_case() -> impl Strategy<Value = FrameCase> {
    (
        any::<[bool; 5]>(),
        any::<[bool; 4]>(),
        -50.0f32..4500.0,
        -300.0f32..700.0,
        -800.0f32..800.0,
        0.0f32..40.0,
    )
        .prop_map(|(keys, flags, x, y, vy, delta_ms)| FrameCase {
            input: FrameInput {
                left: keys[0],
                right: keys[1],
                jump_pressed: keys[2],
                dash_pressed: keys[3],
                pause_pressed: keys[4],
                quit_pressed: false,
            },
            body: BodyReadout {
                position: Vec2::new(x, y),
                velocity: Vec2::new(0.0, vy),
                on_floor: flags[0],
                blocked_left: flags[1],
                blocked_right: flags[2],
            },
            enemy_hit: flags[3],
            delta_ms,
        })
}

proptest! {
    #[test]
    fn prop_core_invariants_hold(cases in prop::collection::vec(frame_case(), 1..120)) {
        let tuning = tuning();
        let mut session = Session::new(&tuning);
        let enemy = spawn_entities(1)[0];

        for case in cases {
            let checkpoint_before = session.life.checkpoint.x;
            let dash_before = session.motion.dash_timer_ms;
            let boost_before = session.motion.speed_boost_timer_ms;
            let was_paused = session.paused;
            let overlaps = if case.enemy_hit { vec![Overlap::Enemy(enemy)] } else { Vec::new() };

            let out = step(&mut session, &case.input, &case.body, &overlaps, case.delta_ms, &tuning);
            let reset = out.events.contains(&FrameEvent::FullReset);

            prop_assert!(session.motion.jumps_used <= 2);
            prop_assert!(session.life.lives <= tuning.lifecycle.max_lives);
            prop_assert!(session.life.lives > 0);
            prop_assert!(session.motion.dash_timer_ms >= 0.0);
            prop_assert!(session.motion.speed_boost_timer_ms >= 0.0);
            prop_assert_eq!(session.motion.is_dashing, session.motion.dash_timer_ms > 0.0);

            if !reset {
                prop_assert!(session.life.checkpoint.x >= checkpoint_before);
            }

            if was_paused && session.paused {
                prop_assert_eq!(session.motion.dash_timer_ms, dash_before);
                prop_assert_eq!(session.motion.speed_boost_timer_ms, boost_before);
            }

            // A dash can only start from a fresh press, so without one the
            // timers never grow.
            if !case.input.dash_pressed && !reset {
                prop_assert!(session.motion.dash_timer_ms <= dash_before);
            }
            prop_assert!(session.motion.speed_boost_timer_ms <= boost_before);
        }
    }

    #[test]
    fn prop_checkpoint_is_monotonic(xs in prop::collection::vec(-100.0f32..5000.0, 1..200)) {
        let tuning = tuning();
        let mut session = Session::new(&tuning);
        let mut last = session.life.checkpoint.x;

        for x in xs {
            session.life.advance_checkpoint(x, &tuning.lifecycle);
            prop_assert!(session.life.checkpoint.x >= last);
            last = session.life.checkpoint.x;
        }
    }
}
