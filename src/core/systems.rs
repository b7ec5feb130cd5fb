//! Core domain: scene flow systems, camera and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::GameplayTuning;
use crate::core::events::SceneTransitionRequested;
use crate::core::resources::{GameplayPaused, SplashTimer};
use crate::core::state::GameState;
use crate::movement::Player;

/// How much of the area below the playfield bottom stays in view
const GROUND_VIEW_MARGIN: f32 = 60.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Apply the last scene change requested this frame.
pub(crate) fn apply_scene_transitions(
    mut requests: MessageReader<SceneTransitionRequested>,
    current: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    if *current.get() == request.to {
        return;
    }

    info!("Scene transition: {:?} -> {:?}", current.get(), request.to);
    next_state.set(request.to);
}

pub(crate) fn start_splash_timer(mut commands: Commands, tuning: Res<GameplayTuning>) {
    commands.insert_resource(SplashTimer::from_tuning(&tuning));
}

/// Leave the splash card once its timer runs out, or early on any key.
pub(crate) fn advance_splash(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut splash: ResMut<SplashTimer>,
    mut transitions: MessageWriter<SceneTransitionRequested>,
) {
    splash.tick(time.delta());

    let skipped = keyboard.get_just_pressed().next().is_some();
    if splash.is_done() || skipped {
        transitions.write(SceneTransitionRequested {
            to: GameState::Menu,
        });
    }
}

pub(crate) fn remove_splash_timer(mut commands: Commands) {
    commands.remove_resource::<SplashTimer>();
}

pub(crate) fn start_from_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut transitions: MessageWriter<SceneTransitionRequested>,
) {
    let start = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::Space);

    if start {
        transitions.write(SceneTransitionRequested {
            to: GameState::Gameplay,
        });
    }
}

pub(crate) fn clear_pause(mut paused: ResMut<GameplayPaused>) {
    paused.paused = false;
}

/// Track the player horizontally, clamped so the view never leaves the level.
pub(crate) fn follow_player(
    tuning: Res<GameplayTuning>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    let world = &tuning.world;
    let half_width = world.game_width / 2.0;
    let max_x = (world.level_width - half_width).max(half_width);
    let target_x = player.translation.x.clamp(half_width, max_x);

    for mut camera in &mut camera_query {
        camera.translation.x = target_x;
        camera.translation.y = world.game_height / 2.0 - GROUND_VIEW_MARGIN;
    }
}

pub(crate) fn reset_camera(mut camera_query: Query<&mut Transform, With<Camera2d>>) {
    for mut camera in &mut camera_query {
        camera.translation.x = 0.0;
        camera.translation.y = 0.0;
    }
}
