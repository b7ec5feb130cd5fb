use bevy::prelude::*;

use crate::movement::systems::collisions::other_collider;
use crate::movement::systems::gameplay::blink_hidden;
use crate::movement::systems::input::frame_input_from_keys;
use crate::sim::FrameInput;

fn keys(held: &[KeyCode]) -> ButtonInput<KeyCode> {
    let mut input = ButtonInput::<KeyCode>::default();
    for key in held {
        input.press(*key);
    }
    input
}

#[test]
fn test_no_keys_is_idle_input() {
    assert_eq!(frame_input_from_keys(&keys(&[])), FrameInput::default());
}

#[test]
fn test_run_keys_map_to_directions() {
    let input = frame_input_from_keys(&keys(&[KeyCode::KeyA]));
    assert!(input.left && !input.right);

    let input = frame_input_from_keys(&keys(&[KeyCode::ArrowRight]));
    assert!(input.right && !input.left);

    let input = frame_input_from_keys(&keys(&[KeyCode::ArrowLeft, KeyCode::KeyD]));
    assert!(input.left && input.right);
}

#[test]
fn test_action_keys_fire_on_press_only() {
    let mut keyboard = keys(&[KeyCode::Space, KeyCode::ShiftLeft, KeyCode::KeyP]);
    let input = frame_input_from_keys(&keyboard);
    assert!(input.jump_pressed);
    assert!(input.dash_pressed);
    assert!(input.pause_pressed);
    assert!(!input.quit_pressed);

    // Next frame with the keys still held: no new presses
    keyboard.clear();
    let input = frame_input_from_keys(&keyboard);
    assert!(!input.jump_pressed);
    assert!(!input.dash_pressed);
    assert!(!input.pause_pressed);
}

#[test]
fn test_alternate_bindings() {
    let input = frame_input_from_keys(&keys(&[KeyCode::ArrowUp, KeyCode::KeyJ, KeyCode::Escape]));
    assert!(input.jump_pressed && input.dash_pressed && input.pause_pressed);

    let input = frame_input_from_keys(&keys(&[KeyCode::KeyQ]));
    assert!(input.quit_pressed);
}

#[test]
fn test_other_collider_picks_non_player_side() {
    let mut world = World::new();
    let player = world.spawn_empty().id();
    let sensor = world.spawn_empty().id();
    let unrelated = world.spawn_empty().id();

    assert_eq!(other_collider(player, sensor, player), Some(sensor));
    assert_eq!(other_collider(sensor, player, player), Some(sensor));
    assert_eq!(other_collider(sensor, unrelated, player), None);
}

#[test]
fn test_blink_alternates_every_phase() {
    assert!(!blink_hidden(0.0));
    assert!(!blink_hidden(99.0));
    assert!(blink_hidden(100.0));
    assert!(blink_hidden(199.0));
    assert!(!blink_hidden(200.0));
}
