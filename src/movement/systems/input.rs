//! Movement domain: keyboard sampling for the gameplay step.

use bevy::prelude::*;

use crate::movement::MovementInput;
use crate::sim::FrameInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.frame = frame_input_from_keys(&keyboard);
}

/// Map held and freshly pressed keys onto one frame of gameplay input.
///
/// Running reads held keys. Jump, dash, pause and quit are edge-triggered.
pub(crate) fn frame_input_from_keys(keyboard: &ButtonInput<KeyCode>) -> FrameInput {
    FrameInput {
        left: keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
        right: keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
        jump_pressed: keyboard.any_just_pressed([
            KeyCode::Space,
            KeyCode::KeyW,
            KeyCode::ArrowUp,
        ]),
        dash_pressed: keyboard.any_just_pressed([
            KeyCode::ShiftLeft,
            KeyCode::ShiftRight,
            KeyCode::KeyJ,
        ]),
        pause_pressed: keyboard.any_just_pressed([KeyCode::KeyP, KeyCode::Escape]),
        quit_pressed: keyboard.just_pressed(KeyCode::KeyQ),
    }
}
