//! Debug domain: overlay widgets and text.

use bevy::prelude::*;

use crate::sim::Session;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Multi-line dump of the session counters.
pub fn describe_session(session: &Session, position: Vec2) -> String {
    let motion = &session.motion;
    let life = &session.life;
    format!(
        "Pos: ({:.0}, {:.0})\nJumps: {}\nDash: {} ({:.0} ms, ready: {})\nBoost: {:.0} ms\nLives: {}  Batteries: {}\nInvulnerable: {}\nCheckpoint: ({:.0}, {:.0})\nClock: {:.0} ms  Pending: {}",
        position.x,
        position.y,
        motion.jumps_used,
        motion.is_dashing,
        motion.dash_timer_ms,
        motion.can_dash,
        motion.speed_boost_timer_ms,
        life.lives,
        life.batteries,
        life.invulnerable,
        life.checkpoint.x,
        life.checkpoint.y,
        session.elapsed_ms,
        session.schedule.pending().len(),
    )
}
