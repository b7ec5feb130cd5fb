//! UI domain: lives, battery count and level clock.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{GameplayTuning, LevelDef};
use crate::movement::{GameSession, HudChanged};

pub(crate) const HUD_PADDING: f32 = 16.0;
const LIFE_PIP_SIZE: f32 = 18.0;

const PIP_FULL: Color = Color::srgb(0.35, 0.95, 0.55);
const PIP_EMPTY: Color = Color::srgba(0.2, 0.2, 0.25, 0.8);

/// Marker for the HUD root
#[derive(Component)]
pub struct HudUI;

/// One life indicator; lit while `index < lives`
#[derive(Component)]
pub struct LifePip {
    pub index: u8,
}

#[derive(Component)]
pub struct BatteryCountText;

#[derive(Component)]
pub struct ElapsedTimeText;

/// Battery counter text, e.g. `3/10`.
pub fn format_batteries(collected: u32, total: u32) -> String {
    format!("{collected}/{total}")
}

/// Level clock as `mm:ss.t`, truncated to tenths.
pub fn format_elapsed(elapsed_ms: f64) -> String {
    let tenths = (elapsed_ms.max(0.0) / 100.0) as u64;
    let minutes = tenths / 600;
    let seconds = (tenths / 10) % 60;
    format!("{:02}:{:02}.{}", minutes, seconds, tenths % 10)
}

pub(crate) fn spawn_hud(mut commands: Commands, tuning: Res<GameplayTuning>, level: Res<LevelDef>) {
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let battery_color = Color::srgb(0.95, 0.9, 0.4);

    commands
        .spawn((
            HudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                right: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            // Lives, left
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|pips| {
                    for index in 0..tuning.lifecycle.max_lives {
                        pips.spawn((
                            LifePip { index },
                            Node {
                                width: Val::Px(LIFE_PIP_SIZE),
                                height: Val::Px(LIFE_PIP_SIZE),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(PIP_FULL),
                            BorderColor::all(Color::srgb(0.1, 0.3, 0.15)),
                        ));
                    }
                });

            // Batteries, center
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Node {
                            width: Val::Px(10.0),
                            height: Val::Px(16.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.25, 0.85, 0.45)),
                    ));
                    row.spawn((
                        BatteryCountText,
                        Text::new(format_batteries(0, level.collectibles.count)),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(battery_color),
                    ));
                });

            // Clock, right
            parent.spawn((
                ElapsedTimeText,
                Text::new(format_elapsed(0.0)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}

pub(crate) fn update_hud_counters(
    mut hud_events: MessageReader<HudChanged>,
    level: Res<LevelDef>,
    mut pip_query: Query<(&LifePip, &mut BackgroundColor)>,
    mut text_query: Query<&mut Text, With<BatteryCountText>>,
) {
    let Some(latest) = hud_events.read().last() else {
        return;
    };

    for (pip, mut bg_color) in &mut pip_query {
        bg_color.0 = if pip.index < latest.lives {
            PIP_FULL
        } else {
            PIP_EMPTY
        };
    }

    for mut text in &mut text_query {
        **text = format_batteries(latest.batteries, level.collectibles.count);
    }
}

pub(crate) fn update_hud_clock(
    session: Res<GameSession>,
    mut query: Query<&mut Text, With<ElapsedTimeText>>,
) {
    let formatted = format_elapsed(session.0.elapsed_ms);
    for mut text in &mut query {
        if **text != formatted {
            **text = formatted.clone();
        }
    }
}

pub(crate) fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
