//! UI domain: pause overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::PauseChanged;

/// Marker for the pause overlay
#[derive(Component)]
pub struct PauseOverlayUI;

/// Show or hide the overlay as gameplay pauses and resumes.
pub(crate) fn sync_pause_overlay(
    mut commands: Commands,
    mut pause_events: MessageReader<PauseChanged>,
    overlay_query: Query<Entity, With<PauseOverlayUI>>,
) {
    let Some(latest) = pause_events.read().last() else {
        return;
    };

    if latest.paused {
        if overlay_query.is_empty() {
            spawn_pause_overlay(&mut commands);
        }
    } else {
        for entity in &overlay_query {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_pause_overlay(commands: &mut Commands) {
    commands
        .spawn((
            PauseOverlayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press [P] or [Esc] to resume"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}

pub(crate) fn cleanup_pause_overlay(
    mut commands: Commands,
    query: Query<Entity, With<PauseOverlayUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
