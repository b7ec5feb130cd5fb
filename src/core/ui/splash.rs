//! Core domain: splash card shown while the game warms up.

use bevy::prelude::*;

/// Marker for splash screen UI root
#[derive(Component, Debug)]
pub struct SplashScreenUI;

pub(crate) fn spawn_splash_screen(mut commands: Commands) {
    let bg_color = Color::srgb(0.03, 0.03, 0.06);
    let title_color = Color::srgb(0.35, 0.95, 0.55);
    let muted_text = Color::srgb(0.5, 0.5, 0.6);

    commands
        .spawn((
            SplashScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("VOLTRUN"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("charging..."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_splash_screen(
    mut commands: Commands,
    query: Query<Entity, With<SplashScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
