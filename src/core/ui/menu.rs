//! Core domain: main menu with controls help.

use bevy::prelude::*;

/// Marker for main menu UI root
#[derive(Component, Debug)]
pub struct MenuScreenUI;

const CONTROLS: [(&str, &str); 6] = [
    ("A / D or Arrows", "Run"),
    ("Space / W / Up", "Jump (twice in the air)"),
    ("Shift / J", "Dash"),
    ("P / Esc", "Pause"),
    ("Q", "Back to menu"),
    ("Batteries", "Speed boost"),
];

pub(crate) fn spawn_menu_screen(mut commands: Commands) {
    let bg_color = Color::srgba(0.02, 0.04, 0.08, 0.98);
    let title_color = Color::srgb(0.35, 0.95, 0.55);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    commands
        .spawn((
            MenuScreenUI,
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
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(6.0),
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                })
                .with_children(|controls| {
                    for (keys, action) in CONTROLS {
                        controls.spawn((
                            Text::new(format!("{keys}  -  {action}")),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(text_color),
                        ));
                    }
                });

            parent.spawn((
                Text::new("Press [Enter] to start"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_menu_screen(mut commands: Commands, query: Query<Entity, With<MenuScreenUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
