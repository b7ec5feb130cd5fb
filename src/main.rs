mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod enemies;
mod level;
mod movement;
mod sim;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() {
    let content = content::ContentPlugin::load();
    let world = content.tuning().world.clone();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Voltrun".to_string(),
                    resolution: (world.game_width as u32, world.game_height as u32).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,voltrun=debug".to_string(),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * world.gravity))
    .insert_resource(ClearColor(Color::srgb(0.03, 0.03, 0.06)))
    .add_plugins((
        content,
        core::CorePlugin,
        sprites::SpritesPlugin,
        audio::MusicPlugin,
        movement::MovementPlugin,
        enemies::EnemiesPlugin,
        level::LevelPlugin,
        effects::EffectsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
