//! Level domain: platform, player, battery and enemy spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{GameplayTuning, LevelDef};
use crate::enemies::{Enemy, EnemyHurtbox};
use crate::level::components::{Collectible, LevelEntity, LevelPopulation};
use crate::level::layout::{collectible_positions, enemy_layout};
use crate::movement::{GameLayer, Ground, Player};
use crate::sprites::{DrawLayer, GeneratedTextures};

const BATTERY_SIZE: Vec2 = Vec2::new(16.0, 24.0);

pub(crate) fn spawn_level(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    level: Res<LevelDef>,
    textures: Res<GeneratedTextures>,
) {
    spawn_platforms(&mut commands, &level, &textures);
    spawn_player(&mut commands, &tuning, &textures);
    spawn_population(&mut commands, &level, &textures);

    info!(
        "Level spawned: {} platforms, {} batteries, {} enemies (seed {})",
        level.platforms.len(),
        level.collectibles.count,
        level.enemies.count,
        level.seed
    );
}

fn spawn_platforms(commands: &mut Commands, level: &LevelDef, textures: &GeneratedTextures) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    for platform in &level.platforms {
        commands.spawn((
            Ground,
            LevelEntity,
            Sprite {
                image: textures.platform.clone(),
                custom_size: Some(Vec2::new(platform.width, platform.height)),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, DrawLayer::Platform.z()),
            RigidBody::Static,
            Collider::rectangle(platform.width, platform.height),
            ground_layers,
        ));
    }
}

fn spawn_player(commands: &mut Commands, tuning: &GameplayTuning, textures: &GeneratedTextures) {
    let start = tuning.world.start_position();
    let (width, height) = tuning.world.player_size;

    commands.spawn((
        Player,
        LevelEntity,
        Sprite {
            image: textures.player.clone(),
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_xyz(start.x, start.y, DrawLayer::Player.z()),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(width, height),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Pickup, GameLayer::EnemyHurtbox],
            ),
            LinearVelocity::default(),
        ),
    ));
}

/// Spawn the batteries and enemies described by the level's spawn rules.
pub(crate) fn spawn_population(
    commands: &mut Commands,
    level: &LevelDef,
    textures: &GeneratedTextures,
) {
    for position in collectible_positions(&level.collectibles, level.seed) {
        commands.spawn((
            Collectible,
            LevelEntity,
            LevelPopulation,
            Sprite {
                image: textures.battery.clone(),
                custom_size: Some(BATTERY_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, DrawLayer::Pickup.z()),
            Collider::rectangle(BATTERY_SIZE.x, BATTERY_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
        ));
    }

    let (width, height) = level.enemies.size;
    for spawn in enemy_layout(&level.enemies, level.seed) {
        let enemy = commands
            .spawn((
                Enemy,
                LevelEntity,
                LevelPopulation,
                spawn.patrol,
                Sprite {
                    image: textures.enemy.clone(),
                    custom_size: Some(Vec2::new(width, height)),
                    ..default()
                },
                Transform::from_xyz(spawn.position.x, spawn.position.y, DrawLayer::Enemy.z()),
                // Physics
                (
                    RigidBody::Dynamic,
                    Collider::rectangle(width, height),
                    LockedAxes::ROTATION_LOCKED,
                    Friction::new(0.0),
                    CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
                    LinearVelocity(Vec2::new(spawn.patrol.speed, 0.0)),
                ),
            ))
            .id();

        commands.entity(enemy).with_children(|parent| {
            parent.spawn((
                EnemyHurtbox { enemy },
                Transform::default(),
                Collider::rectangle(width, height),
                Sensor,
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::EnemyHurtbox, [GameLayer::Player]),
            ));
        });
    }
}
