//! Level domain: keeps spawned content in sync with the gameplay step.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::level::components::{Collectible, LevelEntity, LevelPopulation};
use crate::level::spawn::spawn_population;
use crate::movement::{CollectibleTaken, LevelResetRequested};
use crate::sprites::GeneratedTextures;

/// Remove picked-up batteries, or rebuild every battery and enemy after a
/// full reset. A reset supersedes pickups from the same frame.
pub(crate) fn sync_level_population(
    mut commands: Commands,
    mut taken_events: MessageReader<CollectibleTaken>,
    mut reset_events: MessageReader<LevelResetRequested>,
    level: Res<LevelDef>,
    textures: Res<GeneratedTextures>,
    collectibles: Query<(), With<Collectible>>,
    population: Query<Entity, With<LevelPopulation>>,
) {
    let reset = reset_events.read().count() > 0;

    if reset {
        for _ in taken_events.read() {}

        let mut removed = 0;
        for entity in &population {
            commands.entity(entity).despawn();
            removed += 1;
        }
        spawn_population(&mut commands, &level, &textures);
        info!("Level reset: replaced {} batteries and enemies", removed);
        return;
    }

    for event in taken_events.read() {
        if collectibles.contains(event.entity) {
            commands.entity(event.entity).despawn();
            debug!("Battery {:?} collected", event.entity);
        }
    }
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
