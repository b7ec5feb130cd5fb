//! Sprites module: procedural textures and world draw order.
//!
//! Nothing is loaded from disk. Textures are drawn into `Image` assets at
//! startup and shared through [`GeneratedTextures`].

pub mod layers;
pub mod textures;


use bevy::prelude::*;

pub use layers::DrawLayer;
pub use textures::GeneratedTextures;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, textures::generate_textures);
    }
}
