//! Audio domain: cached theme music.

mod cache;
mod music;


pub use cache::{AudioCache, CacheError, MemoryAudioCache, decode_blob, encode_blob};
pub use music::{BackgroundMusic, MusicCache, ThemeMusic};

use bevy::prelude::*;

use crate::audio::music::{cache_loaded_theme, start_background_music, warm_theme_music};
use crate::core::GameState;

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicCache>()
            .init_resource::<ThemeMusic>()
            .add_systems(OnEnter(GameState::Splash), warm_theme_music)
            .add_systems(
                OnEnter(GameState::Menu),
                (warm_theme_music, start_background_music).chain(),
            )
            .add_systems(Update, cache_loaded_theme);
    }
}
