//! Audio domain: theme track warm-up and menu music.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::audio::cache::{AudioCache, platform_cache};
use crate::content::GameplayTuning;

/// Cache used for the theme track
#[derive(Resource)]
pub struct MusicCache(pub Box<dyn AudioCache>);

impl Default for MusicCache {
    fn default() -> Self {
        Self(platform_cache())
    }
}

/// Handle to the theme track and whether it still needs caching
#[derive(Resource, Debug, Default)]
pub struct ThemeMusic {
    pub handle: Option<Handle<AudioSource>>,
    pub settled: bool,
}

/// Marker for the looping music entity
#[derive(Component, Debug)]
pub struct BackgroundMusic;

/// Resolve the theme track, from the cache when possible.
pub(crate) fn warm_theme_music(
    asset_server: Res<AssetServer>,
    mut audio_sources: ResMut<Assets<AudioSource>>,
    tuning: Res<GameplayTuning>,
    cache: Res<MusicCache>,
    mut theme: ResMut<ThemeMusic>,
) {
    if theme.handle.is_some() {
        return;
    }

    let presentation = &tuning.presentation;
    match cache.0.get(&presentation.music_cache_key) {
        Some(bytes) => {
            info!("Theme music restored from cache ({} bytes)", bytes.len());
            theme.handle = Some(audio_sources.add(AudioSource {
                bytes: bytes.into(),
            }));
            theme.settled = true;
        }
        None => {
            debug!("Theme music not cached, loading {}", presentation.music_path);
            theme.handle = Some(asset_server.load(presentation.music_path.clone()));
            theme.settled = false;
        }
    }
}

/// Once a freshly loaded track is available, store its bytes. Runs until the
/// load settles either way.
pub(crate) fn cache_loaded_theme(
    asset_server: Res<AssetServer>,
    audio_sources: Res<Assets<AudioSource>>,
    tuning: Res<GameplayTuning>,
    cache: Res<MusicCache>,
    mut theme: ResMut<ThemeMusic>,
) {
    if theme.settled {
        return;
    }
    let Some(handle) = theme.handle.clone() else {
        return;
    };

    if let Some(source) = audio_sources.get(&handle) {
        let key = &tuning.presentation.music_cache_key;
        match cache.0.put(key, &source.bytes) {
            Ok(()) => info!("Theme music cached under '{}'", key),
            Err(e) => warn!("Could not cache theme music: {}", e),
        }
        theme.settled = true;
    } else if matches!(asset_server.get_load_state(&handle), Some(LoadState::Failed(_))) {
        warn!(
            "Theme music failed to load from {}; continuing without music",
            tuning.presentation.music_path
        );
        theme.settled = true;
    }
}

/// Start the looping theme if it is not already playing.
pub(crate) fn start_background_music(
    mut commands: Commands,
    theme: Res<ThemeMusic>,
    playing: Query<(), With<BackgroundMusic>>,
) {
    if !playing.is_empty() {
        return;
    }
    let Some(handle) = theme.handle.clone() else {
        warn!("No theme music handle; menu stays silent");
        return;
    };

    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(handle),
        PlaybackSettings::LOOP,
    ));
}
