//! Audio domain: byte cache for the theme track.
//!
//! The browser build keeps the track in LocalStorage so later visits skip
//! the download. Native builds only cache for the lifetime of the process.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No storage backend could be reached
    Unavailable,
    /// Stored text was not valid base64
    Corrupt(String),
    /// The backend refused the write (quota, private mode, ...)
    WriteFailed(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Unavailable => write!(f, "audio cache unavailable"),
            CacheError::Corrupt(message) => write!(f, "cached audio is corrupt: {message}"),
            CacheError::WriteFailed(message) => write!(f, "audio cache write failed: {message}"),
        }
    }
}

impl std::error::Error for CacheError {}

/// Key/value store for encoded audio.
pub trait AudioCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError>;
}

/// Process-local cache.
#[derive(Debug, Default)]
pub struct MemoryAudioCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl AudioCache for MemoryAudioCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Unavailable)?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Text form stored in LocalStorage.
pub fn encode_blob(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_blob(text: &str) -> Result<Vec<u8>, CacheError> {
    STANDARD
        .decode(text)
        .map_err(|e| CacheError::Corrupt(e.to_string()))
}

/// Cache backed by `window.localStorage`.
///
/// The storage handle is looked up on every call, so the cache itself holds
/// no browser objects.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageAudioCache;

#[cfg(target_arch = "wasm32")]
impl LocalStorageAudioCache {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioCache for LocalStorageAudioCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let text = Self::storage()?.get_item(key).ok().flatten()?;
        match decode_blob(&text) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                bevy::log::warn!("Ignoring cached audio '{}': {}", key, e);
                None
            }
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let storage = Self::storage().ok_or(CacheError::Unavailable)?;
        storage
            .set_item(key, &encode_blob(bytes))
            .map_err(|e| CacheError::WriteFailed(format!("{e:?}")))
    }
}

/// The cache backend for the current platform.
pub fn platform_cache() -> Box<dyn AudioCache> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageAudioCache)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(MemoryAudioCache::default())
    }
}
