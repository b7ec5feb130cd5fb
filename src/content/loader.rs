//! Loader for RON content files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

const EMBEDDED_TUNING: &str = include_str!("../../assets/data/tuning.ron");
const EMBEDDED_LEVEL: &str = include_str!("../../assets/data/level.ron");

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn parse<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse(&file_name, &contents)
}

/// Load tuning.ron and level.ron from `base_path`.
/// Returns every error encountered, not just the first.
pub fn load_all_content(base_path: &Path) -> Result<(GameplayTuning, LevelDef), Vec<ContentLoadError>> {
    let tuning = load_single_file::<GameplayTuning>(&base_path.join("tuning.ron"));
    let level = load_single_file::<LevelDef>(&base_path.join("level.ron"));

    match (tuning, level) {
        (Ok(tuning), Ok(level)) => Ok((tuning, level)),
        (tuning, level) => Err([tuning.err(), level.err()].into_iter().flatten().collect()),
    }
}

/// Parse the copies of the data files compiled into the binary.
pub fn load_embedded_content() -> Result<(GameplayTuning, LevelDef), Vec<ContentLoadError>> {
    let tuning = parse::<GameplayTuning>("embedded tuning.ron", EMBEDDED_TUNING);
    let level = parse::<LevelDef>("embedded level.ron", EMBEDDED_LEVEL);

    match (tuning, level) {
        (Ok(tuning), Ok(level)) => Ok((tuning, level)),
        (tuning, level) => Err([tuning.err(), level.err()].into_iter().flatten().collect()),
    }
}
