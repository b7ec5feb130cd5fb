//! Content domain: data-driven tuning and level layout.

mod data;
mod loader;
mod validation;


pub use data::{
    CollectibleSpawnRule, EnemySpawnRule, GameplayTuning, LevelDef, LifecycleTuning,
    MovementTuning, PlatformDef, PresentationTuning, WorldTuning,
};
pub use loader::{ContentLoadError, load_all_content, load_embedded_content};
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;

/// Loads content once, before the app is assembled, so the window can be
/// sized from it. Diagnostics are logged when the plugin is built.
pub struct ContentPlugin {
    tuning: GameplayTuning,
    level: LevelDef,
    report: LoadReport,
}

/// What went wrong while resolving content
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Errors reading `assets/data` (native only)
    pub disk_errors: Vec<ContentLoadError>,
    /// Errors parsing the embedded copies
    pub embedded_errors: Vec<ContentLoadError>,
    pub problems: Vec<ValidationError>,
}

impl LoadReport {
    /// Whether the built-in defaults replaced the data files.
    pub fn used_defaults(&self) -> bool {
        !self.embedded_errors.is_empty() || !self.problems.is_empty()
    }
}

impl ContentPlugin {
    pub fn load() -> Self {
        let (tuning, level, report) = load_content();
        Self {
            tuning,
            level,
            report,
        }
    }

    pub fn tuning(&self) -> &GameplayTuning {
        &self.tuning
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let report = &self.report;
        for e in &report.disk_errors {
            warn!("{}", e);
        }
        if !report.disk_errors.is_empty() {
            info!("Falling back to embedded content");
        }
        for e in &report.embedded_errors {
            error!("{}", e);
        }
        for problem in &report.problems {
            error!("Invalid content: {}", problem);
        }
        if report.used_defaults() {
            warn!("Content failed to load or validate, using built-in defaults");
        } else {
            info!(
                "Content loaded: {} platforms, {} collectibles, {} enemies",
                self.level.platforms.len(),
                self.level.collectibles.count,
                self.level.enemies.count
            );
        }

        app.insert_resource(self.tuning.clone())
            .insert_resource(self.level.clone());
    }
}

/// Resolve the data files, falling back to built-in defaults so a bad file
/// never stops the game from starting.
pub fn load_content() -> (GameplayTuning, LevelDef, LoadReport) {
    let mut report = LoadReport::default();

    let loaded = match read_disk_content() {
        Ok(content) => Ok(content),
        Err(errors) => {
            report.disk_errors = errors;
            load_embedded_content()
        }
    };

    let (tuning, level) = match loaded {
        Ok(content) => content,
        Err(errors) => {
            report.embedded_errors = errors;
            return (GameplayTuning::default(), LevelDef::default(), report);
        }
    };

    report.problems = validate_content(&tuning, &level);
    if report.problems.is_empty() {
        (tuning, level, report)
    } else {
        (GameplayTuning::default(), LevelDef::default(), report)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_disk_content() -> Result<(GameplayTuning, LevelDef), Vec<ContentLoadError>> {
    load_all_content(std::path::Path::new("assets/data"))
}

/// The browser build has no filesystem; go straight to the embedded copies.
#[cfg(target_arch = "wasm32")]
fn read_disk_content() -> Result<(GameplayTuning, LevelDef), Vec<ContentLoadError>> {
    load_embedded_content()
}
