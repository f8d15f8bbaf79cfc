//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file. Provides persistence
//! of user preferences across sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory, or in the working directory when no configuration directory
//! can be determined.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are returned to the caller, which logs them

use super::error::CoreResult;
use super::resources::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the settings file path
///
/// Returns a path to `settings.json` in the user's configuration directory,
/// e.g. `~/.config/xfdraughts/settings.json` on Linux.
/// Falls back to local "settings.json" if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFDraughts") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<GameSettings>(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, using defaults if the file is missing or bad
pub fn load_settings_from(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Load settings from the default location
pub fn load_settings() -> GameSettings {
    load_settings_from(&settings_path())
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings_to(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Write settings to the default location and return where they went
pub fn save_settings(settings: &GameSettings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::{AIDifficulty, PlayerKind};
    use draughts_engine::search::Algorithm;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("xfdraughts-{}-{}", name, std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let path = scratch_path("roundtrip");
        let settings = GameSettings {
            difficulty: AIDifficulty::Hard,
            algorithm: Algorithm::Negamax,
            white: PlayerKind::Ai,
            seed: Some(7),
            ..GameSettings::default()
        };

        save_settings_to(&settings, &path).expect("writable temp dir");
        assert_eq!(load_settings_from(&path), settings);

        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        assert_eq!(load_settings_from(&path), GameSettings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().expect("has parent")).expect("writable temp dir");
        fs::write(&path, "{ not json").expect("writable temp dir");

        assert!(read_settings(&path).is_err());
        assert_eq!(load_settings_from(&path), GameSettings::default());

        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }
}
