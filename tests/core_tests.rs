//! Integration tests for XFDraughts settings persistence
//!
//! Settings are written and read through real files in a temporary
//! directory, the same way the binary does at startup.

use draughts_engine::search::Algorithm;
use std::fs;
use std::path::PathBuf;
use xfdraughts::core::settings_persistence::{read_settings, save_settings_to};
use xfdraughts::core::{load_settings_from, CoreError, GameSettings};
use xfdraughts::game::ai::{AIDifficulty, PlayerKind};

/// Fresh path under the system temp directory, unique per test
fn temp_settings(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("xfdraughts-core-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("settings.json")
}

#[test]
fn test_settings_survive_roundtrip() {
    //! Verifies every field written by `save_settings_to` is read back
    //!
    //! The nested directory does not exist beforehand, so this also checks
    //! that saving creates it.

    let path = temp_settings("roundtrip");
    let settings = GameSettings {
        difficulty: AIDifficulty::Hard,
        depth: Some(5),
        algorithm: Algorithm::Negamax,
        white: PlayerKind::Ai,
        black: PlayerKind::Human,
        max_plies: 80,
        seed: Some(42),
    };

    save_settings_to(&settings, &path).expect("settings saved");
    assert_eq!(read_settings(&path).expect("settings read"), settings);
    assert_eq!(load_settings_from(&path), settings);
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_settings("missing");
    assert_eq!(load_settings_from(&path), GameSettings::default());
}

#[test]
fn test_corrupt_file_gives_defaults() {
    //! A broken file must never stop the game from starting

    let path = temp_settings("corrupt");
    fs::create_dir_all(path.parent().expect("has parent")).expect("temp dir");
    fs::write(&path, "{ not json").expect("write file");

    assert!(matches!(
        read_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(load_settings_from(&path), GameSettings::default());
}

#[test]
fn test_invalid_values_give_defaults() {
    let path = temp_settings("invalid");
    fs::create_dir_all(path.parent().expect("has parent")).expect("temp dir");
    fs::write(&path, r#"{ "depth": 0 }"#).expect("write file");

    assert!(matches!(
        read_settings(&path),
        Err(CoreError::InvalidSetting { .. })
    ));
    assert_eq!(load_settings_from(&path), GameSettings::default());
}

#[test]
fn test_algorithm_stored_by_name() {
    let path = temp_settings("algorithm");
    let settings = GameSettings { algorithm: Algorithm::Minimax, ..GameSettings::default() };
    save_settings_to(&settings, &path).expect("settings saved");

    let text = fs::read_to_string(&path).expect("read file");
    assert!(text.contains(r#""algorithm": "minimax""#));
}
