// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language selection persisted across sessions through the file store

use fleetease_i18n::i18n::{Catalog, Lang, LanguageState, Selection, PREFERENCE_KEY};
use fleetease_i18n::storage::{FileStore, PreferenceStore};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("embedded catalog should load"))
}

#[test]
fn test_no_preference_means_turkish() {
    let dir = TempDir::new().unwrap();
    let state = LanguageState::new(catalog(), FileStore::new(dir.path().join("prefs.json")));
    assert_eq!(state.active(), Lang::Tr);
    assert_eq!(state.selection(), Selection::Default);
    assert!(!dir.path().join("prefs.json").exists());
}

#[test]
fn test_selection_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let catalog = catalog();

    let mut state = LanguageState::new(Arc::clone(&catalog), FileStore::new(&path));
    assert!(state.select("ru"));
    drop(state);

    let reloaded = LanguageState::new(catalog, FileStore::new(&path));
    assert_eq!(reloaded.selection(), Selection::Explicit(Lang::Ru));
    assert_eq!(reloaded.resolver().text("nav.login"), "Вход");
}

#[test]
fn test_persisted_value_is_bare_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let mut state = LanguageState::new(catalog(), FileStore::new(&path));
    state.select("en");

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[PREFERENCE_KEY], serde_json::Value::String("en".into()));
}

#[test]
fn test_unsupported_selection_leaves_storage_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let mut state = LanguageState::new(catalog(), FileStore::new(&path));

    assert!(!state.select("es"));
    assert!(!path.exists());

    state.select("fr");
    let before = fs::read_to_string(&path).unwrap();
    assert!(!state.select("klingon"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(state.active(), Lang::Fr);
}

#[test]
fn test_corrupt_preference_file_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "][").unwrap();
    let state = LanguageState::new(catalog(), FileStore::new(&path));
    assert_eq!(state.active(), Lang::Tr);
}

#[test]
fn test_selection_after_corrupt_file_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "][").unwrap();
    let catalog = catalog();

    let mut state = LanguageState::new(Arc::clone(&catalog), FileStore::new(&path));
    assert!(state.select("ru"));
    drop(state);

    let reloaded = LanguageState::new(catalog, FileStore::new(&path));
    assert_eq!(reloaded.active(), Lang::Ru);
    assert_ne!(fs::read_to_string(&path).unwrap(), "][");
}

#[test]
fn test_store_written_by_hand_is_honoured() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let mut store = FileStore::new(&path);
    store.save(PREFERENCE_KEY, "de").unwrap();

    let state = LanguageState::new(catalog(), FileStore::new(&path));
    assert_eq!(state.active(), Lang::De);
    assert_eq!(state.resolver().text("nav.login"), "Anmelden");
}
