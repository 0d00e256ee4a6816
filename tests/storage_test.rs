//! Tests for the key/value backends and the theme preference.

use tictactoe_core::{
    FileStore, MemoryStore, Storage, THEME_KEY, ThemePreference,
};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    assert_eq!(store.read("some_key").unwrap(), None);

    store.write("some_key", "some value").unwrap();
    assert_eq!(store.read("some_key").unwrap(), Some("some value".to_string()));

    store.write("some_key", "replaced").unwrap();
    assert_eq!(store.read("some_key").unwrap(), Some("replaced".to_string()));
}

#[test]
fn test_file_store_missing_directory_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never_created");

    let store = FileStore::new(&missing);
    assert_eq!(store.read("anything").unwrap(), None);
}

#[test]
fn test_file_store_creates_directory_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");

    let mut store = FileStore::new(&nested);
    store.write("k", "v").unwrap();

    assert!(nested.join("k").is_file());
}

#[test]
fn test_memory_store_fail_writes() {
    let mut store = MemoryStore::new();
    store.write("k", "v").unwrap();

    store.fail_writes(true);
    assert!(store.write("k", "v2").is_err());

    // The earlier value is still readable.
    assert_eq!(store.read("k").unwrap(), Some("v".to_string()));
}

#[test]
fn test_theme_defaults_to_dark() {
    let store = MemoryStore::new();
    assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);
}

#[test]
fn test_theme_loads_light_only_for_exact_value() {
    let mut store = MemoryStore::new();

    store.seed(THEME_KEY, "light");
    assert_eq!(ThemePreference::load(&store), ThemePreference::Light);

    store.seed(THEME_KEY, "LIGHT");
    assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);

    store.seed(THEME_KEY, "solarized");
    assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);
}

#[test]
fn test_theme_save_round_trip() {
    let mut store = MemoryStore::new();

    ThemePreference::Light.save(&mut store);
    assert_eq!(store.get(THEME_KEY), Some("light"));
    assert_eq!(ThemePreference::load(&store), ThemePreference::Light);

    ThemePreference::Dark.save(&mut store);
    assert_eq!(store.get(THEME_KEY), Some("dark"));
    assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);
}

#[test]
fn test_theme_save_swallows_write_failure() {
    let mut store = MemoryStore::new();
    store.fail_writes(true);

    // Must not panic; the preference simply isn't persisted.
    ThemePreference::Light.save(&mut store);
    assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);
}

#[test]
fn test_theme_toggled() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
}
