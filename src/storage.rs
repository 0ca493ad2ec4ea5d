// storage.rs - Local Key-Value Preference Store
//
// A small JSON-backed key/value store used for app preferences and cached
// screen data. One reserved key holds the theme mode; everything else is
// treated as disposable cache.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::theme::ThemeMode;

/// Reserved key for the persisted theme mode. Survives `clear_cache`.
pub const THEME_MODE_KEY: &str = "preferences.theme_mode";

/// File-backed key/value store.
///
/// All values are strings; callers serialize anything richer themselves.
/// Reads are tolerant: a missing or corrupt file degrades to an empty store.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl KeyValueStore {
    /// Default store location under the platform config directory.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("LottoDesk");
        let _ = fs::create_dir_all(&config_dir);
        config_dir.join("storage.json")
    }

    /// Open the store at `path`, loading existing entries if present.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => {
                info!("Loaded {} entries from {:?}", entries.len(), path);
                entries
            }
            Err(e) => {
                warn!("Starting with empty store: {e:#}");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persisted theme mode, if any. Unknown values fall back to `System`
    /// with a warning rather than propagating an error.
    pub fn theme_mode(&self) -> ThemeMode {
        match self.get(THEME_MODE_KEY) {
            None => ThemeMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Unknown theme mode {raw:?}, falling back to system");
                ThemeMode::default()
            }),
        }
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.set(THEME_MODE_KEY, mode.as_str());
    }

    /// Remove every entry except the theme mode. Returns how many entries
    /// were dropped.
    pub fn clear_cache(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key == THEME_MODE_KEY);
        let removed = before - self.entries.len();
        info!("Cleared {removed} cached entries");
        removed
    }

    /// Write the store to disk.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("failed to serialize store")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Persist `mode` into the store at `path`.
///
/// Runs as a background task; the caller applies the new mode to its state
/// only after the write succeeds, so a failed write leaves the previous mode
/// in effect. The error is stringly typed so the result stays `Clone` for
/// message passing.
pub async fn persist_theme_mode(path: PathBuf, mode: ThemeMode) -> Result<ThemeMode, String> {
    let mut store = KeyValueStore::open(&path);
    store.set_theme_mode(mode);
    match store.save() {
        Ok(()) => {
            info!("Theme mode saved: {mode}");
            Ok(mode)
        }
        Err(e) => {
            error!("Failed to save theme mode: {e:#}");
            Err(format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, KeyValueStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KeyValueStore::open(dir.path().join("storage.json"));
        (dir, store)
    }

    #[test]
    fn theme_mode_round_trips_for_every_mode() {
        let (dir, mut store) = temp_store();
        for mode in ThemeMode::ALL {
            store.set_theme_mode(mode);
            store.save().expect("save");
            let reloaded = KeyValueStore::open(dir.path().join("storage.json"));
            assert_eq!(reloaded.theme_mode(), mode);
        }
    }

    #[test]
    fn missing_file_defaults_to_system() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KeyValueStore::open(dir.path().join("nope.json"));
        assert_eq!(store.theme_mode(), ThemeMode::System);
    }

    #[test]
    fn corrupt_file_degrades_to_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").expect("write");
        let store = KeyValueStore::open(&path);
        assert!(store.is_empty());
        assert_eq!(store.theme_mode(), ThemeMode::System);
    }

    #[test]
    fn unknown_theme_value_falls_back_to_system() {
        let (_dir, mut store) = temp_store();
        store.set(THEME_MODE_KEY, "sepia");
        assert_eq!(store.theme_mode(), ThemeMode::System);
    }

    #[test]
    fn clear_cache_preserves_theme_key_only() {
        let (_dir, mut store) = temp_store();
        store.set_theme_mode(ThemeMode::Dark);
        store.set("cache.organizations", "[]");
        store.set("cache.session", "abc123");
        let removed = store.clear_cache();
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.theme_mode(), ThemeMode::Dark);
        assert!(store.get("cache.organizations").is_none());
    }

    #[test]
    fn persist_theme_mode_writes_through() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        let saved = rt
            .block_on(persist_theme_mode(path.clone(), ThemeMode::Light))
            .expect("persist");
        assert_eq!(saved, ThemeMode::Light);
        assert_eq!(KeyValueStore::open(path).theme_mode(), ThemeMode::Light);
    }
}
