//! Persisted user preferences: language and dark mode.
//!
//! Two independent optional entries in `prefs.toml`. Every set rewrites
//! the file immediately; an unavailable file degrades to session-only
//! preferences and never surfaces an error to the caller.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::i18n::Language;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Option<Language>,
    pub dark_mode: Option<bool>,
}

pub struct PrefStore {
    /// None means storage is unavailable; the session runs in memory.
    path: Option<PathBuf>,
    prefs: Preferences,
}

impl PrefStore {
    /// Load from the default location, swallowing every failure into
    /// defaults. A missing or unparseable file is not an error.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config directory; preferences are session-only");
                Self::in_memory()
            }
        }
    }

    /// Load from an explicit path (tests use a temp dir).
    pub fn load_from(path: PathBuf) -> Self {
        let prefs = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default();

        Self {
            path: Some(path),
            prefs,
        }
    }

    /// Storage-less store for the degraded session-only mode.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            prefs: Preferences::default(),
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trendpulse").join("prefs.toml"))
    }

    /// Stored language, defaulting to Korean.
    pub fn language(&self) -> Language {
        self.prefs.language.unwrap_or(Language::Ko)
    }

    /// Dark mode, resolved as stored value > terminal signal > light.
    pub fn dark_mode(&self) -> bool {
        self.resolve_dark_mode(terminal_dark_signal())
    }

    fn resolve_dark_mode(&self, signal: Option<bool>) -> bool {
        match self.prefs.dark_mode {
            Some(stored) => stored,
            None => signal.unwrap_or(false),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.prefs.language = Some(language);
        self.persist();
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.prefs.dark_mode = Some(dark);
        self.persist();
    }

    /// Best-effort write. A failure downgrades to session-only behavior
    /// for this value; it must never block or crash the UI.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!("could not create preference directory: {}", e);
                return;
            }
        }

        match toml::to_string_pretty(&self.prefs) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(path, contents) {
                    debug!("could not write preferences: {}", e);
                }
            }
            Err(e) => debug!("could not serialize preferences: {}", e),
        }
    }
}

/// Terminal background heuristic standing in for an OS dark-scheme signal.
///
/// Many terminal emulators export `COLORFGBG` like "15;0"; a background
/// index of 0-6 or 8 is conventionally a dark palette. No variable means
/// no signal.
fn terminal_dark_signal() -> Option<bool> {
    let value = std::env::var("COLORFGBG").ok()?;
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_store_defaults_to_korean_and_light() {
        let store = PrefStore::in_memory();
        assert_eq!(store.language(), Language::Ko);
        assert!(!store.resolve_dark_mode(None));
    }

    #[test]
    fn dark_signal_applies_only_without_stored_value() {
        let mut store = PrefStore::in_memory();
        assert!(store.resolve_dark_mode(Some(true)));
        assert!(!store.resolve_dark_mode(Some(false)));

        // Stored value beats the signal
        store.set_dark_mode(false);
        assert!(!store.resolve_dark_mode(Some(true)));
    }

    #[test]
    fn writes_survive_a_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut store = PrefStore::load_from(path.clone());
        store.set_language(Language::En);
        store.set_dark_mode(true);

        let reloaded = PrefStore::load_from(path);
        assert_eq!(reloaded.language(), Language::En);
        assert!(reloaded.resolve_dark_mode(None));
    }

    #[test]
    fn each_key_persists_independently() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut store = PrefStore::load_from(path.clone());
        store.set_dark_mode(true);

        let reloaded = PrefStore::load_from(path);
        assert_eq!(reloaded.language(), Language::Ko, "language stays default");
        assert!(reloaded.resolve_dark_mode(None));
    }

    #[test]
    fn unreadable_file_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let store = PrefStore::load_from(path);
        assert_eq!(store.language(), Language::Ko);
    }

    #[test]
    fn in_memory_store_accepts_writes_without_a_file() {
        let mut store = PrefStore::in_memory();
        store.set_language(Language::En);
        assert_eq!(store.language(), Language::En);
    }
}
