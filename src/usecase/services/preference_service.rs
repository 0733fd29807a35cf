use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::usecase::ports::preferences::PreferenceStore;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Theme and language choices, read back with defaults when the stored value
/// is missing, unrecognized or unreadable.
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read preference");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!(key, value, error = %err, "failed to save preference");
        }
    }

    pub fn load_theme(&self) -> ThemeMode {
        self.read(THEME_KEY)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: ThemeMode) {
        self.write(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.save_theme(next);
        next
    }

    pub fn load_language(&self) -> Language {
        self.read(LANGUAGE_KEY)
            .and_then(|value| Language::parse(&value))
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) {
        self.write(LANGUAGE_KEY, language.code());
    }
}
