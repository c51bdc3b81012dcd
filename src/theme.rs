//! Theme Mode
//!
//! Light/dark palette, persisted across sessions. Dark is the default.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::THEME_MODE_KEY;
use crate::storage::KeyValueStore;

pub const ACCENT_PRIMARY: &str = "#667eea";
pub const ACCENT_SECONDARY: &str = "#764ba2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Surface colors for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f8fafc",
    text: "#0f172a",
    muted: "#64748b",
    border: "#e2e8f0",
};

const DARK: Palette = Palette {
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f1f5f9",
    muted: "#94a3b8",
    border: "#334155",
};

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// CSS custom properties for the app root
    pub fn style_vars(&self) -> String {
        let p = self.palette();
        format!(
            "--bg: {}; --surface: {}; --text: {}; --muted: {}; --border: {}; --accent: {}; --accent-2: {};",
            p.background, p.surface, p.text, p.muted, p.border, ACCENT_PRIMARY, ACCENT_SECONDARY
        )
    }

    pub fn load(storage: &dyn KeyValueStore) -> Self {
        storage
            .get(THEME_MODE_KEY)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &dyn KeyValueStore) {
        storage.set(THEME_MODE_KEY, self.as_str());
    }
}

/// Reactive theme handle provided at the app root
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    storage: StoredValue<Arc<dyn KeyValueStore>>,
}

impl ThemeContext {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let mode = ThemeMode::load(storage.as_ref());
        Self {
            mode: RwSignal::new(mode),
            storage: StoredValue::new(storage),
        }
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.storage.with_value(|storage| next.save(storage.as_ref()));
        log::info!("[THEME] Switched to {}", next.as_str());
        self.mode.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::load(&MemoryStorage::new()), ThemeMode::Dark);
    }

    #[test]
    fn test_persisted_choice_restored() {
        let storage = MemoryStorage::new();
        ThemeMode::Light.save(&storage);
        assert_eq!(storage.get(THEME_MODE_KEY).as_deref(), Some("light"));
        assert_eq!(ThemeMode::load(&storage), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set(THEME_MODE_KEY, "sepia");
        assert_eq!(ThemeMode::load(&storage), ThemeMode::Dark);
    }

    #[test]
    fn test_style_vars_carry_accent() {
        let vars = ThemeMode::Light.style_vars();
        assert!(vars.contains("--accent: #667eea;"));
        assert!(vars.contains("--bg: #ffffff;"));
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
