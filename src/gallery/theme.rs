use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Light => "fa-solid fa-moon",
            Self::Dark => "fa-solid fa-sun",
        }
    }
}

/// Client-side key/value storage, e.g. the browser's local storage.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Dark when the user picked dark, or picked nothing and the system
/// prefers dark. An empty stored value counts as nothing picked.
pub fn initial_theme(store: &impl ThemeStore, system_prefers_dark: bool) -> Theme {
    let stored = store.get(THEME_KEY).filter(|value| !value.is_empty());

    match stored.as_deref() {
        Some("dark") => Theme::Dark,
        None if system_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn persist_theme(store: &mut impl ThemeStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}
