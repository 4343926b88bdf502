//! Light/dark theme preference.
//!
//! The active mode is persisted alongside the rest of the session state and
//! applied as a class on the document element so the stylesheet can switch
//! palettes.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::storage::{BrowserStorage, StorageBackend, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState<S: StorageBackend> {
    storage: S,
    pub mode: RwSignal<ThemeMode>,
}

impl<S: StorageBackend> ThemeState<S> {
    pub fn new(storage: S) -> Self {
        let mode = storage
            .read(THEME_KEY)
            .and_then(|s| ThemeMode::from_str(&s))
            .unwrap_or_default();
        Self {
            storage,
            mode: RwSignal::new(mode),
        }
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.storage.write(THEME_KEY, next.as_str());
        self.mode.set(next);
    }
}

/// Mirrors the current mode onto the document element class list.
pub fn apply_theme_class(mode: ThemeMode) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_1(mode.toggled().as_str());
        let _ = classes.add_1(mode.as_str());
    }
}

pub type AppThemeState = ThemeState<BrowserStorage>;

pub fn provide_theme_state() {
    provide_context(ThemeState::new(BrowserStorage));
}

pub fn use_theme_state() -> AppThemeState {
    expect_context::<AppThemeState>()
}
