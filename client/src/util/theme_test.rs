use std::collections::{BTreeSet, HashMap};

use super::*;
use crate::state::theme::{STORAGE_KEY, THEME_ATTRIBUTE};

/// In-memory stand-in for `<html>` plus `localStorage`.
#[derive(Debug, Default)]
struct MemorySurface {
    attributes: HashMap<String, String>,
    classes: BTreeSet<String>,
    storage: HashMap<String, String>,
    prefers_dark: bool,
    storage_broken: bool,
}

impl MemorySurface {
    fn with_stored(value: &str) -> Self {
        let mut surface = Self::default();
        surface.storage.insert(STORAGE_KEY.to_owned(), value.to_owned());
        surface
    }

    fn preferring_dark() -> Self {
        Self { prefers_dark: true, ..Self::default() }
    }

    fn root_theme(&self) -> Option<&str> {
        self.attributes.get(THEME_ATTRIBUTE).map(String::as_str)
    }

    fn stored(&self) -> Option<&str> {
        self.storage.get(STORAGE_KEY).map(String::as_str)
    }

    fn snapshot(&self) -> (HashMap<String, String>, BTreeSet<String>, HashMap<String, String>) {
        (self.attributes.clone(), self.classes.clone(), self.storage.clone())
    }
}

impl PresentationSurface for MemorySurface {
    fn stored_theme(&self) -> Option<String> {
        self.storage.get(STORAGE_KEY).cloned()
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn set_root_theme(&mut self, theme: Theme) {
        self.attributes.insert(THEME_ATTRIBUTE.to_owned(), theme.as_str().to_owned());
        self.classes.remove(theme.opposite_class());
        self.classes.insert(theme.as_str().to_owned());
    }

    fn persist(&mut self, theme: Theme) {
        if self.storage_broken {
            return;
        }
        self.storage.insert(STORAGE_KEY.to_owned(), theme.as_str().to_owned());
    }
}

fn assert_root_is(surface: &MemorySurface, theme: Theme) {
    assert_eq!(surface.root_theme(), Some(theme.as_str()));
    assert!(surface.classes.contains(theme.as_str()));
    assert!(!surface.classes.contains(theme.opposite_class()));
    assert_eq!(surface.classes.len(), 1);
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn controller_reports_light_before_initialize() {
    let controller = ThemeController::new(MemorySurface::with_stored("dark"));
    assert_eq!(controller.current(), Theme::Light);
    assert!(!controller.state().mounted);
    assert_eq!(controller.surface().root_theme(), None);
}

#[test]
fn initialize_without_stored_value_uses_dark_system_preference() {
    let mut controller = ThemeController::new(MemorySurface::preferring_dark());
    assert_eq!(controller.initialize(), Theme::Dark);

    let surface = controller.surface();
    assert_root_is(surface, Theme::Dark);
    assert_eq!(surface.stored(), Some("dark"));
    assert_eq!(controller.current(), Theme::Dark);
    assert!(controller.state().mounted);
}

#[test]
fn initialize_without_stored_value_defaults_to_light() {
    let mut controller = ThemeController::new(MemorySurface::default());
    assert_eq!(controller.initialize(), Theme::Light);
    assert_root_is(controller.surface(), Theme::Light);
    assert_eq!(controller.surface().stored(), Some("light"));
}

#[test]
fn initialize_stored_value_beats_system_preference() {
    let mut surface = MemorySurface::with_stored("light");
    surface.prefers_dark = true;
    let mut controller = ThemeController::new(surface);
    assert_eq!(controller.initialize(), Theme::Light);
    assert_root_is(controller.surface(), Theme::Light);
}

#[test]
fn initialize_malformed_stored_value_is_overwritten() {
    let mut surface = MemorySurface::with_stored("midnight");
    surface.prefers_dark = true;
    let mut controller = ThemeController::new(surface);
    assert_eq!(controller.initialize(), Theme::Dark);
    assert_eq!(controller.surface().stored(), Some("dark"));
}

// =============================================================
// Apply / toggle
// =============================================================

#[test]
fn apply_is_idempotent() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut controller = ThemeController::new(MemorySurface::default());
        controller.apply(theme);
        let once = controller.surface().snapshot();
        controller.apply(theme);
        assert_eq!(controller.surface().snapshot(), once);
        assert_root_is(controller.surface(), theme);
    }
}

#[test]
fn apply_replaces_previous_class() {
    let mut controller = ThemeController::new(MemorySurface::default());
    controller.apply(Theme::Dark);
    controller.apply(Theme::Light);
    assert_root_is(controller.surface(), Theme::Light);
}

#[test]
fn toggle_from_stored_light_persists_dark() {
    let mut controller = ThemeController::new(MemorySurface::with_stored("light"));
    controller.initialize();
    assert_eq!(controller.toggle(), Theme::Dark);

    let surface = controller.surface();
    assert_eq!(surface.stored(), Some("dark"));
    assert_eq!(surface.root_theme(), Some("dark"));
}

#[test]
fn toggle_twice_returns_to_start() {
    for start in ["light", "dark"] {
        let mut controller = ThemeController::new(MemorySurface::with_stored(start));
        let initial = controller.initialize();
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.current(), initial);
        assert_eq!(controller.surface().stored(), Some(start));
        assert_root_is(controller.surface(), initial);
    }
}

#[test]
fn broken_storage_still_switches_in_memory_theme() {
    let mut surface = MemorySurface::with_stored("light");
    surface.storage_broken = true;
    let mut controller = ThemeController::new(surface);
    controller.initialize();
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.surface().root_theme(), Some("dark"));
    assert_eq!(controller.surface().stored(), Some("light"));
}

// =============================================================
// BrowserSurface outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_surface_is_inert_without_hydrate() {
    let mut controller = ThemeController::default();
    assert_eq!(controller.surface().stored_theme(), None);
    assert!(!controller.surface().prefers_dark());
    assert_eq!(controller.initialize(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
}
