//! Theme initialization, application and toggle.
//!
//! Reads the user's preference from `localStorage`, falling back to the
//! system color scheme, and mirrors the active theme onto the `<html>`
//! element as a `data-theme` attribute plus one of the `light`/`dark`
//! classes. Requires a browser environment for anything observable.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior: storage failures are
//! dropped and the in-memory theme still changes. SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{Theme, ThemeState, resolve_initial};
#[cfg(feature = "hydrate")]
use crate::state::theme::{PREFERS_DARK_QUERY, STORAGE_KEY, THEME_ATTRIBUTE};

/// Document root and storage, as seen by the theme controller.
///
/// The controller is the only writer; components never touch the surface.
pub trait PresentationSurface {
    /// Raw value stored under the theme key, if any.
    fn stored_theme(&self) -> Option<String>;

    /// Whether the system asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Write the root attribute and swap the root classes.
    fn set_root_theme(&mut self, theme: Theme);

    /// Persist `theme` under the theme key, overwriting any prior value.
    fn persist(&mut self, theme: Theme);
}

/// `web-sys` backed surface. Every operation is a no-op outside `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSurface;

impl PresentationSurface for BrowserSurface {
    fn stored_theme(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set_root_theme(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            let class_list = root.class_list();
            let _ = class_list.toggle_with_force("dark", theme == Theme::Dark);
            let _ = class_list.toggle_with_force("light", theme == Theme::Light);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn persist(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Owns the presentation surface and the active theme.
#[derive(Debug)]
pub struct ThemeController<S> {
    surface: S,
    theme: Theme,
    initialized: bool,
}

impl<S: PresentationSurface> ThemeController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, theme: Theme::Light, initialized: false }
    }

    /// Resolve the starting theme, apply it, and mark the controller mounted.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.surface.stored_theme();
        let prefers_dark = self.surface.prefers_dark();
        let theme = resolve_initial(stored.as_deref(), prefers_dark);
        self.apply(theme);
        self.initialized = true;
        #[cfg(feature = "hydrate")]
        log::debug!("theme initialized: {} (stored {stored:?}, prefers dark {prefers_dark})", theme.as_str());
        theme
    }

    /// Set `theme` on the root and in storage.
    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        self.surface.set_root_theme(theme);
        self.surface.persist(theme);
    }

    /// Flip to the opposite theme and apply it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.apply(next);
        next
    }

    /// Snapshot for the reactive layer.
    pub fn state(&self) -> ThemeState {
        ThemeState { theme: self.theme, mounted: self.initialized }
    }

    /// Theme reported to markup; light until initialized.
    pub fn current(&self) -> Theme {
        self.state().render_theme()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl Default for ThemeController<BrowserSurface> {
    fn default() -> Self {
        Self::new(BrowserSurface)
    }
}
