//! Light/dark theme model shared by the toggle and the page shell.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of the stored string and the system
//! preference so it can be tested without a browser. Side effects live in
//! `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "avotonix-theme";

/// Media query consulted when nothing valid is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Active color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage and attribute value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an exact stored literal. Anything else counts as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class that must be absent from the root while this theme is active.
    #[must_use]
    pub const fn opposite_class(self) -> &'static str {
        self.toggled().as_str()
    }
}

/// Pick the initial theme from a stored value, falling back to the system
/// color-scheme preference.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Reactive theme state provided through context.
///
/// `mounted` stays false until the browser has resolved the real theme, and
/// until then the render theme is pinned to light so SSR output and the
/// first hydrated render agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub mounted: bool,
}

impl ThemeState {
    /// Theme to use for markup.
    #[must_use]
    pub fn render_theme(&self) -> Theme {
        if self.mounted { self.theme } else { Theme::Light }
    }

    /// Label for the toggle button, naming the theme a click switches to.
    #[must_use]
    pub fn toggle_label(&self) -> String {
        format!("Switch to {} mode", self.render_theme().toggled().as_str())
    }
}
