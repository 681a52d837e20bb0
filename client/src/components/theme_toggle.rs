//! Light/dark toggle button in the site header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button owns the `ThemeController`, the single writer of the root
//! theme attribute, root classes and the stored preference. It publishes
//! snapshots to the shared `ThemeState` signal for anything else that needs
//! to read the theme.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeState};
use crate::util::theme::ThemeController;

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let controller = StoredValue::new(ThemeController::default());

    // Effects only run after hydration, so SSR and the first client render
    // both see the unmounted (light) state.
    Effect::new(move || {
        if let Some(state) = controller.try_update_value(|c| {
            c.initialize();
            c.state()
        }) {
            theme.set(state);
        }
    });

    let on_toggle = move |_| {
        if let Some(state) = controller.try_update_value(|c| {
            c.toggle();
            c.state()
        }) {
            theme.set(state);
        }
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=on_toggle
            aria-label=move || theme.get().toggle_label()
        >
            {move || match theme.get().render_theme() {
                Theme::Light => view! { <MoonIcon/> }.into_any(),
                Theme::Dark => view! { <SunIcon/> }.into_any(),
            }}
        </button>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round">
            <circle cx="12" cy="12" r="4.5"/>
            <path d="M12 2v2.5M12 19.5V22M4.22 4.22l1.76 1.76M17.5 17.5l1.76 1.76M2 12h2.5M19.5 12H22M4.22 19.78l1.76-1.76M17.5 6.5l1.76-1.76"/>
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="#120a33" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 4.2a7.8 7.8 0 1 0 7.8 9.17 6.5 6.5 0 1 1-7.8-9.17Z"/>
        </svg>
    }
}
