//! Sticky header with brand, section navigation and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::NAV_ITEMS;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a href="/" class="site-header__brand">
                    <img src="/avotonix-logo.svg" alt="Avotonix logo" width="40" height="40" class="site-header__logo"/>
                    <span class="site-header__brand-text">
                        <span class="site-header__name">"Avotonix"</span>
                        <span class="site-header__tagline">"AI Voice Solutions Studio"</span>
                    </span>
                </a>
                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <a href=item.href class="site-header__link">{item.label}</a> })
                        .collect_view()}
                </nav>
                <div class="site-header__actions">
                    <ThemeToggle/>
                    <a href="#contact" class="btn-primary site-header__cta">
                        "Book a voice strategy call"
                    </a>
                </div>
            </div>
        </header>
    }
}
