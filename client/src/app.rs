//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_DESCRIPTION, SITE_TITLE, THEME_COLOR_DARK, THEME_COLOR_LIGHT};
use crate::pages::landing::LandingPage;
use crate::state::theme::ThemeState;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root starts out light; the theme toggle swaps it once hydrated.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="light" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {theme_color_meta("(prefers-color-scheme: light)", THEME_COLOR_LIGHT)}
                {theme_color_meta("(prefers-color-scheme: dark)", THEME_COLOR_DARK)}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

/// `theme-color` for one color scheme. The typed `<meta>` has no `media`
/// attribute, so it goes on as a custom one.
fn theme_color_meta(media: &'static str, color: &'static str) -> impl IntoView {
    leptos::html::meta().name("theme-color").content(color).attr("media", media)
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/avotonix.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
