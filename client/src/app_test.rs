#![cfg(feature = "ssr")]

use leptos_meta::ServerMetaContext;
use leptos_router::location::RequestUrl;

use super::*;

fn render_shell() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        let (meta, _output) = ServerMetaContext::new();
        provide_context(meta);
        let options = LeptosOptions::builder().output_name("avotonix").build();
        shell(options).to_html()
    })
}

/// Opening tag of the first `<tag` element in `html`.
fn open_tag<'a>(html: &'a str, tag: &str) -> &'a str {
    let start = html.find(&format!("<{tag}")).unwrap();
    let end = start + html[start..].find('>').unwrap();
    &html[start..=end]
}

#[test]
fn shell_root_starts_light() {
    let html = render_shell();
    assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
    let root = open_tag(&html, "html ");
    assert!(root.contains(r#"lang="en""#), "{root}");
    assert!(root.contains(r#"class="light""#), "{root}");
    assert!(root.contains(r#"data-theme="light""#), "{root}");
}

#[test]
fn shell_emits_theme_color_per_scheme() {
    let html = render_shell();
    assert!(
        html.contains(r##"<meta name="theme-color" content="#f6f2ff" media="(prefers-color-scheme: light)">"##),
        "{html}"
    );
    assert!(
        html.contains(r##"<meta name="theme-color" content="#090423" media="(prefers-color-scheme: dark)">"##),
        "{html}"
    );
}

#[test]
fn toggle_renders_light_label_before_hydration() {
    let html = render_shell();
    assert!(html.contains(r#"aria-label="Switch to dark mode""#), "{html}");
    assert!(!html.contains("Switch to light mode"), "{html}");
}

#[test]
fn landing_sections_render_with_anchors() {
    let html = render_shell();
    for id in ["features", "solutions", "process", "testimonials", "faq", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
    }
}
