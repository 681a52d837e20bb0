//! "Why teams choose Avotonix" feature cards.

use leptos::prelude::*;

use crate::content::FEATURE_HIGHLIGHTS;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="section__header">
                <div>
                    <p class="section__eyebrow">"Why teams choose Avotonix"</p>
                    <h2 class="section__title">"Designed for real-world customer conversations"</h2>
                </div>
                <a href="#contact" class="btn-secondary">"Get a tailored walkthrough"</a>
            </div>
            <div class="feature-grid">
                {FEATURE_HIGHLIGHTS
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="surface-card feature-card">
                                <div class="feature-card__icon">
                                    <SparkleIcon/>
                                </div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__description">{feature.description}</p>
                                <ul class="feature-card__bullets">
                                    {feature
                                        .bullets
                                        .iter()
                                        .map(|bullet| {
                                            view! {
                                                <li class="feature-card__bullet">
                                                    <span class="feature-card__dot">"•"</span>
                                                    {*bullet}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SparkleIcon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round">
            <path d="M12 3v3M12 18v3M5.22 5.22l2.12 2.12M16.66 16.66l2.12 2.12M3 12h3M18 12h3M5.22 18.78l2.12-2.12M16.66 7.34l2.12-2.12"/>
            <circle cx="12" cy="12" r="3.2"/>
        </svg>
    }
}
