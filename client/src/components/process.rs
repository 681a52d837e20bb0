//! Three-step delivery process.

use leptos::prelude::*;

use crate::content::{PROCESS_STEPS, step_badge};

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section id="process" class="section">
            <div class="section-panel process">
                <h2 class="section__title">"From intake to live in days, not months."</h2>
                <p class="section__lead">
                    "We bring a dedicated conversational strategist and automation engineer. You bring the goals. Together, we launch a concierge that feels uniquely yours."
                </p>
                <div class="process__steps">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="surface-card process__step">
                                    <span class="process__badge">{step_badge(index)}</span>
                                    <h3 class="process__title">{step.title}</h3>
                                    <p class="process__description">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
