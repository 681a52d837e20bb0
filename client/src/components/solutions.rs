//! Industry playbooks and what the voice agent handles.

use leptos::prelude::*;

use crate::content::{AGENT_CAPABILITIES, INDUSTRIES};

#[component]
pub fn SolutionsSection() -> impl IntoView {
    view! {
        <section id="solutions" class="section">
            <div class="surface-card solutions">
                <div class="solutions__layout">
                    <div>
                        <h2 class="section__title">"Tailored by industry, built for conversion."</h2>
                        <p class="section__lead">
                            "Avotonix brings the human touch to AI voice--blending smart scripts, perfect tone, and seamless workflows to turn every call into a conversion."
                        </p>
                        <div class="solutions__industries">
                            {INDUSTRIES
                                .iter()
                                .map(|industry| {
                                    view! {
                                        <div class="solutions__industry">
                                            {*industry}
                                            <span class="solutions__ready">"Playbook ready"</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="gradient-accent solutions__agent">
                        <h3 class="solutions__agent-title">"Your AI voice agent handles:"</h3>
                        <ul class="solutions__capabilities">
                            {AGENT_CAPABILITIES.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                        <a href="#process" class="btn-secondary">"Explore the delivery process"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
