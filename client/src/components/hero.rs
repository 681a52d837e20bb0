//! Hero card: headline, conversation snapshot and metrics.
//!
//! The card tilts toward the cursor and the metrics grid drifts slightly,
//! both derived from the shared `MotionState`.

use leptos::prelude::*;

use crate::content::METRICS;
use crate::state::motion::{MotionState, hero_tilt_transform, metrics_transform};

const HERO_TRANSITION: &str = "transform 0.8s cubic-bezier(0.22, 1, 0.36, 1)";
const METRICS_TRANSITION: &str = "transform 0.7s cubic-bezier(0.22, 1, 0.36, 1)";

#[component]
pub fn Hero() -> impl IntoView {
    let motion = expect_context::<RwSignal<MotionState>>();
    let hero_style = move || {
        format!("transform: {}; transition: {HERO_TRANSITION};", hero_tilt_transform(motion.get().cursor))
    };
    let metrics_style = move || {
        format!("transform: {}; transition: {METRICS_TRANSITION};", metrics_transform(motion.get().cursor))
    };

    view! {
        <section class="hero">
            <div class="hero__card" style=hero_style>
                <div class="hero__glow"></div>
                <div class="hero__layout">
                    <div class="hero__copy">
                        <span class="hero__badge animate-hero">
                            <span class="hero__badge-dot"></span>
                            "Fully managed AI voice solutions"
                        </span>
                        <h1 class="hero__title animate-hero animate-hero-delay-1">
                            "Turn every interaction into a loyal client with AI voice solutions that never sleep."
                        </h1>
                        <p class="hero__lead animate-hero animate-hero-delay-2">
                            "Avotonix designs, trains, and runs AI voice solutions tailored to your brand. We engage, qualify, schedule, and reactivate -- so your team can focus on growing the business."
                        </p>
                        <div class="hero__actions animate-hero animate-hero-delay-2">
                            <a href="#contact" class="btn-primary">"Book a voice strategy call"</a>
                            <a href="#features" class="btn-secondary hero__secondary">"See how it works"</a>
                        </div>
                    </div>
                    <div class="hero__aside">
                        <div class="hero__snapshot">
                            <p class="hero__snapshot-title">"Live conversation snapshot"</p>
                            <p class="hero__snapshot-quote">
                                "\"Hi Sara, thanks for calling Midtown Clinics. I can get you on Dr. Chen's calendar this Thursday at 2 PM. Does that work for you?\""
                            </p>
                            <div class="hero__snapshot-meta">
                                <span>"Intent: new patient"</span>
                                <span>"Auto-confirmation sent"</span>
                            </div>
                        </div>
                        <div class="hero__metrics" style=metrics_style>
                            {METRICS
                                .iter()
                                .map(|metric| {
                                    view! {
                                        <div class="hero__metric">
                                            <p class="hero__metric-value">{metric.value}</p>
                                            <p class="hero__metric-label">{metric.label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
