//! Background orbs and sparks that drift with the pointer and scroll.

use leptos::prelude::*;

use crate::state::decor::{ORBS, SPARKS};
use crate::state::motion::MotionState;

/// Decorative layer behind the page content.
///
/// Orb wrappers re-derive their transform from the shared `MotionState` on
/// every published update; orb bodies and sparks are static.
#[component]
pub fn FloatingDecor() -> impl IntoView {
    let motion = expect_context::<RwSignal<MotionState>>();

    view! {
        <div class="floating-decor">
            {ORBS
                .iter()
                .map(|orb| {
                    let orb = *orb;
                    view! {
                        <div
                            class="floating-orb-wrapper"
                            aria-hidden="true"
                            style=move || orb.wrapper_style(motion.get())
                        >
                            <div class="floating-orb" style=orb.body_style()></div>
                        </div>
                    }
                })
                .collect_view()}
            {SPARKS
                .iter()
                .map(|spark| view! { <div class="floating-spark" aria-hidden="true" style=spark.style()></div> })
                .collect_view()}
        </div>
    }
}
