//! The landing page: decorative layer, header, sections and footer.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `MotionState` signal. On hydration it attaches a
//! `PointerTracker` that publishes coalesced pointer/scroll samples into that
//! signal; cleanup drops the tracker, which removes its listeners and
//! cancels pending frames.

use leptos::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::features::FeaturesSection;
use crate::components::floating_decor::FloatingDecor;
use crate::components::hero::Hero;
use crate::components::process::ProcessSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::solutions::SolutionsSection;
use crate::components::testimonials::TestimonialsSection;
use crate::state::motion::MotionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let motion = RwSignal::new(MotionState::default());
    provide_context(motion);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::pointer_tracker::PointerTracker;

        let tracker = StoredValue::new_local(None::<PointerTracker>);
        Effect::new(move || {
            let attached = PointerTracker::attach(
                move |cursor| motion.update(|m| m.cursor = cursor),
                move |scroll| motion.update(|m| m.scroll = scroll),
            );
            tracker.set_value(attached);
        });
        on_cleanup(move || tracker.set_value(None));
    }

    view! {
        <div class="page-shell">
            <FloatingDecor/>
            <SiteHeader/>
            <main class="page-shell__main">
                <Hero/>
                <FeaturesSection/>
                <SolutionsSection/>
                <ProcessSection/>
                <TestimonialsSection/>
                <FaqSection/>
                <ContactSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
