//! Contact call-to-action with mail and phone links.

use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, NEXT_STEPS, mailto_href, tel_href};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="gradient-cta contact">
                <div class="contact__layout">
                    <div class="contact__pitch">
                        <span class="contact__badge">"We do the heavy lifting"</span>
                        <h2 class="section__title">"Ready to greet every lead with confidence?"</h2>
                        <p class="section__lead">
                            "Book a strategy call to see how Avotonix builds, trains, and operates an AI voice agent that sounds like your best team member."
                        </p>
                        <div class="contact__actions">
                            <a href=mailto_href() class="btn-primary">{CONTACT_EMAIL}</a>
                            <a href=tel_href() class="btn-secondary">{format!("Call {CONTACT_PHONE_DISPLAY}")}</a>
                        </div>
                        <p class="contact__note">
                            "Prefer a live walkthrough? We can connect via Zoom, Teams, or drop into your office phone line."
                        </p>
                    </div>
                    <div class="surface-card contact__next">
                        <h3 class="contact__next-title">"What happens next?"</h3>
                        <ol class="contact__steps">
                            {NEXT_STEPS
                                .iter()
                                .map(|step| {
                                    view! {
                                        <li>
                                            <span class="contact__step-heading">{step.heading}</span>
                                            " "
                                            {step.detail}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                        <p class="contact__fineprint">
                            "No obligation. We only proceed when we are confident we can increase booked appointments and response rates."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
