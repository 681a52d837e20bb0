//! FAQ accordion built on native `<details>` elements.
//!
//! Open/closed state lives in the DOM; no signals are needed.

use leptos::prelude::*;

use crate::content::FAQS;

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <div class="faq">
                <div>
                    <h2 class="section__title">"Frequently asked questions"</h2>
                    <p class="section__lead">
                        "Still curious? We are happy to walk through demos, technical docs, and client references."
                    </p>
                    <a href="#contact" class="btn-secondary">"Chat with our team"</a>
                </div>
                <div class="faq__items">
                    {FAQS
                        .iter()
                        .map(|faq| {
                            view! {
                                <details class="surface-card faq__item">
                                    <summary class="faq__question">
                                        {faq.question}
                                        <span class="faq__marker">"+"</span>
                                    </summary>
                                    <p class="faq__answer">{faq.answer}</p>
                                </details>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
