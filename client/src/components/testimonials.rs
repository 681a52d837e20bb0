//! Customer quotes.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="section">
            <div class="section__header">
                <div>
                    <p class="section__eyebrow">"Proven in the wild"</p>
                    <h2 class="section__title">"Teams trust Avotonix to answer first."</h2>
                </div>
                <a href="#contact" class="btn-primary">"Request customer stories"</a>
            </div>
            <div class="testimonials">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <figure class="surface-card testimonial">
                                <p class="testimonial__quote">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                                <figcaption class="testimonial__author">
                                    {format!("{} - {}", testimonial.name, testimonial.role)}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
