//! Footer with secondary navigation and copyright.

use leptos::prelude::*;

use crate::content::FOOTER_LINKS;
use crate::util::clock::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="shell-panel site-footer__panel">
                <div class="site-footer__top">
                    <div>
                        <p class="site-footer__name">"Avotonix"</p>
                        <p class="site-footer__tagline">"AI automation agency for human-grade voice experiences."</p>
                    </div>
                    <div class="site-footer__links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href class="site-footer__link">{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__bottom">
                    <p>{format!("© {year} Avotonix. All rights reserved.")}</p>
                    <p>"Built with care in New York & Dubai."</p>
                </div>
            </div>
        </footer>
    }
}
