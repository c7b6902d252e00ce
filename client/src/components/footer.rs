//! Page footer with copyright and social links.

use leptos::prelude::*;

use crate::content::{SOCIAL_LINKS, copyright_line};
use crate::util::clock::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <p class="site-footer__copyright">{copyright}</p>
                <div class="site-footer__links">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="site-footer__link"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="currentColor" viewBox="0 0 24 24">
                                        <path d=link.icon.path()/>
                                    </svg>
                                    <span>{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
