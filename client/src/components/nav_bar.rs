//! Fixed top navigation with desktop links and a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `NavState`. In the browser it also listens to
//! window scroll and resize events so the highlighted link follows the section
//! in view and the mobile menu closes on wide viewports.

use leptos::prelude::*;

use crate::content::SITE_TITLE;
use crate::state::nav::{NavState, Section};

const MENU_OPEN_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const MENU_CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Page navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport;

        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let layouts = viewport::section_layouts();
            let y = viewport::scroll_y();
            nav.maybe_update(|n| n.on_scroll(y, &layouts));
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = viewport::inner_width() {
                nav.maybe_update(|n| {
                    let was_open = n.menu_open;
                    n.on_resize(width);
                    was_open != n.menu_open
                });
            }
        });
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    let menu_icon = move || if nav.with(|n| n.menu_open) { MENU_CLOSE_ICON } else { MENU_OPEN_ICON };
    let mobile_class = move || {
        if nav.with(|n| n.menu_open) {
            "site-nav__mobile site-nav__mobile--open"
        } else {
            "site-nav__mobile"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav__inner">
                <h1 class="site-nav__brand">{SITE_TITLE}</h1>
                <button
                    class="site-nav__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=menu_icon/>
                    </svg>
                </button>
                <div class="site-nav__links">
                    {Section::ALL.into_iter().map(|section| view! { <NavLink section=section mobile=false/> }).collect_view()}
                </div>
            </div>
            <div class=mobile_class>
                <div class="site-nav__mobile-links">
                    {Section::ALL.into_iter().map(|section| view! { <NavLink section=section mobile=true/> }).collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Anchor link to a page section.
#[component]
fn NavLink(section: Section, mobile: bool) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let href = section.href();

    view! {
        <a
            href=href
            class=move || nav.with(|n| n.link_class(section, mobile))
            on:click=move |_| nav.update(|n| n.select(section))
        >
            {section.label()}
        </a>
    }
}
