//! "Sobre Mí" section.

use leptos::prelude::*;

use crate::content::ABOUT_PARAGRAPHS;
use crate::state::nav::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::SobreMi.id() class="section section--alt">
            <div class="container">
                <h2 class="section__title">"Sobre Mí"</h2>
                <div class="about__body">
                    {ABOUT_PARAGRAPHS
                        .into_iter()
                        .map(|text| view! { <p class="about__paragraph">{text}</p> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
