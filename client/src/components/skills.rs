//! Skills grid with a level bar per skill.

use leptos::prelude::*;

use crate::content::SKILLS;
use crate::state::nav::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Habilidades.id() class="section">
            <div class="container">
                <h2 class="section__title">"Mis Habilidades"</h2>
                <div class="skills__grid">
                    {SKILLS
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class="skill-card">
                                    <h3 class="skill-card__name">{skill.name}</h3>
                                    <div class="skill-card__track">
                                        <div class="skill-card__fill" style=skill.bar_style()></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
