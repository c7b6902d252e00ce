//! Project gallery.

use leptos::prelude::*;

use crate::content::projects;
use crate::state::nav::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Proyectos.id() class="section section--alt">
            <div class="container">
                <h2 class="section__title">"Mis Proyectos"</h2>
                <div class="projects__grid">
                    {projects()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <div class="project-card">
                                    <div class="project-card__image">
                                        <span>"Imagen del Proyecto"</span>
                                    </div>
                                    <div class="project-card__body">
                                        <h3 class="project-card__title">{project.title}</h3>
                                        <p class="project-card__summary">{project.summary}</p>
                                        <div class="project-card__links">
                                            <a href=project.demo_href class="link">"Demo"</a>
                                            <a href=project.code_href class="link">"Código"</a>
                                        </div>
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
