//! Landing section with greeting, calls to action, and portrait.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, PROFILE_IMAGE, PROFILE_IMAGE_SIZE_PX, ROLE, TAGLINE};
use crate::state::nav::{NavState, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let image_size = PROFILE_IMAGE_SIZE_PX.to_string();
    let contact_href = Section::Contacto.href();
    let projects_href = Section::Proyectos.href();

    view! {
        <section id=Section::Inicio.id() class="section hero">
            <div class="container hero__inner">
                <div class="hero__text">
                    <h1 class="hero__title">
                        "¡Hola! Soy "
                        <span class="hero__name">{OWNER_NAME}</span>
                    </h1>
                    <p class="hero__role">{ROLE}</p>
                    <p class="hero__tagline">{TAGLINE}</p>
                    <div class="hero__actions">
                        <a
                            href=contact_href
                            class="btn btn--primary"
                            on:click=move |_| nav.update(|n| n.select(Section::Contacto))
                        >
                            "Contáctame"
                        </a>
                        <a
                            href=projects_href
                            class="btn btn--outline"
                            on:click=move |_| nav.update(|n| n.select(Section::Proyectos))
                        >
                            "Ver Proyectos"
                        </a>
                    </div>
                </div>
                <div class="hero__portrait">
                    <div class="hero__portrait-frame">
                        <div class="hero__portrait-tint"></div>
                        <img
                            src=PROFILE_IMAGE
                            alt="Foto de perfil"
                            width=image_size.clone()
                            height=image_size
                            class="hero__portrait-img"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
