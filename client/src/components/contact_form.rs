//! Contact section: three-field form with submission feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field edits and status live in the shared `ContactState`. Submitting
//! enters `Submitting` synchronously inside the event handler, then hands the
//! network call and the success revert timer to a spawned task.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactState};
use crate::state::nav::Section;

const SUCCESS_TEXT: &str = "¡Mensaje enviado con éxito! Me pondré en contacto contigo pronto.";

/// Contact form bound to `RwSignal<ContactState>` from context.
#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    let value_of = move |field: ContactField| move || contact.with(|c| c.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let Some(name) = event_target::<leptos::web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        contact.update(|c| {
            c.set_named_field(&name, value);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use crate::net::contact::{BrowserDelay, BrowserTransport, ContactSubmitter};

            let submitter = ContactSubmitter::new(contact, BrowserTransport, BrowserDelay);
            if let Some(pending) = submitter.begin() {
                leptos::task::spawn_local(async move {
                    submitter.complete(pending).await;
                });
            }
        }
    };

    let submitting = move || contact.with(ContactState::is_submitting);
    let button_class = move || {
        if submitting() {
            "btn btn--primary contact-form__submit contact-form__submit--busy"
        } else {
            "btn btn--primary contact-form__submit"
        }
    };
    let error_banner = move || {
        contact
            .with(|c| c.error_message().map(str::to_owned))
            .map(|message| view! { <div class="contact-form__banner contact-form__banner--error">{message}</div> })
    };

    view! {
        <section id=Section::Contacto.id() class="section">
            <div class="container container--narrow">
                <h2 class="section__title">"Contáctame"</h2>
                <form class="contact-form" on:submit=on_submit>
                    <div class="contact-form__field">
                        <label for="name" class="contact-form__label">"Nombre"</label>
                        <input
                            type="text"
                            id="name"
                            name=ContactField::Name.input_name()
                            required
                            class="contact-form__input"
                            prop:value=value_of(ContactField::Name)
                            on:input=on_input
                        />
                    </div>
                    <div class="contact-form__field">
                        <label for="email" class="contact-form__label">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name=ContactField::Email.input_name()
                            required
                            class="contact-form__input"
                            prop:value=value_of(ContactField::Email)
                            on:input=on_input
                        />
                    </div>
                    <div class="contact-form__field">
                        <label for="message" class="contact-form__label">"Mensaje"</label>
                        <textarea
                            id="message"
                            name=ContactField::Message.input_name()
                            required
                            rows="4"
                            class="contact-form__input"
                            prop:value=value_of(ContactField::Message)
                            on:input=on_input
                        ></textarea>
                    </div>

                    <Show when=move || contact.with(ContactState::success_visible)>
                        <div class="contact-form__banner contact-form__banner--success">{SUCCESS_TEXT}</div>
                    </Show>
                    {error_banner}

                    <button type="submit" class=button_class disabled=submitting>
                        <Show when=submitting fallback=|| "Enviar Mensaje">
                            <span class="contact-form__pending">
                                <svg class="spinner" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                    <circle class="spinner__track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path
                                        class="spinner__head"
                                        fill="currentColor"
                                        d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                                    ></path>
                                </svg>
                                "Enviando..."
                            </span>
                        </Show>
                    </button>
                </form>
            </div>
        </section>
    }
}
