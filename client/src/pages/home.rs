//! Single-page portfolio: every section stacked under the fixed nav bar.

use leptos::prelude::*;

use crate::components::{
    about::About, contact_form::ContactForm, footer::Footer, hero::Hero, nav_bar::NavBar, projects::Projects,
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <ContactForm/>
            </main>
            <Footer/>
        </div>
    }
}
