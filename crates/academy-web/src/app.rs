//! Main App Component

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{components::*, path};

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // SEO
        <Title text="Future MD Academy — MCAT Tutoring" />
        <Meta
            name="description"
            content="Top 5% tutors. Top 1% section specialists. Personalized MCAT tutoring with a +10 point improvement guarantee."
        />
        <Meta property="og:title" content="Future MD Academy — MCAT Tutoring" />
        <Meta property="og:description" content="Crush the MCAT with personalized coaching designed around you." />
        <Meta property="og:type" content="website" />

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
