//! Portfolio App
//!
//! Navbar, the page for the current route, and the footer.

use leptos::prelude::*;
use portfolio_core::Route;
use reactive_stores::Store;

use crate::components::{Footer, Navbar};
use crate::config::SiteConfig;
use crate::context::SiteContext;
use crate::navigation;
use crate::pages::{CertificationsPage, ContactPage, HomePage, ProjectsPage, SkillsPage};
use crate::store::{self, SiteState, SiteStateStoreFields};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let store = Store::new(SiteState::new(navigation::current_route()));

    // Provide context to all children
    provide_context(store);
    provide_context(SiteContext::new(config));

    // Back/forward buttons; listener stays for the page lifetime
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
        store::sync_from_location(store);
    });

    view! {
        <div class="site-layout">
            <Navbar />

            <main class="site-main">
                {move || match store.route().get() {
                    Some(Route::Home) => view! { <HomePage /> }.into_any(),
                    Some(Route::Projects) => view! { <ProjectsPage /> }.into_any(),
                    Some(Route::Skills) => view! { <SkillsPage /> }.into_any(),
                    Some(Route::Certifications) => view! { <CertificationsPage /> }.into_any(),
                    Some(Route::Contact) => view! { <ContactPage /> }.into_any(),
                    // Unknown paths render an empty main area
                    None => ().into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
