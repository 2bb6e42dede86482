//! Navigation Bar Component
//!
//! Desktop links plus the mobile drawer. The drawer state lives in the site
//! store so that any link click can close it.

use leptos::prelude::*;
use portfolio_core::{Disclosure, Route};

use crate::components::NavLink;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_site_store();
    let is_open = move || store.nav_menu().get().is_open();
    let toggle_menu = move |_| store.nav_menu().update(Disclosure::toggle);
    let close_menu = move |_| store.nav_menu().update(Disclosure::close);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <NavLink route=Route::Home class="navbar-logo">
                    <img src="public/logo.png" alt="Logo" class="navbar-logo-img" />
                </NavLink>

                // Desktop
                <div class="navbar-links">
                    {Route::ALL.into_iter().map(|route| view! {
                        <NavLink route=route>{route.label()}</NavLink>
                    }).collect_view()}
                </div>

                // Mobile toggle
                <button
                    class="navbar-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || is_open().to_string()
                    on:click=toggle_menu
                >
                    {move || if is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=is_open>
                <div class="drawer-backdrop" on:click=close_menu></div>
                <div class="drawer">
                    <button class="drawer-close" aria-label="Close navigation" on:click=close_menu>
                        "✕"
                    </button>
                    <div class="drawer-links">
                        {Route::ALL.into_iter().map(|route| view! {
                            <NavLink route=route class="drawer-link">{route.label()}</NavLink>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
