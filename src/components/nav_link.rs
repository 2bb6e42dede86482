use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::Route;

use crate::store::{navigate, use_site_store, SiteStateStoreFields};

/// In-app link. Plain `href` for middle-click / copy, history push on click.
#[component]
pub fn NavLink(
    route: Route,
    #[prop(into, default = String::from("nav-link"))] class: String,
    children: Children,
) -> impl IntoView {
    let store = use_site_store();
    let is_current = move || store.route().get() == Some(route);

    view! {
        <a
            href=route.path()
            class=move || if is_current() { format!("{} active", class) } else { class.clone() }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                navigate(store, route);
            }
        >
            {children()}
        </a>
    }
}
