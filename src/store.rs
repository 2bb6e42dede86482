//! Site-wide State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only routing and
//! the navigation drawer live here; page state stays inside each page.

use leptos::prelude::*;
use portfolio_core::{Disclosure, Route};
use reactive_stores::Store;

use crate::navigation;

#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Page being shown; `None` when the path matches no route
    pub route: Option<Route>,
    /// Mobile navigation drawer
    pub nav_menu: Disclosure,
}

impl SiteState {
    pub fn new(route: Option<Route>) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

/// Show `route`, close the drawer and record the move in browser history.
pub fn navigate(store: SiteStore, route: Route) {
    store.nav_menu().update(Disclosure::close);
    if store.route().get_untracked() == Some(route) {
        return;
    }
    tracing::debug!(path = route.path(), "navigate");
    store.route().set(Some(route));
    if let Err(e) = navigation::push_history(route) {
        tracing::warn!("history update failed: {}", e);
    }
}

/// Sync the store after the browser's back/forward buttons.
pub fn sync_from_location(store: SiteStore) {
    let route = navigation::current_route();
    tracing::debug!(?route, "popstate");
    store.nav_menu().update(Disclosure::close);
    store.route().set(route);
}
