//! Browser History
//!
//! Keeps `window.location` in step with the current [`Route`].

use portfolio_core::Route;
use wasm_bindgen::JsValue;

use crate::error::{AppError, Result};

/// Route for the current `location.pathname`; `None` for unknown paths
pub fn current_route() -> Option<Route> {
    let path = web_sys::window()?.location().pathname().ok()?;
    Route::from_path(&path)
}

/// Push `route` onto the history stack and scroll back to the top.
pub fn push_history(route: Route) -> Result<()> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let history = window.history().map_err(AppError::from_js)?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
        .map_err(AppError::from_js)?;
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}
