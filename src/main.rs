//! Portfolio Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod navigation;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;
use portfolio_core::data::{
    CERTIFICATIONS, CONTACT_SOCIAL_LINKS, FOOTER_SOCIAL_LINKS, HERO_SOCIAL_LINKS, PROJECTS, SKILLS,
};
use portfolio_core::Validate;

use config::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init_logger(&config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger setup failed: {}", e).into());
    }
    if let Some(e) = config_error {
        tracing::error!("❌ Configuration load failed, using defaults: {}", e);
    }
    if let Err(e) = check_site_data() {
        tracing::error!("❌ Site data failed validation: {}", e);
    }

    tracing::info!(owner = %config.owner_name, "mounting portfolio");
    mount_to_body(move || view! { <App config=config /> });
}

/// Catalog invariants and link formats. Problems are reported, not fatal.
fn check_site_data() -> error::Result<()> {
    PROJECTS.validate()?;
    SKILLS.validate()?;
    CERTIFICATIONS.validate()?;
    FOOTER_SOCIAL_LINKS.validate()?;
    CONTACT_SOCIAL_LINKS.validate()?;
    HERO_SOCIAL_LINKS.validate()?;
    Ok(())
}
