//! Site Context
//!
//! Read-only profile configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn owner_name(&self) -> String {
        self.config.with_value(|c| c.owner_name.clone())
    }

    pub fn headline(&self) -> String {
        self.config.with_value(|c| c.headline.clone())
    }

    pub fn tagline(&self) -> String {
        self.config.with_value(|c| c.tagline.clone())
    }

    pub fn bio(&self) -> String {
        self.config.with_value(|c| c.bio.clone())
    }

    pub fn about(&self) -> String {
        self.config.with_value(|c| c.about.clone())
    }

    pub fn resume_href(&self) -> String {
        self.config.with_value(|c| c.resume_href.clone())
    }
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
