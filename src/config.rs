//! Site Configuration
//!
//! Profile text and log level. Defaults are compiled in; a page can override
//! any field by defining `window.__PORTFOLIO_CONFIG__` before the bundle loads.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{AppError, Result};

/// Global the loader looks at
pub const CONFIG_GLOBAL: &str = "__PORTFOLIO_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub owner_name: String,
    pub headline: String,
    pub tagline: String,
    /// Footer blurb
    pub bio: String,
    /// Home page "About Me" text
    pub about: String,
    pub resume_href: String,
    /// `EnvFilter` directive, e.g. "info" or "portfolio_core=debug,info"
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Anil Tadvi".to_string(),
            headline: "Cybersecurity Professional | Red Teamer | Ethical Hacker".to_string(),
            tagline: "Passionate about securing digital landscapes, breaking vulnerabilities, \
                      and pushing the boundaries of cybersecurity."
                .to_string(),
            bio: "Cybersecurity Professional & Red Teamer specializing in web security, ethical \
                  hacking, and comprehensive vulnerability assessment. OSCP Aspirant committed \
                  to pushing the boundaries of digital security."
                .to_string(),
            about: "A passionate Cybersecurity Professional with a keen interest in offensive \
                    security, vulnerability research, and ethical hacking. OSCP Aspirant \
                    committed to pushing the boundaries of digital security."
                .to_string(),
            resume_href: "/resume.pdf".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Read the override object, if the host page defined one.
pub fn load() -> Result<SiteConfig> {
    let Some(window) = web_sys::window() else {
        return Ok(SiteConfig::default());
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(AppError::from_js)?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(SiteConfig::default());
    }
    serde_wasm_bindgen::from_value(raw).map_err(|e| AppError::Config {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"ownerName": "Jane Doe", "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.owner_name, "Jane Doe");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.headline, SiteConfig::default().headline);
        assert_eq!(config.resume_href, "/resume.pdf");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<SiteConfig>(r#"{"ownerName": 42}"#).is_err());
    }
}
