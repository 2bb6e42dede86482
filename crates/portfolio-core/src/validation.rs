use url::Url;

use crate::error::{CatalogError, Result};
use crate::models::SocialLink;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidLink {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidLink {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidLink {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

impl Validate for [SocialLink] {
    fn validate(&self) -> Result<()> {
        for link in self {
            validate_url(link.label, link.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CONTACT_SOCIAL_LINKS, FOOTER_SOCIAL_LINKS, HERO_SOCIAL_LINKS};

    #[test]
    fn test_builtin_social_links_are_valid() {
        FOOTER_SOCIAL_LINKS.validate().unwrap();
        CONTACT_SOCIAL_LINKS.validate().unwrap();
        HERO_SOCIAL_LINKS.validate().unwrap();
    }

    #[test]
    fn test_validate_url_rejects_placeholders() {
        assert!(validate_url("github", "#").is_err());
        assert!(validate_url("github", "").is_err());
        assert!(validate_url("github", "ftp://example.com").is_err());
        assert!(validate_url("github", "https://github.com/InfinityCodder").is_ok());
    }
}
