//! Portfolio Models
//!
//! Compiled-in records rendered by the listing pages.

use serde::Serialize;

use crate::catalog::Categorized;

/// Project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub github_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
}

/// Skill card with a proficiency bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
    pub category: &'static str,
    /// Percentage, 0..=100
    pub proficiency: u8,
}

/// Certification card, filtered by its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub details: &'static [&'static str],
    pub verification_link: &'static str,
}

/// Home page / footer expertise blurb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpertiseArea {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

impl Categorized for Project {
    fn title(&self) -> &str {
        self.title
    }

    fn category(&self) -> &str {
        self.category
    }
}

impl Categorized for Skill {
    fn title(&self) -> &str {
        self.name
    }

    fn category(&self) -> &str {
        self.category
    }

    fn proficiency(&self) -> Option<u8> {
        Some(self.proficiency)
    }
}

impl Categorized for Certification {
    fn title(&self) -> &str {
        self.title
    }

    fn category(&self) -> &str {
        self.status
    }

    fn links(&self) -> Vec<(&'static str, &str)> {
        vec![("verification_link", self.verification_link)]
    }
}
