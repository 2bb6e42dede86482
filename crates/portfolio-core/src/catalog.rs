//! Catalog Filter
//!
//! Category filtering over a fixed list of records. The record list is never
//! mutated; only the active category changes which subset is shown.

use crate::error::{CatalogError, Result};
use crate::validation::{validate_url, Validate};

/// Wildcard category that matches every record
pub const ALL_CATEGORY: &str = "All";

/// A record that belongs to exactly one category of its catalog
pub trait Categorized {
    fn title(&self) -> &str;

    fn category(&self) -> &str;

    /// Percentage shown as a bar, if the record has one
    fn proficiency(&self) -> Option<u8> {
        None
    }

    /// External links as (field name, url) pairs
    fn links(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}

/// Ordered sub-sequence of `items` whose category equals `active_category`.
/// "All" returns every item.
pub fn filter<T: Categorized + Clone>(items: &[T], active_category: &str) -> Vec<T> {
    if active_category == ALL_CATEGORY {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category() == active_category)
        .cloned()
        .collect()
}

/// Active category of one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active_category == category
    }

    /// Unknown categories are accepted and simply match nothing.
    pub fn select_category(&mut self, candidate: impl Into<String>) {
        self.active_category = candidate.into();
        tracing::debug!(category = %self.active_category, "category selected");
    }

    pub fn apply<T: Categorized + Clone>(&self, items: &[T]) -> Vec<T> {
        filter(items, &self.active_category)
    }
}

/// A page's records together with its category buttons
#[derive(Debug, Clone, Copy)]
pub struct Catalog<T: 'static> {
    pub name: &'static str,
    /// Button order; always starts with "All"
    pub categories: &'static [&'static str],
    pub items: &'static [T],
}

impl<T: Categorized + Clone + 'static> Catalog<T> {
    pub fn visible(&self, state: &FilterState) -> Vec<T> {
        state.apply(self.items)
    }
}

impl<T: Categorized + 'static> Validate for Catalog<T> {
    fn validate(&self) -> Result<()> {
        if self.categories.first() != Some(&ALL_CATEGORY) {
            return Err(CatalogError::MissingWildcard {
                catalog: self.name.to_string(),
            });
        }
        let known = &self.categories[1..];

        for item in self.items {
            if item.title().trim().is_empty() {
                return Err(CatalogError::BlankTitle {
                    catalog: self.name.to_string(),
                });
            }
            if !known.contains(&item.category()) {
                return Err(CatalogError::UnknownCategory {
                    title: item.title().to_string(),
                    category: item.category().to_string(),
                });
            }
            if let Some(value) = item.proficiency() {
                if value > 100 {
                    return Err(CatalogError::ProficiencyOutOfRange {
                        title: item.title().to_string(),
                        value,
                    });
                }
            }
            for (field, url) in item.links() {
                validate_url(&format!("{}.{}", item.title(), field), url)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CERTIFICATIONS, PROJECTS, SKILLS};
    use crate::models::Skill;

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let all = filter(SKILLS.items, ALL_CATEGORY);
        assert_eq!(all.as_slice(), SKILLS.items);
    }

    #[test]
    fn test_every_category_only_returns_its_records() {
        for category in &SKILLS.categories[1..] {
            let subset = filter(SKILLS.items, category);
            assert!(!subset.is_empty());
            assert!(subset.iter().all(|s| s.category == *category));
        }
        for category in &PROJECTS.categories[1..] {
            assert!(filter(PROJECTS.items, category).iter().all(|p| p.category == *category));
        }
    }

    #[test]
    fn test_security_tools_scenario() {
        let tools = filter(SKILLS.items, "Security Tools");
        assert_eq!(names(&tools), vec!["Metasploit", "Burp Suite", "Nmap"]);
    }

    #[test]
    fn test_offensive_security_scenario() {
        let projects = filter(PROJECTS.items, "Offensive Security");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Web3 & Smart Contract Hacking Framework");
    }

    #[test]
    fn test_filter_is_idempotent() {
        for category in SKILLS.categories {
            let once = filter(SKILLS.items, category);
            let twice = filter(&once, category);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut state = FilterState::new();
        state.select_category("Quantum");
        assert!(state.apply(PROJECTS.items).is_empty());
        assert_eq!(state.active_category(), "Quantum");
    }

    #[test]
    fn test_filter_state_defaults_to_all() {
        let mut state = FilterState::default();
        assert!(state.is_active(ALL_CATEGORY));
        assert_eq!(CERTIFICATIONS.visible(&state).len(), CERTIFICATIONS.items.len());

        state.select_category("Pursuing");
        let pursuing = CERTIFICATIONS.visible(&state);
        assert_eq!(pursuing.len(), 1);
        assert_eq!(pursuing[0].title, "Offensive Security Certified Professional (OSCP)");

        // Source list is untouched by selection
        assert_eq!(CERTIFICATIONS.items.len(), 4);
    }

    #[test]
    fn test_builtin_catalogs_validate() {
        PROJECTS.validate().unwrap();
        SKILLS.validate().unwrap();
        CERTIFICATIONS.validate().unwrap();
    }

    static BAD_SKILLS: &[Skill] = &[Skill {
        name: "Overclocked",
        level: "Expert",
        category: "Programming",
        proficiency: 120,
    }];

    #[test]
    fn test_validate_rejects_bad_catalogs() {
        let missing_wildcard = Catalog {
            name: "skills",
            categories: &["Programming"],
            items: BAD_SKILLS,
        };
        assert!(matches!(
            missing_wildcard.validate(),
            Err(CatalogError::MissingWildcard { .. })
        ));

        let out_of_range = Catalog {
            name: "skills",
            categories: &[ALL_CATEGORY, "Programming"],
            items: BAD_SKILLS,
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(CatalogError::ProficiencyOutOfRange { value: 120, .. })
        ));

        let unknown = Catalog {
            name: "skills",
            categories: &[ALL_CATEGORY, "Frameworks"],
            items: BAD_SKILLS,
        };
        assert!(matches!(
            unknown.validate(),
            Err(CatalogError::UnknownCategory { .. })
        ));
    }
}
