//! Routed Pages
//!
//! One component per route. Each listing page owns its own filter state.

mod certifications;
mod contact;
mod home;
mod projects;
mod skills;

pub use certifications::CertificationsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
