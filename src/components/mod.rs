//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod certification_modal;
mod footer;
mod hero_section;
mod nav_link;
mod navbar;
mod page_header;
mod social_links;

pub use category_filter::{CategoryFilter, NoItemsFound};
pub use certification_modal::{badge_class, CertificationModal};
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use nav_link::NavLink;
pub use navbar::Navbar;
pub use page_header::PageHeader;
pub use social_links::SocialLinks;
