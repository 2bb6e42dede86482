//! Portfolio Core
//!
//! Framework-free pieces of the portfolio site:
//! - catalog: category filtering over compiled-in records
//! - selection / disclosure: small view-state machines
//! - contact: the contact form's field echo and submission seam
//! - route: page routes
//! - data: the baked-in projects, skills and certifications

pub mod catalog;
pub mod contact;
pub mod data;
pub mod disclosure;
pub mod error;
pub mod models;
pub mod route;
pub mod selection;
pub mod validation;

pub use catalog::{filter, Catalog, Categorized, FilterState, ALL_CATEGORY};
pub use contact::{ConsoleEcho, ContactSubmission, FormField, FormFields, SubmissionSink};
pub use disclosure::Disclosure;
pub use error::{CatalogError, Result};
pub use models::{Certification, ExpertiseArea, Project, SocialLink, Skill};
pub use route::Route;
pub use selection::{ClickTarget, Selection};
pub use validation::Validate;
