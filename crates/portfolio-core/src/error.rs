use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog '{catalog}' does not start with the \"All\" wildcard")]
    MissingWildcard { catalog: String },

    #[error("Record '{title}' uses category '{category}' which is not listed by its catalog")]
    UnknownCategory { title: String, category: String },

    #[error("Record '{title}' has proficiency {value}, expected 0..=100")]
    ProficiencyOutOfRange { title: String, value: u8 },

    #[error("Catalog '{catalog}' contains a record with an empty title")]
    BlankTitle { catalog: String },

    #[error("Invalid link for '{field}': {value} ({reason})")]
    InvalidLink {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
