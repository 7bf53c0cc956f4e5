use thiserror::Error;

use super::{catalog::Category, models::SearchTerms};

/// Errors that can occur while browsing, searching or maintaining listings.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Invalid search parameters. Please provide a name or location.")]
    InvalidSearch,
    #[error("No internships found {0}")]
    NoSearchMatches(SearchTerms),
    #[error("No internships found for {0} category.")]
    NoCategoryMatches(Category),
    #[error("Internship not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("An internship with heading_url '{0}' already exists")]
    DuplicateHeading(String),
    #[error("{0}")]
    Store(String),
}

impl ListingError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),
    #[error("Username or email already exists")]
    EmailTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("User not found")]
    NotFound,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("{0}")]
    Store(String),
}

impl UserError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
