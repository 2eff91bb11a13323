//! The errors which can abort a run.

use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;

use crate::model::Category;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while collecting and announcing the collection dates.
pub enum Error {
    /// Network layer failed or a server answered with a non-success status.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The date portion of a fragment is not in `day Month year` form.
    #[error("Date format error in {fragment:?}: {source}")]
    DateFormat {
        fragment: String,
        #[source]
        source: ChronoParseError,
    },
    /// A date fragment has no comma between weekday and date.
    #[error("Missing comma in date fragment {0:?}")]
    MissingSeparator(String),
    /// A collection item has no colon between label and date.
    #[error("Missing label in collection item {0:?}")]
    MissingLabel(String),
    /// The collection page no longer lists a category where it is expected.
    #[error("Collection category not found on the page: {0}")]
    MissingCategory(Category),
    /// A CSS selector or regular expression could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    /// The parameter store request failed.
    #[error("Secret store error: {0}")]
    SecretStore(String),
    /// The parameter store has no value under the requested name.
    #[error("Secret not found: {0}")]
    MissingSecret(String),
    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// The logger could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// The broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The same run may succeed later.
    Transient,
    /// The council page changed shape; retrying will not help.
    Structural,
    /// The deployment is misconfigured.
    Configuration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) | Error::SecretStore(_) => ErrorKind::Transient,
            Error::DateFormat { .. }
            | Error::MissingSeparator(_)
            | Error::MissingLabel(_)
            | Error::MissingCategory(_)
            | Error::Pattern(_) => ErrorKind::Structural,
            Error::MissingSecret(_) | Error::Config(_) | Error::Logging(_) => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn is_retriable(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ErrorKind, model::Category, Error};

    #[test]
    fn test_kind() {
        assert_eq!(
            Error::MissingCategory(Category::Green).kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            Error::Config("email".to_string()).kind(),
            ErrorKind::Configuration
        );
        assert!(Error::SecretStore("timeout".to_string()).is_retriable());
        assert!(!Error::MissingSeparator("Monday 5 August 2024".to_string()).is_retriable());
    }
}
