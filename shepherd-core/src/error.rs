//! Error types for the Shepherd core library.

use thiserror::Error;

use crate::types::AgeRating;

/// Top-level error type for Shepherd operations.
///
/// Construction and configuration surface these directly. Validation never
/// does: the moderator converts them into a manual-review verdict.
#[derive(Error, Debug)]
pub enum ShepherdError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A contact-detection pattern in the policy tables failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No content was supplied to the nullable entry point.
    #[error("No content supplied for validation")]
    MissingContent,

    /// The policy tables have no entry for the requested age tier.
    #[error("Policy table `{table}` has no entry for age rating `{age_rating}`")]
    MissingAgeTier {
        /// Which table was consulted.
        table: &'static str,
        /// The tier that was looked up.
        age_rating: AgeRating,
    },

    /// Serialization failure while exporting a record.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ShepherdError>;
