//! Error type for GitHub payload processing.
//!
//! Absent-payload conditions cannot arise here: every function takes a
//! borrowed model, so only malformed *values* are reported.

use thiserror::Error;

/// Failures raised while interpreting GitHub payload values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryDataError {
    /// A repository URL was required but the input was empty.
    #[error("Valid URL string is required")]
    EmptyUrl,

    /// The input does not contain a `github.com/<owner>/<repo>` path.
    #[error("Invalid GitHub repository URL")]
    InvalidRepositoryUrl {
        /// The rejected input.
        url: String,
    },

    /// A repository URL was requested without both an owner and a name.
    #[error("Owner and repo are required")]
    MissingOwnerOrRepo,

    /// A language filter was requested with an empty language.
    #[error("Valid language string is required")]
    EmptyLanguage,

    /// A sort criteria string did not name a known ordering.
    #[error("Invalid sort criteria: {criteria}")]
    InvalidSortCriteria {
        /// The rejected criteria string.
        criteria: String,
    },
}
