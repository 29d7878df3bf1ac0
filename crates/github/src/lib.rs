//! GitHub payload processing.
//!
//! Typed models for the subset of the GitHub REST API the demo reasons about
//! (repositories, users, issues) and pure functions that turn them into
//! display-ready values.
//!
//! ## Architectural Layer
//!
//! **Pure data.** Nothing here talks to the network or the file system;
//! callers hand in payloads that were deserialised elsewhere.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`models`] | Payload structs (`Repository`, `User`, `Issue`, `Label`) |
//! | [`summaries`] | `RepositorySummary`, `UserProfile`, `IssueSummary` |
//! | [`locator`] | `RepositoryLocator`: URL/`owner/repo` parsing, URL building |
//! | [`naming`] | Username and `owner/repo` validation |
//! | [`ranking`] | Engagement score, language filter, sorting |
//! | [`errors`] | [`RepositoryDataError`] |

pub mod errors;
pub mod locator;
pub mod models;
pub mod naming;
pub mod ranking;
pub mod summaries;

pub use errors::RepositoryDataError;
pub use locator::RepositoryLocator;
pub use models::{Issue, IssueState, Label, Repository, User};
pub use naming::{is_valid_repo_format, is_valid_username, MAX_USERNAME_LEN};
pub use ranking::{engagement_score, filter_by_language, sort_repositories, SortCriteria};
pub use summaries::{IssueSummary, RepositorySummary, UserProfile};
