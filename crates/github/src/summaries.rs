//! Display-ready summaries of repositories, users, and issue lists.
//!
//! Summaries replace every absent or empty field with a fixed placeholder so
//! renderers never deal with `Option`s. They serialise in camelCase.

use serde::{Deserialize, Serialize};

use crate::models::{non_empty, Issue, IssueState, Repository, User};

const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description";
const NO_LANGUAGE: &str = "Not specified";
const NO_BIO: &str = "No bio";

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// A repository reduced to the fields shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub language: String,
    pub url: String,
}

impl From<&Repository> for RepositorySummary {
    fn from(repo: &Repository) -> Self {
        Self {
            name: non_empty(&repo.name).unwrap_or(UNKNOWN).to_owned(),
            full_name: non_empty(&repo.full_name).unwrap_or(UNKNOWN).to_owned(),
            description: non_empty(&repo.description)
                .unwrap_or(NO_DESCRIPTION)
                .to_owned(),
            stars: repo.stars(),
            forks: repo.forks(),
            language: non_empty(&repo.language).unwrap_or(NO_LANGUAGE).to_owned(),
            url: non_empty(&repo.html_url).unwrap_or_default().to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user profile reduced to the fields shown on a profile card.
///
/// `name` falls back to the login when the user has not set a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub profile_url: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        let login = non_empty(&user.login);
        Self {
            username: login.unwrap_or(UNKNOWN).to_owned(),
            name: non_empty(&user.name)
                .or(login)
                .unwrap_or(UNKNOWN)
                .to_owned(),
            bio: non_empty(&user.bio).unwrap_or(NO_BIO).to_owned(),
            public_repos: user.public_repos.unwrap_or(0),
            followers: user.followers.unwrap_or(0),
            following: user.following.unwrap_or(0),
            profile_url: non_empty(&user.html_url).unwrap_or_default().to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// Aggregate counts over a list of issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Distinct label names, in the order they were first seen.
    pub labels: Vec<String>,
}

impl IssueSummary {
    /// Summarises `issues`. Issues in any state other than open or closed
    /// count towards `total` only.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self {
            total: issues.len(),
            ..Self::default()
        };

        for issue in issues {
            match issue.state {
                IssueState::Open => summary.open += 1,
                IssueState::Closed => summary.closed += 1,
                IssueState::Other => {}
            }
            for name in issue.labels().iter().filter_map(|l| l.name.as_deref()) {
                if !summary.labels.iter().any(|seen| seen == name) {
                    summary.labels.push(name.to_owned());
                }
            }
        }

        summary
    }
}
