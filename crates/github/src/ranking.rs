//! Scoring, filtering, and ordering of repository lists.

use std::cmp::Reverse;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Repository, RepositoryDataError};

/// Engagement score of a repository: `stars + 2 * forks + watchers`.
///
/// Absent counts contribute zero. Saturates instead of overflowing.
pub fn engagement_score(repo: &Repository) -> u64 {
    repo.stars()
        .saturating_add(repo.forks().saturating_mul(2))
        .saturating_add(repo.watchers())
}

/// Repositories whose language equals `language`, ignoring case.
///
/// Repositories with no language never match. Input order is preserved.
///
/// # Errors
///
/// [`RepositoryDataError::EmptyLanguage`] if `language` is empty.
pub fn filter_by_language<'a>(
    repos: &'a [Repository],
    language: &str,
) -> Result<Vec<&'a Repository>, RepositoryDataError> {
    if language.is_empty() {
        return Err(RepositoryDataError::EmptyLanguage);
    }

    let wanted = language.to_lowercase();
    Ok(repos
        .iter()
        .filter(|repo| {
            repo.language
                .as_deref()
                .is_some_and(|l| l.to_lowercase() == wanted)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Ordering applied by [`sort_repositories`]. Every ordering is descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    /// Most stars first.
    #[default]
    Stars,
    /// Most forks first.
    Forks,
    /// Most recently updated first.
    Updated,
}

impl FromStr for SortCriteria {
    type Err = RepositoryDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            "updated" => Ok(Self::Updated),
            other => Err(RepositoryDataError::InvalidSortCriteria {
                criteria: other.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Updated => "updated",
        })
    }
}

/// Returns a sorted copy of `repos`; the input is left untouched.
///
/// The sort is stable. Missing counts sort as zero and a missing
/// `updated_at` sorts as the Unix epoch.
pub fn sort_repositories(repos: &[Repository], criteria: SortCriteria) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    match criteria {
        SortCriteria::Stars => sorted.sort_by_key(|r| Reverse(r.stars())),
        SortCriteria::Forks => sorted.sort_by_key(|r| Reverse(r.forks())),
        SortCriteria::Updated => {
            sorted.sort_by_key(|r| Reverse(r.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)))
        }
    }
    tracing::trace!(count = sorted.len(), %criteria, "Sorted repositories");
    sorted
}
