//! `owner/repo` coordinates: extraction from URLs and `owner/repo` strings,
//! and construction of the web and REST API URLs they address.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::naming::is_valid_segment;
use crate::RepositoryDataError;

const WEB_BASE: &str = "https://github.com";
const API_BASE: &str = "https://api.github.com";

static REPOSITORY_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("Valid regex pattern")
});

// Only names that follow GitHub's naming rules.
static STRICT_REPOSITORY_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"github\.com/([a-zA-Z0-9](?:[a-zA-Z0-9_-]*[a-zA-Z0-9])?)/([a-zA-Z0-9](?:[a-zA-Z0-9_-]*[a-zA-Z0-9])?)",
    )
    .expect("Valid regex pattern")
});

/// The owner and repository name a GitHub URL points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryLocator {
    pub owner: String,
    pub repo: String,
}

impl RepositoryLocator {
    /// Creates a locator from its two parts.
    ///
    /// # Errors
    ///
    /// [`RepositoryDataError::MissingOwnerOrRepo`] if either part is empty.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, RepositoryDataError> {
        let (owner, repo) = (owner.into(), repo.into());
        if owner.is_empty() || repo.is_empty() {
            return Err(RepositoryDataError::MissingOwnerOrRepo);
        }
        Ok(Self { owner, repo })
    }

    /// Splits an `owner/repo` string, or `None` if it is not one.
    ///
    /// See [`is_valid_repo_format`](crate::is_valid_repo_format) for the rules.
    pub fn from_repo_string(value: &str) -> Option<Self> {
        let (owner, repo) = value.split_once('/')?;
        if repo.contains('/') || !is_valid_segment(owner) || !is_valid_segment(repo) {
            return None;
        }
        Some(Self {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        })
    }

    /// Finds the first `github.com/<owner>/<repo>` whose names follow
    /// GitHub's naming rules. Unlike [`parse`](Self::parse) this never fails
    /// loudly; anything unrecognised is `None`. Names end at the first
    /// character that is not allowed, so `repo.git` yields `repo`.
    pub fn extract_from_url(url: &str) -> Option<Self> {
        let captures = STRICT_REPOSITORY_PATH.captures(url)?;
        Some(Self {
            owner: captures[1].to_owned(),
            repo: captures[2].to_owned(),
        })
    }

    /// `https://github.com/{owner}/{repo}`
    pub fn repo_url(&self) -> String {
        format!("{WEB_BASE}/{}/{}", self.owner, self.repo)
    }

    /// `https://api.github.com/repos/{owner}/{repo}`
    pub fn api_url(&self) -> String {
        format!("{API_BASE}/repos/{}/{}", self.owner, self.repo)
    }

    /// Parses a repository URL such as `https://github.com/owner/repo.git`.
    ///
    /// The scheme is not checked; the first `github.com/<owner>/<repo>`
    /// segment found anywhere in `url` wins. A trailing `.git` is removed
    /// from the repository name.
    ///
    /// # Errors
    ///
    /// [`RepositoryDataError::EmptyUrl`] for an empty input,
    /// [`RepositoryDataError::InvalidRepositoryUrl`] when no repository path
    /// is present.
    pub fn parse(url: &str) -> Result<Self, RepositoryDataError> {
        if url.is_empty() {
            return Err(RepositoryDataError::EmptyUrl);
        }

        let Some(captures) = REPOSITORY_PATH.captures(url) else {
            tracing::debug!(url, "No GitHub repository path in URL");
            return Err(RepositoryDataError::InvalidRepositoryUrl {
                url: url.to_owned(),
            });
        };

        let repo = &captures[2];
        Ok(Self {
            owner: captures[1].to_owned(),
            repo: repo.strip_suffix(".git").unwrap_or(repo).to_owned(),
        })
    }
}

impl FromStr for RepositoryLocator {
    type Err = RepositoryDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(owner: &str, repo: &str) -> RepositoryLocator {
        RepositoryLocator {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        }
    }

    #[test]
    fn parses_https_and_http_urls() {
        assert_eq!(
            RepositoryLocator::parse("https://github.com/owner/repo-name").unwrap(),
            locator("owner", "repo-name")
        );
        assert_eq!(
            RepositoryLocator::parse("http://github.com/owner/repo-name").unwrap(),
            locator("owner", "repo-name")
        );
    }

    #[test]
    fn strips_git_suffix() {
        let parsed: RepositoryLocator = "https://github.com/owner/repo-name.git".parse().unwrap();
        assert_eq!(parsed, locator("owner", "repo-name"));
        assert_eq!(parsed.to_string(), "owner/repo-name");
    }

    #[test]
    fn ignores_trailing_path_segments() {
        let parsed = RepositoryLocator::parse("https://github.com/rust-lang/rust/tree/master").unwrap();
        assert_eq!(parsed, locator("rust-lang", "rust"));
    }

    #[test]
    fn rejects_other_hosts_and_free_text() {
        for input in ["https://gitlab.com/owner/repo", "not a url"] {
            let err = RepositoryLocator::parse(input).unwrap_err();
            assert_eq!(
                err,
                RepositoryDataError::InvalidRepositoryUrl {
                    url: input.to_owned()
                }
            );
            assert_eq!(err.to_string(), "Invalid GitHub repository URL");
        }
    }

    #[test]
    fn builds_web_and_api_urls() {
        let demo = RepositoryLocator::new("A-Georgiou", "github-skills-demo").unwrap();
        assert_eq!(demo.repo_url(), "https://github.com/A-Georgiou/github-skills-demo");
        assert_eq!(
            demo.api_url(),
            "https://api.github.com/repos/A-Georgiou/github-skills-demo"
        );
        assert_eq!(locator("owner", "repo").repo_url(), "https://github.com/owner/repo");
    }

    #[test]
    fn new_requires_owner_and_repo() {
        for (owner, repo) in [("", "repo"), ("owner", ""), ("", "")] {
            let err = RepositoryLocator::new(owner, repo).unwrap_err();
            assert_eq!(err, RepositoryDataError::MissingOwnerOrRepo);
            assert_eq!(err.to_string(), "Owner and repo are required");
        }
    }

    #[test]
    fn from_repo_string_splits_valid_strings() {
        assert_eq!(
            RepositoryLocator::from_repo_string("owner/repo"),
            Some(locator("owner", "repo"))
        );
        assert_eq!(
            RepositoryLocator::from_repo_string("A-Georgiou/github-skills-demo"),
            Some(locator("A-Georgiou", "github-skills-demo"))
        );
        for value in ["invalid", "owner/repo/extra", "", "owner/-repo"] {
            assert_eq!(RepositoryLocator::from_repo_string(value), None, "{value}");
        }
    }

    #[test]
    fn extract_from_url_finds_repository_paths() {
        for (url, owner, repo) in [
            ("https://github.com/owner/repo", "owner", "repo"),
            ("https://github.com/A-Georgiou/github-skills-demo", "A-Georgiou", "github-skills-demo"),
            ("https://github.com/owner/repo/issues/123", "owner", "repo"),
            ("https://github.com/owner/repo/blob/main/README.md", "owner", "repo"),
            ("https://github.com/owner/repo.git", "owner", "repo"),
        ] {
            assert_eq!(
                RepositoryLocator::extract_from_url(url),
                Some(locator(owner, repo)),
                "{url}"
            );
        }
    }

    #[test]
    fn extract_from_url_returns_none_for_unrecognised_input() {
        for url in ["https://example.com", "not a url", "", "https://github.com/-bad/repo"] {
            assert_eq!(RepositoryLocator::extract_from_url(url), None, "{url}");
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = RepositoryLocator::parse("").unwrap_err();
        assert_eq!(err, RepositoryDataError::EmptyUrl);
        assert_eq!(err.to_string(), "Valid URL string is required");
    }
}
