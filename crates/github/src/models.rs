//! GitHub REST payload models.
//!
//! Only the fields the helpers in this crate read are modelled; every other
//! field in a payload is ignored on deserialisation. Fields GitHub may omit or
//! send as `null` are `Option`s.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// A repository as returned by `GET /repos/{owner}/{repo}` or a search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub language: Option<String>,
    pub html_url: Option<String>,
    /// RFC 3339 or a bare `YYYY-MM-DD` date (taken as midnight UTC). Any
    /// other value reads as absent.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Star count, treating an absent value as zero.
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    /// Fork count, treating an absent value as zero.
    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    /// Watcher count, treating an absent value as zero.
    pub fn watchers(&self) -> u64 {
        self.watchers_count.unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A user profile as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub html_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// Issue state. GitHub only sends `open` and `closed`; anything else is kept
/// as [`IssueState::Other`] so unfamiliar payloads still deserialise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Other,
}

/// An issue label. Only the name is used; a label without one is ignored
/// by summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: Option<String>,
}

/// An issue as returned by `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub state: IssueState,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
}

impl Issue {
    /// The labels on this issue; empty when the payload carried none.
    pub fn labels(&self) -> &[Label] {
        self.labels.as_deref().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(text)) => parse_timestamp(&text),
        Some(RawTimestamp::Other(_)) | None => None,
    })
}

/// Parses RFC 3339, falling back to a `YYYY-MM-DD` date at midnight UTC.
pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Returns `value` unless it is absent or empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_ignores_unmodelled_fields_and_defaults_missing_ones() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 1296269,
            "name": "Hello-World",
            "stargazers_count": 80,
            "language": null,
            "updated_at": "2011-01-26T19:14:43Z"
        }))
        .unwrap();

        assert_eq!(repo.name.as_deref(), Some("Hello-World"));
        assert_eq!(repo.stars(), 80);
        assert_eq!(repo.forks(), 0);
        assert_eq!(repo.language, None);
        assert!(repo.updated_at.is_some());
    }

    #[test]
    fn updated_at_accepts_bare_dates() {
        let repos: Vec<Repository> = serde_json::from_value(json!([
            { "name": "repo1", "stargazers_count": 100, "forks_count": 20, "updated_at": "2023-01-01" },
            { "name": "repo2", "stargazers_count": 200, "forks_count": 10, "updated_at": "2023-06-01" },
            { "name": "repo3", "stargazers_count": 50, "forks_count": 30, "updated_at": "2023-12-01" }
        ]))
        .unwrap();

        assert_eq!(
            repos[0].updated_at,
            Some("2023-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap())
        );
        assert!(repos.iter().all(|r| r.updated_at.is_some()));
    }

    #[test]
    fn unreadable_updated_at_is_absent() {
        let repos: Vec<Repository> = serde_json::from_value(json!([
            { "name": "a", "updated_at": "yesterday" },
            { "name": "b", "updated_at": 1700000000 },
            { "name": "c", "updated_at": null },
            { "name": "d" }
        ]))
        .unwrap();

        assert_eq!(repos.len(), 4);
        assert!(repos.iter().all(|r| r.updated_at.is_none()));
    }

    #[test]
    fn rfc3339_offsets_normalise_to_utc() {
        assert_eq!(
            parse_timestamp("2023-06-01T02:00:00+02:00"),
            parse_timestamp("2023-06-01T00:00:00Z")
        );
    }

    #[test]
    fn labels_without_names_still_deserialise() {
        let issue: Issue = serde_json::from_value(json!({
            "state": "open",
            "labels": [{ "name": "bug" }, { "color": "ff0000" }]
        }))
        .unwrap();

        assert_eq!(issue.labels().len(), 2);
        assert_eq!(issue.labels()[1].name, None);
    }

    #[test]
    fn issue_state_tolerates_unknown_values() {
        let issue: Issue = serde_json::from_value(json!({ "state": "locked" })).unwrap();
        assert_eq!(issue.state, IssueState::Other);

        let issue: Issue = serde_json::from_value(json!({ "state": "closed" })).unwrap();
        assert_eq!(issue.state, IssueState::Closed);
    }

    #[test]
    fn issue_labels_may_be_missing_or_null() {
        let missing: Issue = serde_json::from_value(json!({ "state": "open" })).unwrap();
        let null: Issue = serde_json::from_value(json!({ "state": "open", "labels": null })).unwrap();
        assert!(missing.labels().is_empty());
        assert!(null.labels().is_empty());
    }
}
