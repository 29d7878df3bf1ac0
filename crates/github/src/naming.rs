//! GitHub naming rules for accounts and repositories.

use std::sync::LazyLock;

use regex::Regex;

/// Longest username GitHub allows.
pub const MAX_USERNAME_LEN: usize = 39;

// Alphanumeric at both ends; underscores and hyphens allowed inside.
static REPO_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9_-]*[a-zA-Z0-9])?$").expect("Valid regex pattern")
});

// Alphanumeric at both ends; only hyphens allowed inside.
static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$").expect("Valid regex pattern")
});

/// Returns `true` for a valid owner or repository name segment.
pub(crate) fn is_valid_segment(segment: &str) -> bool {
    REPO_SEGMENT.is_match(segment)
}

/// Returns `true` if `value` is exactly `owner/repo` with both parts valid.
///
/// Either part may contain letters, digits, `_` and `-`, but must start and
/// end with a letter or digit.
pub fn is_valid_repo_format(value: &str) -> bool {
    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) => is_valid_segment(owner) && is_valid_segment(repo),
        _ => false,
    }
}

/// Returns `true` if `username` is a valid GitHub login.
///
/// At most [`MAX_USERNAME_LEN`] characters, letters, digits and single
/// hyphens only, no hyphen at either end.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && USERNAME.is_match(username)
        && !username.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_repo_strings() {
        for value in [
            "owner/repo",
            "my-org/my-repo",
            "user_name/repo_name",
            "A-Georgiou/github-skills-demo",
        ] {
            assert!(is_valid_repo_format(value), "{value}");
        }
    }

    #[test]
    fn rejects_malformed_repo_strings() {
        for value in [
            "invalid",
            "owner/repo/extra",
            "/repo",
            "owner/",
            "",
            "-owner/repo",
            "owner-/repo",
            "owner/-repo",
            "owner/repo-",
            "owner@/repo",
            "owner/repo!",
            "owner$/repo",
        ] {
            assert!(!is_valid_repo_format(value), "{value}");
        }
    }

    #[test]
    fn accepts_valid_usernames() {
        for name in ["user", "user123", "user-name", "A-Georgiou", "a"] {
            assert!(is_valid_username(name), "{name}");
        }
        assert!(is_valid_username(&"a".repeat(MAX_USERNAME_LEN)));
    }

    #[test]
    fn rejects_invalid_usernames() {
        for name in [
            "",
            "-user",
            "user-",
            "user--name",
            "user@name",
            "user_name",
            "user.name",
            "user!name",
        ] {
            assert!(!is_valid_username(name), "{name}");
        }
        assert!(!is_valid_username(&"a".repeat(MAX_USERNAME_LEN + 1)));
    }
}
