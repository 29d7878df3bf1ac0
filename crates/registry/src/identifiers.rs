//! Newtype identifiers for the feature registry domain.
//!
//! A registry name and a feature label are both plain strings underneath, but
//! they are never interchangeable: [`FeatureRegistry::new`] takes a
//! [`RegistryName`] and [`FeatureRegistry::add_feature`] takes a [`Feature`].
//!
//! Unlike most identifier newtypes these accept the empty string. Labels are
//! opaque; no content is rejected.
//!
//! [`FeatureRegistry::new`]: crate::FeatureRegistry::new
//! [`FeatureRegistry::add_feature`]: crate::FeatureRegistry::add_feature

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped labels.
// Generates: struct, new(), as_str(), into_string(), Display, From<String>,
// From<&str>, PartialEq<str>, PartialEq<&str>.
// ---------------------------------------------------------------------------
macro_rules! string_label {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps `value` without validation; any string is accepted.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the label as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the label, returning the owned string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_label! {
    /// The identifying name of a [`FeatureRegistry`](crate::FeatureRegistry).
    ///
    /// Set once at construction and never changed afterwards.
    RegistryName
}

string_label! {
    /// One feature label recorded by a registry.
    ///
    /// No semantic interpretation is placed on the content. Duplicates are
    /// meaningful: two equal labels added twice are two entries.
    Feature
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single program run.
///
/// Generated fresh for every CLI invocation and attached to the top-level
/// tracing span so all log events from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`RunId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
