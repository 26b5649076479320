//! Newtype identifiers for the string fields of an [`crate::Event`].
//!
//! Every field an event carries is a distinct newtype wrapping a `String`. This
//! prevents accidentally interchanging, for example, a [`RepoName`] with a
//! [`BranchName`] even though both are plain text on the wire.
//!
//! All identifiers reject the empty string at construction, including when
//! deserialised, so a value of one of these types is always non-empty.

use serde::{Deserialize, Serialize};

use crate::errors::EmptyIdentifier;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display,
// TryFrom<String> (used by serde).
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(EmptyIdentifier {
                    kind: stringify!($name),
                })
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// The user or organisation that owns a repository (e.g. `"alice"`).
    Owner
}

string_id! {
    /// The name of a repository, without its owner (e.g. `"widget"`).
    RepoName
}

string_id! {
    /// A Git branch name (e.g. `"main"`, `"feature/login"`).
    BranchName
}

string_id! {
    /// A Git commit SHA.
    ///
    /// Expected to be a hex digest but the format is not checked; any non-empty
    /// text is accepted.
    CommitSha
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
