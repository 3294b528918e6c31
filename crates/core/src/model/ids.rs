use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing or validating an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },

    #[error("invalid {kind}: {raw:?}")]
    Malformed { kind: &'static str, raw: String },
}

/// Identifier of a top-level content section (e.g. `fundamentos`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Creates a validated `SectionId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Empty` if the value is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        non_empty(value.into(), "SectionId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an id from a compile-time constant that is known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a single study card inside a section (e.g. `1.3`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Creates a validated `CardId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Empty` if the value is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        non_empty(value.into(), "CardId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key of a question set: `<section>.<subsection>`, both parts decimal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuizId(String);

impl QuizId {
    /// Creates a validated `QuizId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Empty` for blank input and `IdError::Malformed` when the
    /// value is not two dot-separated runs of digits.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = non_empty(value.into(), "QuizId")?;
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        match value.split_once('.') {
            Some((major, minor)) if is_digits(major) && is_digits(minor) => Ok(Self(value)),
            _ => Err(IdError::Malformed {
                kind: "QuizId",
                raw: value,
            }),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(raw: String, kind: &'static str) -> Result<String, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty { kind });
    }
    Ok(trimmed.to_string())
}

macro_rules! string_id_impls {
    ($($name:ident),+) => {
        $(
            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({:?})", stringify!($name), self.0)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl FromStr for $name {
                type Err = IdError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }

            impl TryFrom<String> for $name {
                type Error = IdError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

string_id_impls!(SectionId, CardId, QuizId);

// ─── Tests ─────────────────────────────────────────────────────────────────────
