use thiserror::Error as ThisError;

///
/// ValidateIssue
///
/// A validation outcome is a value, never a panic. `Validation` carries the
/// message surfaced verbatim to the caller; `InvalidConfig` marks a validator
/// that was constructed with unusable settings.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateIssue {
    #[error("{0}")]
    Validation(String),

    #[error("invalid validator configuration: {0}")]
    InvalidConfig(String),
}

impl ValidateIssue {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

///
/// Validator
///
/// Single-shot check against a value. Implementations capture their
/// configuration at construction and stay immutable, so a validator can be
/// shared across threads and invoked repeatedly.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> Result<(), ValidateIssue>;
}

/// Format the shared rejection message for a value outside an allowed set.
///
/// Every membership failure in this workspace reproduces this exact shape,
/// so messages are deterministic and testable by string equality.
#[must_use]
pub fn must_be_one_of<'a, I>(label: &str, value: &str, allowed: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let allowed = allowed.into_iter().collect::<Vec<_>>().join("|");

    format!("{label} ({value}) must be one of {allowed}")
}

///
/// TESTS
///
