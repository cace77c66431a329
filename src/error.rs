use thiserror::Error;

use crate::wizard::FieldErrors;

/// Failure of a backend call. Never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend responded with HTTP {0}")]
    Status(u16),
    #[error("could not read backend response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrincipalError {
    #[error("principal is empty")]
    Empty,
    #[error("principal contains invalid character {0:?}")]
    InvalidChar(char),
    #[error("principal group {0} has the wrong length")]
    BadGroup(usize),
}

/// Reasons a wizard submission cannot start or did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("finish the remaining steps before submitting")]
    NotOnLastStep,
    #[error("a submission is already in progress")]
    InFlight,
    #[error("this profile has already been submitted")]
    AlreadySubmitted,
    #[error("you need to sign in before creating a profile")]
    MissingPrincipal,
    #[error("stored sign-in is invalid: {0}")]
    Principal(#[from] PrincipalError),
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("{0}")]
    Remote(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("draft could not be encoded: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for DraftError {
    fn from(e: serde_json::Error) -> Self {
        DraftError::Encode(e.to_string())
    }
}
