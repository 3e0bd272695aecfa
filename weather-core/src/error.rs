use serde::Serialize;
use thiserror::Error;

/// User-visible reason a lookup ended in `Failed`.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The submitted location was empty after trimming. Never reaches the network.
    #[error("Please enter a valid location.")]
    EmptyInput,

    /// The provider answered, but did not recognise the location.
    #[error("City not found. Please try again.")]
    LocationNotFound,

    /// The request could not be completed.
    #[error("Network error. Please try again later.")]
    NetworkError,
}

/// Failure reported by a [`WeatherProvider`](crate::WeatherProvider).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("provider rejected the location with status {status}: {body}")]
    NotFound { status: u16, body: String },

    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned an unusable payload: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Collapse a provider failure into the category shown to the user.
    ///
    /// A payload we cannot read counts as an incomplete request, not as an
    /// unknown location.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NotFound { .. } => ErrorKind::LocationNotFound,
            FetchError::Transport(_) | FetchError::InvalidResponse(_) => ErrorKind::NetworkError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("a lookup is already in flight; wait for it to finish")]
    Busy,
}
